use thiserror::Error;

pub type Result<T> = std::result::Result<T, RadarError>;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Radar {radar}: dimension mismatch in '{field}': expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        radar: usize,
        field: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Radar {radar}: invalid station metadata: {source}")]
    InvalidStation {
        radar: usize,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Radar {radar}: {field} {value} does not fit its column (max {max})")]
    FieldOverflow {
        radar: usize,
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("{count} radars do not fit the TOTAL RADAR column (max {max})")]
    TooManyRadars { count: usize, max: usize },

    #[error("Invalid FM-128 format at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for RadarError {
    fn from(e: config::ConfigError) -> Self {
        RadarError::Config(e.to_string())
    }
}

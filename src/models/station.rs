use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Fixed location of one radar. The name is written into a 12-column
/// field, so anything longer would shift every following column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1, max = 12), custom(function = "validate_ascii_name"))]
    pub name: String,

    pub latitude: f64,

    pub longitude: f64,

    /// Height of the antenna above sea level [m]
    pub elevation: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
        }
    }
}

// Columns are counted in bytes, so every character must be one byte wide.
fn validate_ascii_name(name: &str) -> Result<(), ValidationError> {
    if !name.is_ascii() {
        return Err(ValidationError::new("non_ascii_name"));
    }
    Ok(())
}

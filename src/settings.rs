use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{MissingDataPolicy, PointMode};
use crate::utils::constants::{DEFAULT_OUTPUT_FILE, ENV_PREFIX};

/// Encoder configuration.
///
/// Layered from lowest to highest precedence: built-in defaults, an
/// optional TOML file, then `FM128_*` environment variables. CLI flags are
/// applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderSettings {
    #[serde(default)]
    pub point_mode: PointMode,

    #[serde(default)]
    pub missing_data_policy: MissingDataPolicy,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            point_mode: PointMode::default(),
            missing_data_policy: MissingDataPolicy::default(),
            output_file: default_output_file(),
        }
    }
}

impl EncoderSettings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn with_point_mode(mut self, point_mode: Option<PointMode>) -> Self {
        if let Some(mode) = point_mode {
            self.point_mode = mode;
        }
        self
    }

    pub fn with_missing_data_policy(mut self, policy: Option<MissingDataPolicy>) -> Self {
        if let Some(policy) = policy {
            self.missing_data_policy = policy;
        }
        self
    }

    pub fn with_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        if let Some(path) = output_file {
            self.output_file = path;
        }
        self
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing value for '{flag}'")]
    MissingValue { flag: String },

    #[error("Invalid number for '{flag}': '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown argument: '{0}'")]
    UnknownArgument(String),

    #[error("iterations must be greater than zero")]
    ZeroIterations,
}

impl DemoError {
    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }

    pub fn invalid_number(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            flag: flag.into(),
            value: value.into(),
        }
    }
}

// Demo configuration: TOML file first, command-line flags on top.

use crate::error::DemoError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_iterations() -> u64 {
    10_000
}

fn default_warmup() -> u64 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    #[serde(default = "default_warmup")]
    pub warmup: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            iterations: default_iterations(),
            warmup: default_warmup(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, DemoError> {
        let config: DemoConfig = toml::from_str(s)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse `--config <path>`, `--iterations <n>` and `--warmup <n>`.
    /// Flags win over the config file regardless of their order.
    pub fn from_args<I, S>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_path: Option<PathBuf> = None;
        let mut iterations: Option<u64> = None;
        let mut warmup: Option<u64> = None;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--config" => {
                    let value = args.next().ok_or_else(|| DemoError::missing_value(&flag))?;
                    config_path = Some(PathBuf::from(value));
                }
                "--iterations" => {
                    let value = args.next().ok_or_else(|| DemoError::missing_value(&flag))?;
                    iterations = Some(parse_number(&flag, &value)?);
                }
                "--warmup" => {
                    let value = args.next().ok_or_else(|| DemoError::missing_value(&flag))?;
                    warmup = Some(parse_number(&flag, &value)?);
                }
                other => return Err(DemoError::UnknownArgument(other.to_string())),
            }
        }

        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(n) = iterations {
            config.iterations = n;
        }
        if let Some(n) = warmup {
            config.warmup = n;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.iterations == 0 {
            return Err(DemoError::ZeroIterations);
        }
        Ok(())
    }
}

fn parse_number(flag: &str, value: &str) -> Result<u64, DemoError> {
    value
        .parse()
        .map_err(|_| DemoError::invalid_number(flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let config = DemoConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.warmup, 100);
    }

    #[test]
    fn test_toml_missing_fields_use_defaults() {
        let config = DemoConfig::from_toml_str("iterations = 5").unwrap();
        assert_eq!(config.iterations, 5);
        assert_eq!(config.warmup, 100);

        let empty = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(empty, DemoConfig::default());
    }

    #[test]
    fn test_toml_wrong_type_is_error() {
        let result = DemoConfig::from_toml_str("iterations = \"many\"");
        assert!(matches!(result, Err(DemoError::Toml(_))));
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = config_file("iterations = 50\nwarmup = 7\n");
        let path = file.path().to_str().unwrap().to_string();

        // Flag comes before --config, still wins
        let config =
            DemoConfig::from_args(vec!["--iterations", "3", "--config", path.as_str()]).unwrap();

        assert_eq!(config.iterations, 3);
        assert_eq!(config.warmup, 7);
    }

    #[test]
    fn test_missing_config_file() {
        let result = DemoConfig::from_args(vec!["--config", "/nonexistent/pass_semantics.toml"]);
        match result {
            Err(DemoError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/pass_semantics.toml"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_value() {
        let result = DemoConfig::from_args(vec!["--warmup"]);
        assert!(matches!(result, Err(DemoError::MissingValue { ref flag }) if flag == "--warmup"));
    }

    #[test]
    fn test_invalid_number() {
        let result = DemoConfig::from_args(vec!["--iterations", "ten"]);
        match result {
            Err(e @ DemoError::InvalidNumber { .. }) => {
                assert_eq!(e.to_string(), "Invalid number for '--iterations': 'ten'");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_argument() {
        let result = DemoConfig::from_args(vec!["--fast"]);
        assert!(matches!(result, Err(DemoError::UnknownArgument(ref a)) if a == "--fast"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = DemoConfig::from_args(vec!["--iterations", "0"]);
        assert!(matches!(result, Err(DemoError::ZeroIterations)));

        let file = config_file("iterations = 0");
        assert!(DemoConfig::load(file.path()).unwrap().validate().is_err());
    }
}

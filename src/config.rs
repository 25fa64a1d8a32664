//! Launch configuration.
//!
//! [`LaunchConfig`] controls how the engine starts the thread that runs each
//! task. It can be built in code, deserialized with serde, overridden from
//! `BRICKWALL_*` environment variables, or (with the `config-file` feature)
//! loaded from TOML.

use std::collections::BTreeMap;
#[cfg(feature = "config-file")]
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

/// Thread name prefix used when none is configured.
pub const DEFAULT_THREAD_NAME: &str = "brickwall-task";

/// Prefix of the environment variables read by [`LaunchConfig::with_env_overrides`].
pub const ENV_PREFIX: &str = "BRICKWALL_";

/// How task threads are started.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Prefix of each task thread's name; the task position is appended.
    pub thread_name: String,
    /// Stack size for task threads. `None` uses the platform default.
    pub stack_size: Option<usize>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            stack_size: None,
        }
    }
}

impl LaunchConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thread name prefix.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Sets the task thread stack size in bytes.
    #[must_use]
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Checks the configuration for values `std::thread::Builder` would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_name.is_empty() {
            return Err(ConfigError::Invalid {
                field: "thread_name",
                reason: "must not be empty",
            });
        }
        if self.thread_name.contains('\0') {
            return Err(ConfigError::Invalid {
                field: "thread_name",
                reason: "must not contain NUL bytes",
            });
        }
        if self.stack_size == Some(0) {
            return Err(ConfigError::Invalid {
                field: "stack_size",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }

    /// Applies `BRICKWALL_THREAD_NAME` and `BRICKWALL_STACK_SIZE` from the
    /// process environment, then validates.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let overrides: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        self.with_overrides(&overrides)
    }

    /// Applies `BRICKWALL_*` overrides from an explicit map, then validates.
    ///
    /// Unknown `BRICKWALL_*` keys are rejected; keys without the prefix are
    /// ignored.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        for (key, value) in overrides {
            match key.as_str() {
                "BRICKWALL_THREAD_NAME" => self.thread_name.clone_from(value),
                "BRICKWALL_STACK_SIZE" => {
                    let bytes = value.trim().parse::<usize>().map_err(|_| {
                        ConfigError::InvalidOverride {
                            key: key.clone(),
                            value: value.clone(),
                        }
                    })?;
                    self.stack_size = Some(bytes);
                }
                other if other.starts_with(ENV_PREFIX) => {
                    return Err(ConfigError::InvalidOverride {
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
                _ => {}
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Parses and validates a TOML document.
    ///
    /// ```toml
    /// thread_name = "fetch"
    /// stack_size = 262144
    /// ```
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`LaunchConfig`].
    #[error("config parse error: {0}")]
    Parse(String),
    /// A field holds a value the launcher cannot use.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// An environment override was unknown or unparseable.
    #[error("invalid override {key}={value}")]
    InvalidOverride {
        /// Variable name.
        key: String,
        /// Variable value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn default_is_valid() {
        let config = LaunchConfig::default();
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
        assert_eq!(config.stack_size, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = LaunchConfig::new().thread_name("fetch").stack_size(64 * 1024);
        assert_eq!(config.thread_name, "fetch");
        assert_eq!(config.stack_size, Some(64 * 1024));
    }

    #[test]
    fn rejects_empty_name_and_zero_stack() {
        let empty = LaunchConfig::new().thread_name("");
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::Invalid {
                field: "thread_name",
                ..
            })
        ));

        let nul = LaunchConfig::new().thread_name("a\0b");
        assert!(nul.validate().is_err());

        let zero = LaunchConfig::new().stack_size(0);
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::Invalid {
                field: "stack_size",
                ..
            })
        ));
    }

    #[test]
    fn overrides_apply() {
        let config = LaunchConfig::new()
            .with_overrides(&overrides(&[
                ("BRICKWALL_THREAD_NAME", "io"),
                ("BRICKWALL_STACK_SIZE", " 131072 "),
                ("PATH", "/usr/bin"),
            ]))
            .expect("valid overrides");
        assert_eq!(config.thread_name, "io");
        assert_eq!(config.stack_size, Some(131_072));
    }

    #[test]
    fn bad_overrides_rejected() {
        let err = LaunchConfig::new()
            .with_overrides(&overrides(&[("BRICKWALL_STACK_SIZE", "big")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid override BRICKWALL_STACK_SIZE=big");

        let unknown = LaunchConfig::new()
            .with_overrides(&overrides(&[("BRICKWALL_POOL", "4")]))
            .unwrap_err();
        assert!(matches!(unknown, ConfigError::InvalidOverride { .. }));

        let empty_name = LaunchConfig::new()
            .with_overrides(&overrides(&[("BRICKWALL_THREAD_NAME", "")]))
            .unwrap_err();
        assert!(matches!(empty_name, ConfigError::Invalid { .. }));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: LaunchConfig =
            toml::from_str(r#"thread_name = "scan""#).expect("partial config");
        assert_eq!(config.thread_name, "scan");
        assert_eq!(config.stack_size, None);
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed: Result<LaunchConfig, _> = toml::from_str("workers = 4");
        assert!(parsed.is_err());
    }
}

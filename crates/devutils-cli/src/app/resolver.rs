//! Path resolution and loading for the config file.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DevUtilsConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Where the config file lives and whether the user named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set by `--config` or `DEVUTILS_CONFIG` rather than the XDG default.
    pub explicit: bool,
}

/// Resolve the config file path: `--config`, then `DEVUTILS_CONFIG`, then XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigLocation> {
    let named = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .filter(|value| !value.trim().is_empty());
    match named {
        Some(path) => Ok(ConfigLocation {
            path: PathBuf::from(path),
            explicit: true,
        }),
        None => Ok(ConfigLocation {
            path: default_config_path()?,
            explicit: false,
        }),
    }
}

/// Load the config at `location`.
///
/// A missing default file means built-in defaults; a missing file the user
/// named is an error.
pub fn load_config(location: &ConfigLocation) -> anyhow::Result<DevUtilsConfig> {
    if !location.path.exists() {
        if location.explicit {
            return Err(CliError::not_found(
                format!("No config file at {}", location.path.display()),
                "Run `devutils config init` to create it, or drop --config.",
            )
            .into());
        }
        debug!(path = %location.path.display(), "no config file, using defaults");
        return Ok(DevUtilsConfig::default());
    }
    debug!(path = %location.path.display(), "loading config");
    read_config(&location.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn missing_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        std::env::temp_dir().join(format!("devutils_missing_{}_{}.toml", std::process::id(), nanos))
    }

    #[test]
    fn test_missing_default_is_defaults() {
        let location = ConfigLocation {
            path: missing_path(),
            explicit: false,
        };
        assert_eq!(load_config(&location).unwrap(), DevUtilsConfig::default());
    }

    #[test]
    fn test_missing_explicit_is_not_found() {
        let location = ConfigLocation {
            path: missing_path(),
            explicit: true,
        };
        let err = load_config(&location).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("typed error");
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_reads_existing_file() {
        let path = missing_path();
        std::fs::write(&path, "[base]\ncustom_base = 16\n").unwrap();
        let location = ConfigLocation {
            path: path.clone(),
            explicit: true,
        };
        let config = load_config(&location).unwrap();
        assert_eq!(config.base.custom_base.get(), 16);
        let _ = std::fs::remove_file(path);
    }
}

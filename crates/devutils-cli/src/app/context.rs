//! Application context for the DevUtils CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use once_cell::unsync::OnceCell;

use devutils_core::{InputFormat, Radix};

use crate::cli::Cli;
use crate::config::DevUtilsConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_config_path, ConfigLocation};
use super::zone::Zone;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    location: OnceCell<ConfigLocation>,
    config: OnceCell<DevUtilsConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            location: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolved config file location.
    pub fn config_location(&self) -> anyhow::Result<&ConfigLocation> {
        self.location
            .get_or_try_init(|| resolve_config_path(self.cli))
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DevUtilsConfig> {
        self.config
            .get_or_try_init(|| load_config(self.config_location()?))
    }

    /// Radix of the custom field: flag, then config.
    pub fn custom_base(&self, flag: Option<Radix>) -> anyhow::Result<Radix> {
        match flag {
            Some(radix) => Ok(radix),
            None => Ok(self.config()?.base.custom_base),
        }
    }

    /// Input format: flag, then config.
    pub fn input_format(&self, flag: Option<InputFormat>) -> anyhow::Result<InputFormat> {
        match flag {
            Some(format) => Ok(format),
            None => Ok(self.config()?.time.input_format),
        }
    }

    /// Display zone: flag, then config, then the system zone.
    pub fn zone(&self, flag: Option<&str>) -> anyhow::Result<Zone> {
        let name = match flag {
            Some(name) => Some(name.to_string()),
            None => self.config()?.time.timezone.clone(),
        };
        match name {
            Some(name) => Ok(name.parse::<Zone>()?),
            None => Ok(Zone::Local),
        }
    }

    /// UI context from flags and the `[ui]` config section.
    ///
    /// Never fails: a config that cannot be loaded leaves the flags alone,
    /// so errors about the config itself can still be rendered.
    pub fn ui_context(&self) -> UiContext {
        let (color, unicode) = match self.config() {
            Ok(config) => (config.ui.color, config.ui.unicode),
            Err(_) => (true, true),
        };
        UiContext::from_env(
            self.cli.json,
            self.cli.format.as_deref(),
            self.cli.no_color || !color,
            self.cli.ascii || !unicode,
        )
    }
}

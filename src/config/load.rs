use std::{env, path::PathBuf};

use crate::platform::HostOs;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file first and lets environment
/// variables (prefix `SERATO_TOOLS__`) override it.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SERATO_TOOLS")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .with_list_parse_key("library.duplicate_extensions")
                .with_list_parse_key("crates.columns")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.crates.columns.iter().all(|c| c.trim().is_empty()) {
            return Err("crates.columns must name at least one column".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must not be empty".to_string());
        }
        if self.library.duplicate_extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.duplicate_extensions must not be empty".to_string());
        }
        if let Some(p) = &self.crates.platform {
            if HostOs::parse(p).is_none() {
                return Err(format!("crates.platform must be \"windows\" or \"macos\", got {p:?}"));
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `SERATO_TOOLS_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SERATO_TOOLS_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/serato-tools/config.toml`
/// or `~/.config/serato-tools/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("serato-tools").join("config.toml"))
}

use std::{env, path::PathBuf};

use super::schema::{OutputFormat, Settings};

const CONFIG_PATH_VAR: &str = "TRACKMETA_CONFIG_PATH";
const ENV_PREFIX: &str = "TRACKMETA";

impl Settings {
    /// Defaults, overlaid by the config file when one exists, overlaid by
    /// `TRACKMETA__SECTION__KEY` variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the extractor cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.extract.batch_size == 0 {
            return Err("extract.batch_size must be >= 1".to_string());
        }
        if self.output.format == OutputFormat::Line && self.output.line_fields.is_empty() {
            return Err("output.line_fields must not be empty when output.format = \"line\"".to_string());
        }
        Ok(())
    }
}

/// An explicit `TRACKMETA_CONFIG_PATH` wins over [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `trackmeta/config.toml` inside the XDG config home, which defaults to
/// `$HOME/.config`. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|home| home.join("trackmeta").join("config.toml"))
}

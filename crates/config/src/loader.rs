//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the default config file plus environment
/// overrides (`WARP_`-prefixed, `__`-separated nesting).
pub fn load_config() -> Result<Settings, ConfigError> {
	load_config_from("config/config")
}

/// Load configuration from a specific file path (extension optional).
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(Environment::with_prefix("WARP").separator("__"))
		.build()?;

	s.try_deserialize()
}

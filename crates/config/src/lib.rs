//! Warp Config
//!
//! Configuration management and startup utilities for the Warp Route
//! Aggregator: settings structures, file/env loading, validation, the
//! domain-to-chain directory, and tracing initialization.

pub mod chain_directory;
pub mod loader;
pub mod settings;
pub mod startup;

// Re-export the loader's error type for callers that surface load failures
pub use config::ConfigError;

pub use chain_directory::ChainDirectory;
pub use loader::{load_config, load_config_from};
pub use settings::{
	ChainSettings, ConfigValidationError, FailurePolicySetting, LogFormat, LoggingSettings,
	ResolverSettings, Settings, StaticRouteSettings, TokenKindSetting, TokenSettings,
};
pub use startup::{init_tracing, log_startup};

//! Tracing initialization and startup logging

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, LoggingSettings};
use crate::Settings;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call
/// only once per process; tests use their own subscribers.
pub fn init_tracing(settings: &LoggingSettings) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	match settings.format {
		LogFormat::Json => builder.json().init(),
		LogFormat::Pretty => builder.pretty().init(),
		LogFormat::Compact => builder.compact().init(),
	}
}

/// Log what was loaded, before the first computation pass runs.
pub fn log_startup(settings: &Settings) {
	// The root package name, not the current crate
	let service_name = "warp-aggregator";

	info!(
		service = service_name,
		version = env!("CARGO_PKG_VERSION"),
		chains = settings.chains.len(),
		tokens = settings.tokens.len(),
		static_routes = settings.static_routes.len(),
		"Configuration loaded"
	);
}

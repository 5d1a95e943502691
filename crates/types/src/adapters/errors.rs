//! Error types for adapter selection and adapter operations

use thiserror::Error;

/// Result alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Adapter selection and operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("No adapter registered for protocol '{protocol}' and token kind '{kind}'")]
	UnsupportedProtocol { protocol: String, kind: String },

	#[error("Cannot select adapter for chain '{chain_id}': {reason}")]
	InvalidChain { chain_id: String, reason: String },

	#[error("Timeout after {timeout_ms}ms in {operation} on adapter {adapter_id}")]
	Timeout {
		adapter_id: String,
		operation: String,
		timeout_ms: u64,
	},

	#[error("Connection error from adapter {adapter_id}: {reason}")]
	Connection { adapter_id: String, reason: String },

	#[error("Invalid response from adapter {adapter_id}: {reason}")]
	InvalidResponse { adapter_id: String, reason: String },

	#[error("Adapter {adapter_id} reported an error: {message}")]
	Adapter { adapter_id: String, message: String },
}

impl AdapterError {
	/// Create a timeout error for one guarded adapter call.
	pub fn timeout(adapter_id: impl Into<String>, operation: impl Into<String>, timeout_ms: u64) -> Self {
		Self::Timeout {
			adapter_id: adapter_id.into(),
			operation: operation.into(),
			timeout_ms,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages_carry_context() {
		let error = AdapterError::UnsupportedProtocol {
			protocol: "fuel".to_string(),
			kind: "collateral".to_string(),
		};
		assert!(error.to_string().contains("fuel"));
		assert!(error.to_string().contains("collateral"));

		let error = AdapterError::timeout("evm-mock", "list_remote_routers", 5000);
		assert!(error.to_string().contains("5000ms"));
		assert!(error.to_string().contains("list_remote_routers"));
	}
}

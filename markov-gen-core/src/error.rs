use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the Markov model library.
#[derive(Error, Debug)]
pub enum ModelError {
	/// The corpus ended before a full initial window could be formed.
	#[error("corpus ended after {got} characters, need at least {needed} to form a window")]
	InsufficientInput { needed: usize, got: usize },

	/// Invalid model configuration (ex. zero window length).
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// I/O error with file context
	#[error("I/O error for {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

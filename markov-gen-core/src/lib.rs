//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order character Markov model including:
//! - Window-indexed next-character frequency accumulation
//! - Probability and cumulative-probability derivation
//! - Weighted (inverse-CDF) random sampling with seedable randomness
//! - Internal utilities for corpus loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core Markov model and sampling logic.
///
/// This module exposes the model interface while keeping internal
/// per-window statistics private where possible.
pub mod model;

/// Typed errors returned by training and corpus loading.
pub mod error;

/// I/O utilities (corpus loading).
pub mod io;

pub use error::{ModelError, Result};
pub use model::markov_model::MarkovModel;

//! Top-level module for the Markov generation system.
//!
//! This module provides a fixed-order character Markov model, including:
//! - Per-window next-character statistics (`FrequencyTable`)
//! - The trainable, sampleable model itself (`MarkovModel`)

/// Fixed-order character Markov model.
///
/// Handles corpus ingestion, per-window frequency accumulation,
/// probability finalization and weighted text generation.
pub mod markov_model;

/// Per-window record of observed next-character counts and the
/// probabilities derived from them.
///
/// Tracks entries in first-seen order and supports inverse-CDF sampling.
pub mod frequency_table;

use std::collections::HashMap;
use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::frequency_table::FrequencyTable;
use crate::error::{ModelError, Result};

/// Represents a fixed-order character Markov model.
///
/// The `MarkovModel` stores a [`FrequencyTable`] for every window
/// (contiguous substring of `window_length` characters) observed in the
/// training corpus and generates new text by repeatedly sampling the
/// next character from the table of the current trailing window.
///
/// # Responsibilities
/// - Build the window map from a character stream (`train`)
/// - Finalize every table's probabilities once training ends
/// - Generate text by weighted random sampling (`generate`)
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key in `tables` has exactly `window_length` characters
/// - Every reachable table is finalized before any generation call
///
/// # Notes
/// - `train` must be called exactly once per instance; a second call
///   would double-count and is a caller contract violation.
/// - The random source is owned by the model. Constructing with
///   [`MarkovModel::with_seed`] makes generation reproducible; the model
///   is not meant to be shared across concurrent generation tasks.
#[derive(Debug)]
pub struct MarkovModel {
	/// The window length used by this model (context size in characters).
	window_length: usize,

	/// Mapping from a window to its next-character statistics.
	tables: HashMap<String, FrequencyTable>,

	/// The random number generator used for sampling draws.
	rng: SmallRng,
}

impl MarkovModel {
	/// Creates a model with the given window length and an
	/// entropy-seeded random source.
	///
	/// Generating texts from this model multiple times will produce
	/// different random texts. Good for production.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidConfiguration`] if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::build(window_length, SmallRng::from_os_rng())
	}

	/// Creates a model with the given window length and a fixed seed.
	///
	/// Generating texts from this model multiple times with the same
	/// seed value will produce the same random texts. Good for debugging
	/// and testing.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidConfiguration`] if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::build(window_length, SmallRng::seed_from_u64(seed))
	}

	fn build(window_length: usize, rng: SmallRng) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidConfiguration(
				"window length must be at least 1".to_owned(),
			));
		}
		Ok(Self { window_length, tables: HashMap::new(), rng })
	}

	/// Returns the window length of this model.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the number of distinct windows observed during training.
	pub fn window_count(&self) -> usize {
		self.tables.len()
	}

	/// Returns the statistics of one window, if it was observed.
	pub fn table(&self, window: &str) -> Option<&FrequencyTable> {
		self.tables.get(window)
	}

	/// Builds the model from the given character stream (the corpus).
	///
	/// Reads `window_length` characters to form the initial window, then
	/// processes the rest of the stream one character at a time: each
	/// character updates the table of the current window, after which the
	/// window slides forward by one. Once the stream is exhausted, every
	/// table is finalized.
	///
	/// # Errors
	/// Returns [`ModelError::InsufficientInput`] if the stream ends
	/// before a full initial window could be formed; the model's map is
	/// left empty in that case.
	pub fn train<I>(&mut self, corpus: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		let mut chars = corpus.into_iter();

		// Reads just enough characters to form the first window
		let mut window = String::new();
		for got in 0..self.window_length {
			match chars.next() {
				Some(chr) => window.push(chr),
				None => {
					return Err(ModelError::InsufficientInput {
						needed: self.window_length,
						got,
					});
				}
			}
		}

		// Processes the rest of the corpus, one character at a time
		let mut processed = self.window_length;
		for chr in chars {
			self.tables
				.entry(window.clone())
				.or_insert_with(FrequencyTable::new)
				.update(chr);

			// Advances the window: drop its first character, append chr
			window.remove(0);
			window.push(chr);
			processed += 1;
		}

		// All characters have been counted; derive p and cp everywhere.
		// Order does not matter, tables are independent.
		for table in self.tables.values_mut() {
			table.finalize();
		}

		log::debug!(
			"trained {} windows (length {}) from {} characters",
			self.tables.len(),
			self.window_length,
			processed
		);
		Ok(())
	}

	/// Generates a random text based on the probabilities learned
	/// during training.
	///
	/// Starting from `initial_text`, the trailing `window_length`
	/// characters are looked up and a next character is drawn from the
	/// matching table, until the result reaches `target_length`
	/// characters or the current window was never observed.
	///
	/// # Notes
	/// - If `initial_text` has fewer than `window_length` characters it
	///   is returned unchanged; there is not enough context to look
	///   anything up.
	/// - An unseen window terminates generation early; the partial
	///   result is returned as-is. Neither case is an error, and the
	///   result is always a prefix-extension of `initial_text`.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let mut length = initial_text.chars().count();
		if length < self.window_length {
			return initial_text.to_owned();
		}

		let mut result = initial_text.to_owned();
		let mut window = last_n_chars(initial_text, self.window_length);

		while length < target_length {
			let Some(table) = self.tables.get(&window) else {
				// Unseen context, nothing to sample from
				break;
			};

			let draw: f64 = self.rng.random();
			let chr = table.sample(draw);

			result.push(chr);
			length += 1;

			window.remove(0);
			window.push(chr);
		}
		result
	}
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned. Handles UTF-8 correctly (multibyte characters).
fn last_n_chars(s: &str, n: usize) -> String {
	if n > s.chars().count() {
		return s.to_owned();
	}
	s.chars()
		.rev()
		.take(n)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect()
}

impl fmt::Display for MarkovModel {
	/// Renders the window map for debugging.
	///
	/// One line per window, `window : (chr count p cp) ...`. Not a
	/// stable serialization format.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, table) in &self.tables {
			writeln!(f, "{} : {}", window, table)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trained(window_length: usize, seed: u64, corpus: &str) -> MarkovModel {
		let mut model = MarkovModel::with_seed(window_length, seed).unwrap();
		model.train(corpus.chars()).unwrap();
		model
	}

	#[test]
	fn zero_window_length_is_rejected() {
		assert!(matches!(
			MarkovModel::new(0),
			Err(ModelError::InvalidConfiguration(_))
		));
	}

	#[test]
	fn train_counts_windows_in_stream_order() {
		let model = trained(1, 1, "aab");

		// "a" is the only window followed by anything: 'a' once, 'b' once
		assert_eq!(model.window_count(), 1);
		let table = model.table("a").unwrap();
		let chars: Vec<char> = table.entries().iter().map(|e| e.chr).collect();
		assert_eq!(chars, vec!['a', 'b']);
		assert_eq!(table.entries()[0].count, 1);
		assert_eq!(table.entries()[1].count, 1);
	}

	#[test]
	fn train_slides_window_one_character_at_a_time() {
		let model = trained(2, 1, "abab");

		assert_eq!(model.window_count(), 2);
		assert_eq!(model.table("ab").unwrap().entries()[0].chr, 'a');
		assert_eq!(model.table("ba").unwrap().entries()[0].chr, 'b');
	}

	#[test]
	fn train_on_short_corpus_fails_and_leaves_map_empty() {
		let mut model = MarkovModel::with_seed(3, 1).unwrap();
		let err = model.train("ab".chars()).unwrap_err();

		assert!(matches!(
			err,
			ModelError::InsufficientInput { needed: 3, got: 2 }
		));
		assert_eq!(model.window_count(), 0);
	}

	#[test]
	fn generate_returns_short_initial_text_unchanged() {
		let mut model = trained(3, 1, "abcabcabc");
		assert_eq!(model.generate("ab", 10), "ab");
	}

	#[test]
	fn generate_stops_on_unseen_window() {
		let mut model = trained(1, 1, "aab");
		assert_eq!(model.generate("z", 5), "z");
	}

	#[test]
	fn generate_extends_to_target_length_on_forced_chain() {
		// Single-character alphabet, the chain can only produce 'a'
		let mut model = trained(1, 1, "aaaaaa");
		assert_eq!(model.generate("a", 5), "aaaaa");
	}

	#[test]
	fn generate_result_is_prefix_extension_bounded_by_target() {
		let mut model = trained(2, 9, "the quick brown fox jumps over the lazy dog");
		let result = model.generate("th", 30);

		assert!(result.starts_with("th"));
		assert!(result.chars().count() <= 30);
	}

	#[test]
	fn same_seed_generates_identical_text() {
		let corpus = "it was the best of times, it was the worst of times";
		let mut first = trained(2, 42, corpus);
		let mut second = trained(2, 42, corpus);

		assert_eq!(first.generate("it", 40), second.generate("it", 40));
	}

	#[test]
	fn multibyte_characters_are_handled_as_single_units() {
		let mut model = trained(1, 1, "ééé");
		assert_eq!(model.generate("é", 3), "ééé");
	}

	#[test]
	fn display_dumps_window_entries() {
		let model = trained(1, 1, "aab");
		let dump = model.to_string();

		assert!(dump.contains("a : "));
		assert!(dump.contains("(a 1"));
		assert!(dump.contains("(b 1"));
	}
}

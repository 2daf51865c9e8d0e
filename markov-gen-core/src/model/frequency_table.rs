use std::fmt;

/// Character returned by [`FrequencyTable::sample`] when the draw lands
/// past the last cumulative bound (floating-point edge case).
const FALLBACK_CHAR: char = ' ';

/// A single observed next-character and its derived statistics.
///
/// `p` and `cp` stay at 0.0 until [`FrequencyTable::finalize`] runs.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	/// The observed character.
	pub chr: char,
	/// How many times this character followed the table's window.
	pub count: u64,
	/// Probability of this character (count / total), set by `finalize`.
	pub p: f64,
	/// Cumulative probability up to and including this entry, set by `finalize`.
	pub cp: f64,
}

/// Represents the next-character statistics of one fixed window.
///
/// A `FrequencyTable` stores all characters observed immediately after
/// its window, in first-seen order, together with the probabilities
/// derived from their counts.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// # Responsibilities
/// - Accumulate next-character occurrences during training
/// - Derive probabilities and cumulative probabilities once training ends
/// - Select the next character from a uniform draw (inverse-CDF sampling)
///
/// # Invariants
/// - Entries are kept in first-seen order; the cumulative probabilities
///   are a running sum in that exact order
/// - Each entry count is strictly positive
/// - After `finalize`, probabilities sum to 1.0 (up to rounding) and the
///   last entry's `cp` is ~1.0
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
	/// Observed entries, in the order each character was first seen.
	entries: Vec<CharData>,
}

impl FrequencyTable {
	/// Creates a new empty table.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records an occurrence of `chr` after this table's window.
	///
	/// - If the character was already observed, its count is increased.
	/// - Otherwise, a new entry is appended with an initial count of 1,
	///   preserving first-seen order.
	pub fn update(&mut self, chr: char) {
		match self.entries.iter_mut().find(|e| e.chr == chr) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharData { chr, count: 1, p: 0.0, cp: 0.0 }),
		}
	}

	/// Computes the `p` and `cp` fields of every entry from the
	/// accumulated counts.
	///
	/// Walks the entries in first-seen order, setting each probability to
	/// `count / total` and each cumulative probability to the running sum.
	/// Deterministic, a pure function of the counts and insertion order.
	///
	/// Must be called exactly once, after the whole corpus has been
	/// consumed; a table is never finalized empty (every table is created
	/// by a first `update`).
	pub fn finalize(&mut self) {
		debug_assert!(!self.entries.is_empty(), "finalize on empty table");

		let total: u64 = self.entries.iter().map(|e| e.count).sum();

		let mut running = 0.0;
		for entry in &mut self.entries {
			entry.p = entry.count as f64 / total as f64;
			entry.cp = running + entry.p;
			running += entry.p;
		}
	}

	/// Selects a character from a uniform draw in `[0, 1)`.
	///
	/// Scans entries in first-seen order and returns the first one whose
	/// cumulative probability strictly exceeds the draw.
	///
	/// If no entry qualifies (a draw at or beyond the last cumulative
	/// bound, which rounding can produce) a space character is returned
	/// instead of failing. This fallback is deliberate, observable
	/// behavior and must not be turned into an error.
	pub fn sample(&self, draw: f64) -> char {
		for entry in &self.entries {
			if entry.cp > draw {
				return entry.chr;
			}
		}
		FALLBACK_CHAR
	}

	/// Read-only view of the entries, in first-seen order.
	pub fn entries(&self) -> &[CharData] {
		&self.entries
	}
}

impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "({} {} {:.4} {:.4})", entry.chr, entry.count, entry.p, entry.cp)?;
		}
		Ok(())
	}
}

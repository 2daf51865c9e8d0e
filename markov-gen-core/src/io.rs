use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ModelError, Result};

/// Reads a corpus file and returns its full contents as a `String`.
///
/// The returned string's `chars()` iterator is the character stream
/// consumed by [`crate::MarkovModel::train`].
///
/// # Errors
/// Returns [`ModelError::Io`] with the offending path if the file
/// cannot be opened or read.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut f| f.read_to_string(&mut contents))
		.map_err(|source| ModelError::Io { path: path.to_path_buf(), source })?;
	Ok(contents)
}

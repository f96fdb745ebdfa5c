// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// Digest command handlers (word/file)

use crate::rgt::error::TableError;
use crate::rgt::hash::{digest_file_hex, digest_hex};
use colored::Colorize;
use std::path::Path;

/// Hash a literal word and print its digest.
pub fn digest_word(
	algorithm: &str,
	word: &str,
) -> Result<String, TableError> {
	let digest = digest_hex(algorithm, word.as_bytes())?;
	println!("{}  Hash of word:\n{}", "[+]".green(), digest);
	Ok(digest)
}

/// Hash the whole contents of a file and print its digest.
pub fn digest_file(
	algorithm: &str,
	path: &Path,
) -> Result<String, TableError> {
	let digest = digest_file_hex(algorithm, path)?;
	println!("{}  Hash of file:\n{}", "[+]".green(), digest);
	Ok(digest)
}

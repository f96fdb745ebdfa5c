// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: worker.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::error::TableError;
use crate::rgt::hash::{DigestAlgorithm, RHash};
use crate::rgt::observe::TableObserver;
use crate::rgt::partition::WorkRange;
use crate::rgt::wordlist::WordList;
use std::fmt::{self, Write};

/// One `word:digest` pair of the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashRecord {
	pub word: String,
	pub digest: String,
}

impl fmt::Display for HashRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.word, self.digest)
	}
}

/// Records produced by one worker, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WorkerResult {
	pub worker: usize,
	pub range: WorkRange,
	pub records: Vec<HashRecord>,
}

impl WorkerResult {
	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// The worker's block as it lands in the table file.
	pub fn to_lines(&self) -> String {
		let mut out = String::new();
		for record in &self.records {
			let _ = writeln!(out, "{}", record);
		}
		out
	}
}

/// Hashes every word in `range`. Only reads `words`.
pub fn hash_range(
	worker: usize,
	words: &WordList,
	range: WorkRange,
	algorithm: DigestAlgorithm,
	observer: &dyn TableObserver,
) -> Result<WorkerResult, TableError> {
	if range.end > words.len() || range.start > range.end {
		return Err(TableError::worker(
			worker,
			format!(
				"range {} outside word list of {} lines",
				range,
				words.len()
			),
		));
	}
	observer.worker_started(worker, range);
	let mut hasher = RHash::new(algorithm);
	let records = words
		.slice(range)
		.iter()
		.map(|word| HashRecord {
			word: word.clone(),
			digest: hasher.process_hex(word.as_bytes()),
		})
		.collect::<Vec<_>>();
	observer.worker_finished(worker, records.len());
	Ok(WorkerResult {
		worker,
		range,
		records,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rgt::observe::SilentObserver;

	#[test]
	fn hashes_words_in_index_order() {
		let words = WordList::from_text("abc\nqwerty\nletmein");
		let result = hash_range(
			1,
			&words,
			WorkRange::new(1, 3),
			DigestAlgorithm::Md5,
			&SilentObserver,
		)
		.unwrap();
		assert_eq!(result.worker, 1);
		assert_eq!(result.len(), 2);
		assert_eq!(result.records[0].word, "qwerty");
		assert_eq!(
			result.records[0].digest,
			"d8578edf8458ce06fbc5bb76a58c5ca4"
		);
		assert_eq!(result.records[1].word, "letmein");
	}

	#[test]
	fn empty_range_produces_no_records() {
		let words = WordList::from_text("abc");
		let result = hash_range(
			4,
			&words,
			WorkRange::new(1, 1),
			DigestAlgorithm::Sha256,
			&SilentObserver,
		)
		.unwrap();
		assert!(result.is_empty());
		assert_eq!(result.to_lines(), "");
	}

	#[test]
	fn renders_word_digest_lines() {
		let words = WordList::from_text("abc");
		let result = hash_range(
			0,
			&words,
			WorkRange::new(0, 1),
			DigestAlgorithm::Md5,
			&SilentObserver,
		)
		.unwrap();
		assert_eq!(
			result.to_lines(),
			"abc:900150983cd24fb0d6963f7d28e17f72\n"
		);
		assert_eq!(
			result.records[0].to_string(),
			"abc:900150983cd24fb0d6963f7d28e17f72"
		);
	}

	#[test]
	fn out_of_bounds_range_is_a_worker_failure() {
		let words = WordList::from_text("abc");
		let err = hash_range(
			2,
			&words,
			WorkRange::new(0, 5),
			DigestAlgorithm::Md5,
			&SilentObserver,
		)
		.unwrap_err();
		assert!(matches!(
			err,
			TableError::WorkerFailure { worker: 2, .. }
		));
	}
}

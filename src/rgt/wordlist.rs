// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: wordlist.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::error::TableError;
use crate::rgt::partition::WorkRange;
use std::path::Path;

/// Newline-delimited candidate values, loaded once and never mutated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordList {
	words: Vec<String>,
}

impl WordList {
	/// Reads the whole file; `\n` and `\r\n` terminate a line and a
	/// stray trailing `\r` is dropped.
	pub fn load(path: &Path) -> Result<Self, TableError> {
		let content = std::fs::read_to_string(path)
			.map_err(|e| TableError::input_not_found(path, e))?;
		Ok(Self::from_text(&content))
	}

	pub fn from_text(content: &str) -> Self {
		Self {
			words: content
				.lines()
				.map(|line| line.strip_suffix('\r').unwrap_or(line))
				.map(str::to_owned)
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.words.get(index).map(String::as_str)
	}

	/// Words covered by `range`; ranges past the end are clamped.
	pub fn slice(&self, range: WorkRange) -> &[String] {
		let end = range.end.min(self.words.len());
		let start = range.start.min(end);
		&self.words[start..end]
	}
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: aggregate.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Sole writer of the table file.

use crate::rgt::error::TableError;
use crate::rgt::worker::WorkerResult;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct Aggregator {
	writer: BufWriter<File>,
	records: usize,
	blocks: usize,
}

impl Aggregator {
	/// Creates the table file in append mode. An existing file is
	/// never reused.
	pub fn create(path: &Path) -> Result<Self, TableError> {
		let file = OpenOptions::new()
			.append(true)
			.create_new(true)
			.open(path)
			.map_err(|e| match e.kind() {
				io::ErrorKind::AlreadyExists => {
					TableError::OutputAlreadyExists {
						path: path.to_path_buf(),
					}
				}
				_ => TableError::Io(e),
			})?;
		Ok(Self {
			writer: BufWriter::new(file),
			records: 0,
			blocks: 0,
		})
	}

	/// Appends one worker's block in full and flushes it.
	pub fn append(
		&mut self,
		result: WorkerResult,
	) -> Result<usize, TableError> {
		let written = result.len();
		self.writer.write_all(result.to_lines().as_bytes())?;
		self.writer.flush()?;
		self.records += written;
		self.blocks += 1;
		tracing::trace!(
			worker = result.worker,
			start = result.range.start,
			end = result.range.end,
			records = written,
			block = self.blocks,
			"appended worker block"
		);
		Ok(written)
	}

	pub fn finish(mut self) -> Result<usize, TableError> {
		self.writer.flush()?;
		Ok(self.records)
	}
}

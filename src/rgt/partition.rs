// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: partition.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Splits a word list into one contiguous index range per worker.

use crate::rgt::error::TableError;
use std::fmt;

/// Half-open index range `[start, end)` into a word list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct WorkRange {
	pub start: usize,
	pub end: usize,
}

impl WorkRange {
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Display for WorkRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {})", self.start, self.end)
	}
}

/// Returns exactly `workers` ranges covering `[0, total)`.
///
/// The first `total % workers` ranges carry one extra line, so when
/// `total < workers` the trailing ranges are empty.
pub fn partition(
	total: usize,
	workers: usize,
) -> Result<Vec<WorkRange>, TableError> {
	if workers == 0 {
		return Err(TableError::InvalidWorkerCount);
	}
	let base = total / workers;
	let remainder = total % workers;
	let mut ranges = Vec::with_capacity(workers);
	let mut start = 0;
	for index in 0..workers {
		let size = base + usize::from(index < remainder);
		ranges.push(WorkRange::new(start, start + size));
		start += size;
	}
	debug_assert_eq!(start, total);
	Ok(ranges)
}

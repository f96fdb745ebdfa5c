// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: table.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Parallel `word:digest` table generation.
//!
//! The word list is split into one contiguous range per worker thread.
//! Workers hash their range independently and hand the finished block
//! back through their join handle. The aggregator joins the workers in
//! spawn order and appends each block in full, so the table is grouped
//! by partition no matter which worker finishes first.

use crate::rgt::aggregate::Aggregator;
use crate::rgt::error::TableError;
use crate::rgt::hash::DigestAlgorithm;
use crate::rgt::observe::{TableObserver, TableStage, TracingObserver};
use crate::rgt::partition::{partition, WorkRange};
use crate::rgt::wordlist::WordList;
use crate::rgt::worker::{hash_range, WorkerResult};
use std::any::Any;
use std::path::{Path, PathBuf};
use std::thread;

pub const DEFAULT_OUTPUT: &str = "rainbow_table.txt";
pub const DEFAULT_WORKERS: usize = 5;

#[derive(Clone, Debug)]
pub struct TableConfig {
	pub algorithm: String,
	pub input: PathBuf,
	pub output: PathBuf,
	pub workers: usize,
}

impl TableConfig {
	pub fn new(
		algorithm: impl Into<String>,
		input: impl Into<PathBuf>,
	) -> Self {
		Self {
			algorithm: algorithm.into(),
			input: input.into(),
			output: PathBuf::from(DEFAULT_OUTPUT),
			workers: DEFAULT_WORKERS,
		}
	}

	pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
		self.output = output.into();
		self
	}

	pub fn with_workers(mut self, workers: usize) -> Self {
		self.workers = workers;
		self
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSummary {
	pub output: PathBuf,
	pub records: usize,
	pub workers: usize,
	pub ranges: Vec<WorkRange>,
}

pub struct TableGenerator {
	config: TableConfig,
	observer: Box<dyn TableObserver>,
}

impl TableGenerator {
	pub fn new(config: TableConfig) -> Self {
		Self {
			config,
			observer: Box::new(TracingObserver),
		}
	}

	pub fn with_observer(
		mut self,
		observer: Box<dyn TableObserver>,
	) -> Self {
		self.observer = observer;
		self
	}

	/// Runs the whole pipeline. On a worker failure the blocks already
	/// appended stay in the output file.
	pub fn generate(&self) -> Result<TableSummary, TableError> {
		let outcome = self.run();
		match &outcome {
			Ok(summary) => {
				self.observer.stage_changed(TableStage::Done);
				tracing::info!(
					output = %summary.output.display(),
					records = summary.records,
					workers = summary.workers,
					"table generated"
				);
			}
			Err(err) => {
				self.observer.stage_changed(TableStage::Failed);
				tracing::warn!(error = %err, "table generation failed");
			}
		}
		outcome
	}

	fn run(&self) -> Result<TableSummary, TableError> {
		self.observer.stage_changed(TableStage::Init);
		let algorithm =
			self.config.algorithm.parse::<DigestAlgorithm>()?;
		if self.config.workers == 0 {
			return Err(TableError::InvalidWorkerCount);
		}

		self.observer.stage_changed(TableStage::PreconditionCheck);
		ensure_absent(&self.config.output)?;

		self.observer.stage_changed(TableStage::Partitioning);
		let words = WordList::load(&self.config.input)?;
		let ranges = partition(words.len(), self.config.workers)?;
		tracing::debug!(
			lines = words.len(),
			workers = ranges.len(),
			"word list partitioned"
		);
		let mut aggregator = Aggregator::create(&self.config.output)?;

		let observer = self.observer.as_ref();
		let words = &words;
		thread::scope(|scope| -> Result<(), TableError> {
			self.observer.stage_changed(TableStage::Spawning);
			let mut handles = Vec::with_capacity(ranges.len());
			for (index, &range) in ranges.iter().enumerate() {
				let handle = thread::Builder::new()
					.name(format!("rgt-worker-{}", index))
					.spawn_scoped(scope, move || {
						hash_range(
							index, words, range, algorithm, observer,
						)
					})?;
				handles.push(handle);
			}

			self.observer.stage_changed(TableStage::Collecting);
			let mut failure = None;
			for (index, handle) in handles.into_iter().enumerate() {
				let joined: Result<WorkerResult, TableError> = handle
					.join()
					.map_err(|payload| {
						TableError::worker(index, panic_reason(&*payload))
					})
					.and_then(|result| result);
				if failure.is_some() {
					continue;
				}
				if let Err(err) = joined
					.and_then(|result| aggregator.append(result))
				{
					failure = Some(err);
				}
			}
			match failure {
				Some(err) => Err(err),
				None => Ok(()),
			}
		})?;

		let records = aggregator.finish()?;
		Ok(TableSummary {
			output: self.config.output.clone(),
			records,
			workers: ranges.len(),
			ranges,
		})
	}
}

/// Convenience wrapper around [`TableGenerator`] with tracing output.
pub fn generate_table(
	config: TableConfig,
) -> Result<TableSummary, TableError> {
	TableGenerator::new(config).generate()
}

fn ensure_absent(path: &Path) -> Result<(), TableError> {
	if path.try_exists()? {
		return Err(TableError::OutputAlreadyExists {
			path: path.to_path_buf(),
		});
	}
	Ok(())
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		return message.to_string();
	}
	if let Some(message) = payload.downcast_ref::<String>() {
		return message.clone();
	}
	"worker thread panicked".to_string()
}

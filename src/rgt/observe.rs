// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: observe.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Progress reporting hooks for table generation.
//!
//! Observers are informational only. A run produces the same table with
//! any observer, including none.

use crate::rgt::partition::WorkRange;
use colored::Colorize;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// Lifecycle of a single table generation run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableStage {
	Init,
	PreconditionCheck,
	Partitioning,
	Spawning,
	Collecting,
	Done,
	Failed,
}

impl fmt::Display for TableStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Init => "init",
			Self::PreconditionCheck => "precondition-check",
			Self::Partitioning => "partitioning",
			Self::Spawning => "spawning",
			Self::Collecting => "collecting",
			Self::Done => "done",
			Self::Failed => "failed",
		};
		write!(f, "{}", label)
	}
}

/// Receives run events. Worker callbacks fire on worker threads.
pub trait TableObserver: Send + Sync {
	fn stage_changed(&self, _stage: TableStage) {}

	fn worker_started(&self, _worker: usize, _range: WorkRange) {}

	fn worker_finished(&self, _worker: usize, _records: usize) {}
}

impl<T: TableObserver + ?Sized> TableObserver for Arc<T> {
	fn stage_changed(&self, stage: TableStage) {
		(**self).stage_changed(stage);
	}

	fn worker_started(&self, worker: usize, range: WorkRange) {
		(**self).worker_started(worker, range);
	}

	fn worker_finished(&self, worker: usize, records: usize) {
		(**self).worker_finished(worker, records);
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl TableObserver for SilentObserver {}

/// Forwards every event to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl TableObserver for TracingObserver {
	fn stage_changed(&self, stage: TableStage) {
		tracing::debug!(%stage, "table stage");
	}

	fn worker_started(&self, worker: usize, range: WorkRange) {
		tracing::debug!(
			worker,
			start = range.start,
			end = range.end,
			"worker started"
		);
	}

	fn worker_finished(&self, worker: usize, records: usize) {
		tracing::debug!(worker, records, "worker finished");
	}
}

/// Human readable worker lines on stderr, plus the tracing events.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver;

impl TableObserver for ConsoleObserver {
	fn stage_changed(&self, stage: TableStage) {
		TracingObserver.stage_changed(stage);
	}

	fn worker_started(&self, worker: usize, range: WorkRange) {
		TracingObserver.worker_started(worker, range);
		let _ = writeln!(
			io::stderr(),
			"{}  Worker {} started {}",
			"[+]".green(),
			worker,
			range
		);
	}

	fn worker_finished(&self, worker: usize, records: usize) {
		TracingObserver.worker_finished(worker, records);
		let _ = writeln!(
			io::stderr(),
			"{}  Worker {} finished ({} records)",
			"[+]".green(),
			worker,
			records
		);
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
	Auto,
	Enabled,
	Disabled,
}

impl ProgressMode {
	pub fn should_emit(self, is_tty: bool) -> bool {
		match self {
			ProgressMode::Disabled => false,
			ProgressMode::Enabled => true,
			ProgressMode::Auto => is_tty,
		}
	}

	/// Picks the observer for this mode against the current stderr.
	pub fn observer(self) -> Box<dyn TableObserver> {
		if self.should_emit(io::stderr().is_terminal()) {
			Box::new(ConsoleObserver)
		} else {
			Box::new(TracingObserver)
		}
	}
}

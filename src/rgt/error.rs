// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

//! Error type shared by the digest helpers and the table pipeline.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum TableError {
	UnsupportedAlgorithm {
		algorithm: String,
	},
	InputNotFound {
		path: PathBuf,
		source: io::Error,
	},
	OutputAlreadyExists {
		path: PathBuf,
	},
	InvalidWorkerCount,
	WorkerFailure {
		worker: usize,
		reason: String,
	},
	Io(io::Error),
}

impl TableError {
	pub fn unsupported(algorithm: impl Into<String>) -> Self {
		Self::UnsupportedAlgorithm {
			algorithm: algorithm.into(),
		}
	}

	pub fn input_not_found(
		path: impl Into<PathBuf>,
		source: io::Error,
	) -> Self {
		Self::InputNotFound {
			path: path.into(),
			source,
		}
	}

	pub fn worker(worker: usize, reason: impl fmt::Display) -> Self {
		Self::WorkerFailure {
			worker,
			reason: reason.to_string(),
		}
	}
}

impl fmt::Display for TableError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnsupportedAlgorithm { algorithm } => write!(
				f,
				"wrong or non existing hash type `{}`",
				algorithm
			),
			Self::InputNotFound { path, source } => write!(
				f,
				"not existing or unreadable file {}: {}",
				path.display(),
				source
			),
			Self::OutputAlreadyExists { path } => write!(
				f,
				"output file {} cannot be used because it already exists",
				path.display()
			),
			Self::InvalidWorkerCount => {
				write!(f, "worker count must be at least 1")
			}
			Self::WorkerFailure { worker, reason } => {
				write!(f, "worker {} failed: {}", worker, reason)
			}
			Self::Io(err) => write!(f, "{}", err),
		}
	}
}

impl Error for TableError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::InputNotFound { source, .. } => Some(source),
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<io::Error> for TableError {
	fn from(value: io::Error) -> Self {
		Self::Io(value)
	}
}

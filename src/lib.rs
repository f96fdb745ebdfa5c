// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

pub mod rgt {
	pub mod aggregate;
	pub mod app;
	pub mod digest;
	pub mod error;
	pub mod hash;
	pub mod observe;
	pub mod partition;
	pub mod table;
	pub mod weak;
	pub mod wordlist;
	pub mod worker;
}

pub use rgt::error::TableError;
pub use rgt::hash::{digest_file_hex, digest_hex, DigestAlgorithm};
pub use rgt::table::{
	generate_table, TableConfig, TableGenerator, TableSummary,
};

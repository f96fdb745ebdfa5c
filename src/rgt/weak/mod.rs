// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// Module: weak algorithm warnings helper
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Flags digest algorithms with known collisions so the CLI can print a
//! single warning banner before hashing.

use crate::rgt::hash::DigestAlgorithm;
use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";

/// Registry entry for a weak algorithm.
#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	pub algorithm: DigestAlgorithm,
	/// Human-friendly name shown in the banner headline.
	pub display_name: &'static str,
	pub replacement_hint: &'static str,
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		algorithm: DigestAlgorithm::Md5,
		display_name: "MD5",
		replacement_hint: "Use SHA-256 or BLAKE3 for new digests",
	},
	WeakAlgorithmMetadata {
		algorithm: DigestAlgorithm::Sha1,
		display_name: "SHA-1",
		replacement_hint: "Use SHA-256 or SHA-512",
	},
];

pub fn metadata_for(
	algorithm: DigestAlgorithm,
) -> Option<&'static WeakAlgorithmMetadata> {
	WEAK_ALGORITHMS
		.iter()
		.find(|entry| entry.algorithm == algorithm)
}

/// Banner text for a weak algorithm, `None` for everything else.
pub fn warning_for(algorithm: DigestAlgorithm) -> Option<String> {
	let metadata = metadata_for(algorithm)?;
	Some(format!(
		"WARNING: {} is a weak algorithm (collisions known). {}. See {}",
		metadata.display_name, metadata.replacement_hint, NIST_REFERENCE
	))
}

pub fn emit_warning_banner(algorithm: DigestAlgorithm) {
	if let Some(banner) = warning_for(algorithm) {
		eprintln!("{}", banner.yellow().bold());
	}
}

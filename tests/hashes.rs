// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable

use rustgentable::rgt::hash::{algorithms, DigestAlgorithm, RHash};
use rustgentable::{digest_file_hex, digest_hex, TableError};
use std::io::Write;

const PHRASE: &str = "Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

#[test]
fn lib_sha1_hash() {
	assert_eq!(
		digest_hex("sha1", PHRASE.as_bytes()).unwrap(),
		"1c90817fe5067ab226a331d4e7454858f6dd966a"
	);
}

#[test]
fn lib_blake2b_hash() {
	assert_eq!(
		digest_hex("blake2b", PHRASE.as_bytes()).unwrap(),
		"95b7ecb0d7de59820205a0a94fe3ca5ee36fd296b1a9ecaa4e01634aed9fa9505d70182c12f900b9dd95f1d5c04fe57dbc5b1e48acdf3a8bae2996f5d8f4578a"
	);
}

#[test]
fn lib_blake2s_hash() {
	assert_eq!(
		digest_hex("BLAKE2S", PHRASE.as_bytes()).unwrap(),
		"dbfd3f2c835adcc9fc955d812384bb3bf569de0b9613ffca0e723254c05cf497"
	);
}

#[test]
fn empty_input_digests() {
	assert_eq!(
		digest_hex("md5", b"").unwrap(),
		"d41d8cd98f00b204e9800998ecf8427e"
	);
	assert_eq!(
		digest_hex("sha256", b"").unwrap(),
		"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
	);
}

#[test]
fn every_algorithm_round_trips_its_identifier() {
	for alg in algorithms() {
		let parsed: DigestAlgorithm = alg.identifier().parse().unwrap();
		assert_eq!(parsed, alg);
		let upper: DigestAlgorithm =
			alg.identifier().to_uppercase().parse().unwrap();
		assert_eq!(upper, alg);
	}
}

#[test]
fn hasher_resets_between_inputs() {
	let mut hasher = RHash::new(DigestAlgorithm::Sha512);
	let first = hasher.process_hex(b"abc");
	let _ = hasher.process_hex(b"something else");
	assert_eq!(hasher.process_hex(b"abc"), first);
}

#[test]
fn file_digest_equals_word_digest_of_contents() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(PHRASE.as_bytes()).unwrap();
	assert_eq!(
		digest_file_hex("sha3-256", file.path()).unwrap(),
		digest_hex("sha3-256", PHRASE.as_bytes()).unwrap()
	);
}

#[test]
fn unsupported_names_are_errors() {
	for name in ["foo", "", "sha", "md55"] {
		assert!(matches!(
			digest_hex(name, b"abc"),
			Err(TableError::UnsupportedAlgorithm { .. })
		));
	}
}

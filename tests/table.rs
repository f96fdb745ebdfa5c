// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable

use rustgentable::rgt::table::{generate_table, TableConfig};
use rustgentable::{digest_hex, TableError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn write_words(dir: &Path, words: &[String]) -> std::path::PathBuf {
	let path = dir.join("words.txt");
	let mut content = words.join("\n");
	content.push('\n');
	fs::write(&path, content).expect("write word list");
	path
}

fn numbered_words(count: usize) -> Vec<String> {
	(0..count).map(|i| format!("password{}", i)).collect()
}

#[test]
fn md5_two_workers_matches_reference_table() {
	let dir = tempfile::tempdir().unwrap();
	let input =
		write_words(dir.path(), &["abc".into(), "qwerty".into()]);
	let output = dir.path().join("rainbow.txt");

	let summary = generate_table(
		TableConfig::new("md5", &input)
			.with_output(&output)
			.with_workers(2),
	)
	.expect("table");

	assert_eq!(summary.records, 2);
	assert_eq!(
		fs::read_to_string(&output).unwrap(),
		"abc:900150983cd24fb0d6963f7d28e17f72\n\
		 qwerty:d8578edf8458ce06fbc5bb76a58c5ca4\n"
	);
}

#[test]
fn every_line_is_hashed_exactly_once() {
	let dir = tempfile::tempdir().unwrap();
	let words = numbered_words(1_003);
	let input = write_words(dir.path(), &words);

	for workers in [1usize, 2, 5, 7, 64] {
		let output = dir.path().join(format!("table-{}.txt", workers));
		let summary = generate_table(
			TableConfig::new("sha256", &input)
				.with_output(&output)
				.with_workers(workers),
		)
		.expect("table");
		assert_eq!(summary.records, words.len());
		assert_eq!(summary.workers, workers);

		let content = fs::read_to_string(&output).unwrap();
		let lines: Vec<&str> = content.lines().collect();
		assert_eq!(lines.len(), words.len());

		let mut seen = HashSet::new();
		for (line, word) in lines.iter().zip(&words) {
			let (value, digest) = line.split_once(':').unwrap();
			assert_eq!(value, word);
			assert_eq!(
				digest,
				digest_hex("sha256", value.as_bytes()).unwrap()
			);
			assert!(seen.insert(value.to_string()));
		}
	}
}

#[test]
fn more_workers_than_lines_still_writes_every_line() {
	let dir = tempfile::tempdir().unwrap();
	let words = numbered_words(3);
	let input = write_words(dir.path(), &words);
	let output = dir.path().join("table.txt");

	let summary = generate_table(
		TableConfig::new("SHA512", &input)
			.with_output(&output)
			.with_workers(8),
	)
	.expect("table");

	assert_eq!(summary.records, 3);
	assert_eq!(summary.ranges.len(), 8);
	assert!(summary.ranges[3..].iter().all(|r| r.is_empty()));
	let content = fs::read_to_string(&output).unwrap();
	assert_eq!(content.lines().count(), 3);
	assert!(content.starts_with("password0:"));
}

#[test]
fn empty_word_list_creates_empty_table() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("words.txt");
	fs::write(&input, "").unwrap();
	let output = dir.path().join("table.txt");

	let summary = generate_table(
		TableConfig::new("md5", &input).with_output(&output),
	)
	.expect("table");

	assert_eq!(summary.records, 0);
	assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn existing_output_is_left_untouched() {
	let dir = tempfile::tempdir().unwrap();
	let input = write_words(dir.path(), &numbered_words(10));
	let output = dir.path().join("table.txt");
	let original = b"existing:table\n\xff\x00binary".to_vec();
	fs::write(&output, &original).unwrap();

	let err = generate_table(
		TableConfig::new("md5", &input).with_output(&output),
	)
	.unwrap_err();

	assert!(matches!(err, TableError::OutputAlreadyExists { .. }));
	assert_eq!(fs::read(&output).unwrap(), original);
}

#[test]
fn unknown_algorithm_fails_before_touching_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = write_words(dir.path(), &numbered_words(4));
	let fresh = dir.path().join("fresh.txt");
	let existing = dir.path().join("existing.txt");
	fs::write(&existing, "keep").unwrap();

	let err = generate_table(
		TableConfig::new("foo", &input).with_output(&fresh),
	)
	.unwrap_err();
	assert!(matches!(err, TableError::UnsupportedAlgorithm { .. }));
	assert!(!fresh.exists());

	let err = generate_table(
		TableConfig::new("foo", &input).with_output(&existing),
	)
	.unwrap_err();
	assert!(matches!(err, TableError::UnsupportedAlgorithm { .. }));
	assert_eq!(fs::read_to_string(&existing).unwrap(), "keep");
}

#[test]
fn missing_word_list_is_input_not_found() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("table.txt");

	let err = generate_table(
		TableConfig::new("md5", dir.path().join("nope.txt"))
			.with_output(&output),
	)
	.unwrap_err();

	assert!(matches!(err, TableError::InputNotFound { .. }));
	assert!(!output.exists());
}

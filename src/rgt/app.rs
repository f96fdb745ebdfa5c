// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::digest::commands as digest_commands;
use crate::rgt::hash::{algorithms, DigestAlgorithm};
use crate::rgt::observe::ProgressMode;
use crate::rgt::table::{
	TableConfig, TableGenerator, DEFAULT_OUTPUT, DEFAULT_WORKERS,
};
use crate::rgt::weak;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use colored::*;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RGT_LOG";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Modes (first match wins):
  rgt -s <alg> -w <word>                 Hash a literal word
  rgt -s <alg> -f <file>                 Hash the contents of a file
  rgt -s <alg> -i <words> [-o <table>]   Generate a word:digest table
{usage-heading} {usage}

{all-args}{after-help}
";

/// What a single invocation does, picked by flag precedence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
	List,
	Word(String),
	File(PathBuf),
	Table {
		input: PathBuf,
		output: PathBuf,
		workers: usize,
	},
	Usage,
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rgt")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Digest words, files and whole word lists")
		.arg(
			Arg::new("hash")
				.short('s')
				.long("hash")
				.help("Digest algorithm identifier (e.g., sha256, md5, sha512)")
				.required_unless_present("list"),
		)
		.arg(
			Arg::new("word")
				.short('w')
				.long("word")
				.help("Literal string to hash"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_parser(clap::value_parser!(PathBuf))
				.help("File whose contents are hashed"),
		)
		.arg(
			Arg::new("input")
				.short('i')
				.long("input")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Word list used to generate the table, one value per line"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Table file to create; must not exist yet")
				.default_value(DEFAULT_OUTPUT),
		)
		.arg(
			Arg::new("procs")
				.short('p')
				.long("procs")
				.value_parser(
					clap::builder::RangedU64ValueParser::<usize>::new()
						.range(1..),
				)
				.help("Number of worker threads used for the table")
				.default_value("5"),
		)
		.arg(
			Arg::new("progress")
				.long("progress")
				.value_parser(clap::value_parser!(ProgressMode))
				.help("Print worker progress on stderr")
				.default_value("auto"),
		)
		.arg(
			Arg::new("list")
				.long("list")
				.help("List supported digest algorithms and exit")
				.action(ArgAction::SetTrue),
		)
}

/// Word beats file beats table generation; nothing given is a usage error.
pub fn select_mode(matches: &ArgMatches) -> Mode {
	if matches.get_flag("list") {
		return Mode::List;
	}
	if let Some(word) = matches.get_one::<String>("word") {
		return Mode::Word(word.clone());
	}
	if let Some(file) = matches.get_one::<PathBuf>("file") {
		return Mode::File(file.clone());
	}
	if let (Some(input), Some(output)) = (
		matches.get_one::<PathBuf>("input"),
		matches.get_one::<PathBuf>("output"),
	) {
		let workers = matches
			.get_one::<usize>("procs")
			.copied()
			.unwrap_or(DEFAULT_WORKERS);
		return Mode::Table {
			input: input.clone(),
			output: output.clone(),
			workers,
		};
	}
	Mode::Usage
}

/// Installs the stderr log subscriber. `RGT_LOG` overrides the filter.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn print_algorithms() {
	println!("{}", "Supported algorithms:".green());
	for alg in algorithms() {
		let marker = if weak::metadata_for(alg).is_some() {
			" (weak)".yellow().to_string()
		} else {
			String::new()
		};
		println!("  {}{}", alg, marker);
	}
}

pub fn run() -> Result<(), Box<dyn Error>> {
	init_tracing();
	let matches = build_cli().get_matches();
	let mode = select_mode(&matches);

	if mode == Mode::List {
		print_algorithms();
		return Ok(());
	}
	if mode == Mode::Usage {
		return Err("no word, file or input file were given".into());
	}

	let name = matches
		.get_one::<String>("hash")
		.ok_or("no hash algorithm given")?;
	let algorithm = name.parse::<DigestAlgorithm>()?;
	weak::emit_warning_banner(algorithm);
	let name = algorithm.identifier();

	match mode {
		Mode::Word(word) => {
			digest_commands::digest_word(name, &word)?;
		}
		Mode::File(path) => {
			digest_commands::digest_file(name, &path)?;
		}
		Mode::Table {
			input,
			output,
			workers,
		} => {
			let progress = matches
				.get_one::<ProgressMode>("progress")
				.copied()
				.unwrap_or(ProgressMode::Auto);
			let config = TableConfig::new(name, input)
				.with_output(output)
				.with_workers(workers);
			let summary = TableGenerator::new(config)
				.with_observer(progress.observer())
				.generate()?;
			println!(
				"{}  Rainbow table generated successfully ({} records, {} workers)",
				"[+]".green(),
				summary.records,
				summary.workers
			);
		}
		Mode::List | Mode::Usage => {}
	}
	Ok(())
}

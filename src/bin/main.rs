// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use colored::Colorize;
use rustgentable::rgt::app;

fn main() {
	if let Err(err) = app::run() {
		eprintln!("{}  {}", "[!]".red(), err);
		std::process::exit(1);
	}
}

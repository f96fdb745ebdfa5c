// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: src/rgt/digest/mod.rs
// Author: rustgentable maintainers
//
// Digest command group: single word and single file hashing.

pub mod commands;

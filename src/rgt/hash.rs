// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgentable
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2022 Volker Schwaberow

use crate::rgt::error::TableError;
use blake2::Digest;
use digest::DynDigest;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// Digest algorithms accepted by every mode of the tool.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum DigestAlgorithm {
	Blake2b,
	Blake2s,
	Blake3,
	Md5,
	Ripemd160,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Whirlpool,
}

impl DigestAlgorithm {
	/// Canonical lowercase identifier used on the command line.
	pub fn identifier(self) -> &'static str {
		match self {
			Self::Blake2b => "blake2b",
			Self::Blake2s => "blake2s",
			Self::Blake3 => "blake3",
			Self::Md5 => "md5",
			Self::Ripemd160 => "ripemd160",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
			Self::Sha3_224 => "sha3-224",
			Self::Sha3_256 => "sha3-256",
			Self::Sha3_384 => "sha3-384",
			Self::Sha3_512 => "sha3-512",
			Self::Whirlpool => "whirlpool",
		}
	}

	/// Length of the raw digest in bytes.
	pub fn output_len(self) -> usize {
		RHash::new(self).output_size()
	}
}

impl fmt::Display for DigestAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.identifier())
	}
}

impl FromStr for DigestAlgorithm {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = s.trim().replace('_', "-");
		DigestAlgorithm::iter()
			.find(|alg| alg.identifier().eq_ignore_ascii_case(&needle))
			.ok_or_else(|| TableError::unsupported(s))
	}
}

/// Every supported algorithm in declaration order.
pub fn algorithms() -> Vec<DigestAlgorithm> {
	DigestAlgorithm::iter().collect()
}

macro_rules! create_hasher {
	($alg:expr, $($pattern:path => $hasher:expr),+ $(,)?) => {
		match $alg {
			$(
				$pattern => Box::new($hasher),
			)+
		}
	};
}

#[derive(Clone)]
pub struct RHash {
	digest: Box<dyn DynDigest>,
}

impl RHash {
	pub fn new(alg: DigestAlgorithm) -> Self {
		use DigestAlgorithm as da;
		Self {
			digest: create_hasher!(alg,
				da::Blake2b => blake2::Blake2b512::new(),
				da::Blake2s => blake2::Blake2s256::new(),
				da::Blake3 => blake3::Hasher::new(),
				da::Md5 => md5::Md5::new(),
				da::Ripemd160 => ripemd::Ripemd160::new(),
				da::Sha1 => sha1::Sha1::new(),
				da::Sha224 => sha2::Sha224::new(),
				da::Sha256 => sha2::Sha256::new(),
				da::Sha384 => sha2::Sha384::new(),
				da::Sha512 => sha2::Sha512::new(),
				da::Sha3_224 => sha3::Sha3_224::new(),
				da::Sha3_256 => sha3::Sha3_256::new(),
				da::Sha3_384 => sha3::Sha3_384::new(),
				da::Sha3_512 => sha3::Sha3_512::new(),
				da::Whirlpool => whirlpool::Whirlpool::new(),
			),
		}
	}

	pub fn output_size(&self) -> usize {
		self.digest.output_size()
	}

	pub fn process_string(&mut self, data: &[u8]) -> Vec<u8> {
		self.digest.update(data);
		self.digest.finalize_reset().to_vec()
	}

	pub fn process_hex(&mut self, data: &[u8]) -> String {
		hex::encode(self.process_string(data))
	}

	pub fn read_buffered(
		&mut self,
		file: &Path,
	) -> Result<Vec<u8>, TableError> {
		let handle = std::fs::File::open(file)
			.map_err(|e| TableError::input_not_found(file, e))?;
		let mut f = std::io::BufReader::new(handle);
		let mut buffer = vec![0; f.capacity()];
		loop {
			let count = f
				.read(&mut buffer)
				.map_err(|e| TableError::input_not_found(file, e))?;
			if count == 0 {
				break;
			}
			self.digest.update(&buffer[..count]);
		}
		Ok(self.digest.finalize_reset().to_vec())
	}
}

/// Hex digest of `data` under the named algorithm.
///
/// The name is matched case-insensitively; unknown names are rejected
/// rather than falling back to a default algorithm.
pub fn digest_hex(
	algorithm: &str,
	data: &[u8],
) -> Result<String, TableError> {
	let alg = algorithm.parse::<DigestAlgorithm>()?;
	Ok(RHash::new(alg).process_hex(data))
}

/// Hex digest of the whole contents of the file at `path`.
pub fn digest_file_hex(
	algorithm: &str,
	path: &Path,
) -> Result<String, TableError> {
	let alg = algorithm.parse::<DigestAlgorithm>()?;
	let digest = RHash::new(alg).read_buffered(path)?;
	Ok(hex::encode(digest))
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: runner.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! The default run: four SHA-3 family digests of the fixed 0xFF buffer.

use super::digest::{compute, DigestJob};
use super::error::KdgError;
use super::input::InputBuffer;
use super::output::write_records;
use super::registry::DigestAlgorithm;
use log::debug;
use std::io::Write;

pub const SHAKE128_OUTPUT_LEN: usize = 32;
pub const SHAKE256_OUTPUT_LEN: usize = 1024;

/// The four jobs of the default run, in print order.
///
/// The SHAKE256 label reads "64 bytes" while 1024 bytes are requested.
/// Both are kept as published; see DESIGN.md.
pub fn standard_jobs() -> Vec<DigestJob> {
	vec![
		DigestJob::new(DigestAlgorithm::Sha3_256, 32, "SHA3-256"),
		DigestJob::new(DigestAlgorithm::Sha3_512, 64, "SHA3-512"),
		DigestJob::new(
			DigestAlgorithm::Shake128,
			SHAKE128_OUTPUT_LEN,
			"SHAKE128 (32 bytes)",
		),
		DigestJob::new(
			DigestAlgorithm::Shake256,
			SHAKE256_OUTPUT_LEN,
			"SHAKE256 (64 bytes)",
		),
	]
}

/// Compute and print each job in turn. A write failure stops the run;
/// lines already written stay written.
pub fn run<W: Write>(writer: &mut W) -> Result<(), KdgError> {
	let buffer = InputBuffer::new();
	debug!("input buffer: {} bytes of 0xff", buffer.len());
	for job in standard_jobs() {
		let record = compute(&job, &buffer)?;
		write_records(writer, std::slice::from_ref(&record))?;
	}
	Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: digest.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use super::error::KdgError;
use super::registry::DigestAlgorithm;
use log::debug;
use serde::Serialize;

/// One digest request: which function, how many bytes, and the label
/// printed in front of the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestJob {
	pub algorithm: DigestAlgorithm,
	pub output_len: usize,
	pub label: String,
}

impl DigestJob {
	pub fn new(
		algorithm: DigestAlgorithm,
		output_len: usize,
		label: impl Into<String>,
	) -> Self {
		Self {
			algorithm,
			output_len,
			label: label.into(),
		}
	}

	pub fn validate(&self) -> Result<(), KdgError> {
		self.algorithm.metadata().validate_output_len(self.output_len)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DigestRecord {
	pub algorithm: DigestAlgorithm,
	pub label: String,
	pub output_len: usize,
	#[serde(serialize_with = "hex::serde::serialize")]
	pub digest: Vec<u8>,
}

impl DigestRecord {
	pub fn to_hex(&self) -> String {
		hex::encode(&self.digest)
	}
}

/// Apply `job` to `input` in a single update.
pub fn compute(
	job: &DigestJob,
	input: &[u8],
) -> Result<DigestRecord, KdgError> {
	debug!(
		"computing {} over {} bytes, {} output bytes",
		job.algorithm,
		input.len(),
		job.output_len
	);
	let mut executor = job.algorithm.create_executor();
	executor.update(input);
	let digest = executor.finalize(job.output_len)?;
	Ok(DigestRecord {
		algorithm: job.algorithm,
		label: job.label.clone(),
		output_len: job.output_len,
		digest,
	})
}

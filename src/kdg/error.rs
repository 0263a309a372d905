// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KdgError {
	#[error("{0}")]
	Io(#[from] std::io::Error),
	#[error("failed to encode benchmark summary: {0}")]
	Encoding(#[from] serde_json::Error),
	#[error(
		"{algorithm} produces {expected} bytes, {requested} requested"
	)]
	LengthMismatch {
		algorithm: &'static str,
		expected: usize,
		requested: usize,
	},
	#[error("{algorithm} needs an output length of at least one byte")]
	EmptyOutput { algorithm: &'static str },
	#[error("malformed digest line: {0}")]
	MalformedLine(String),
	#[error("invalid hex digest: {0}")]
	Hex(#[from] hex::FromHexError),
	#[error("{0}")]
	Benchmark(String),
}

impl KdgError {
	pub fn benchmark(message: impl Into<String>) -> Self {
		Self::Benchmark(message.into())
	}
}

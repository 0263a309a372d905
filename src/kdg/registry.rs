// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: registry.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Catalog of the SHA-3 family functions, their metadata and the boxed
//! executors that drive the `sha3` crate.

use super::error::KdgError;
use digest::{Digest, ExtendableOutput, Update, XofReader};
use serde::Serialize;
use sha3::{Sha3_256, Sha3_512, Shake128, Shake256};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

pub trait DigestExecutor: Send + 'static {
	fn update(&mut self, data: &[u8]);
	/// Fails when `output_len` is not a length the algorithm can emit.
	fn finalize(
		self: Box<Self>,
		output_len: usize,
	) -> Result<Vec<u8>, KdgError>;
}

#[derive(
	clap::ValueEnum,
	Clone,
	Copy,
	Debug,
	PartialEq,
	Eq,
	Hash,
	EnumIter,
	Serialize,
)]
pub enum DigestAlgorithm {
	#[value(name = "sha3-256")]
	#[serde(rename = "sha3-256")]
	Sha3_256,
	#[value(name = "sha3-512")]
	#[serde(rename = "sha3-512")]
	Sha3_512,
	#[value(name = "shake128")]
	#[serde(rename = "shake128")]
	Shake128,
	#[value(name = "shake256")]
	#[serde(rename = "shake256")]
	Shake256,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestAlgorithmMetadata {
	pub display_name: &'static str,
	/// `None` for extendable-output functions.
	pub fixed_len: Option<usize>,
}

impl DigestAlgorithmMetadata {
	const fn fixed(display_name: &'static str, len: usize) -> Self {
		Self {
			display_name,
			fixed_len: Some(len),
		}
	}

	const fn xof(display_name: &'static str) -> Self {
		Self {
			display_name,
			fixed_len: None,
		}
	}

	pub fn validate_output_len(
		&self,
		requested: usize,
	) -> Result<(), KdgError> {
		match self.fixed_len {
			Some(expected) if expected != requested => {
				Err(KdgError::LengthMismatch {
					algorithm: self.display_name,
					expected,
					requested,
				})
			}
			None if requested == 0 => Err(KdgError::EmptyOutput {
				algorithm: self.display_name,
			}),
			_ => Ok(()),
		}
	}
}

const SHA3_256_METADATA: DigestAlgorithmMetadata =
	DigestAlgorithmMetadata::fixed("SHA3-256", 32);
const SHA3_512_METADATA: DigestAlgorithmMetadata =
	DigestAlgorithmMetadata::fixed("SHA3-512", 64);
const SHAKE128_METADATA: DigestAlgorithmMetadata =
	DigestAlgorithmMetadata::xof("SHAKE128");
const SHAKE256_METADATA: DigestAlgorithmMetadata =
	DigestAlgorithmMetadata::xof("SHAKE256");

impl DigestAlgorithm {
	pub fn metadata(self) -> DigestAlgorithmMetadata {
		match self {
			Self::Sha3_256 => SHA3_256_METADATA,
			Self::Sha3_512 => SHA3_512_METADATA,
			Self::Shake128 => SHAKE128_METADATA,
			Self::Shake256 => SHAKE256_METADATA,
		}
	}

	pub fn display_name(self) -> &'static str {
		self.metadata().display_name
	}

	pub fn create_executor(self) -> Box<dyn DigestExecutor> {
		let meta = self.metadata();
		match self {
			Self::Sha3_256 => {
				Box::new(FixedExecutor::<Sha3_256>::new(meta))
			}
			Self::Sha3_512 => {
				Box::new(FixedExecutor::<Sha3_512>::new(meta))
			}
			Self::Shake128 => Box::new(XofExecutor::<Shake128>::new(meta)),
			Self::Shake256 => Box::new(XofExecutor::<Shake256>::new(meta)),
		}
	}
}

impl fmt::Display for DigestAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.display_name())
	}
}

pub fn algorithms() -> impl Iterator<Item = DigestAlgorithm> {
	DigestAlgorithm::iter()
}

struct FixedExecutor<D> {
	hasher: D,
	meta: DigestAlgorithmMetadata,
}

impl<D: Digest> FixedExecutor<D> {
	fn new(meta: DigestAlgorithmMetadata) -> Self {
		Self {
			hasher: D::new(),
			meta,
		}
	}
}

impl<D> DigestExecutor for FixedExecutor<D>
where
	D: Digest + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		Digest::update(&mut self.hasher, data);
	}

	fn finalize(
		self: Box<Self>,
		output_len: usize,
	) -> Result<Vec<u8>, KdgError> {
		self.meta.validate_output_len(output_len)?;
		Ok(self.hasher.finalize().to_vec())
	}
}

struct XofExecutor<X> {
	hasher: X,
	meta: DigestAlgorithmMetadata,
}

impl<X: Default> XofExecutor<X> {
	fn new(meta: DigestAlgorithmMetadata) -> Self {
		Self {
			hasher: X::default(),
			meta,
		}
	}
}

impl<X> DigestExecutor for XofExecutor<X>
where
	X: Update + ExtendableOutput + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		Update::update(&mut self.hasher, data);
	}

	fn finalize(
		self: Box<Self>,
		output_len: usize,
	) -> Result<Vec<u8>, KdgError> {
		self.meta.validate_output_len(output_len)?;
		let mut reader = self.hasher.finalize_xof();
		let mut out = vec![0u8; output_len];
		reader.read(&mut out);
		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_lists_four_functions_in_order() {
		let names: Vec<_> = algorithms().map(|a| a.display_name()).collect();
		assert_eq!(names, ["SHA3-256", "SHA3-512", "SHAKE128", "SHAKE256"]);
	}

	#[test]
	fn fixed_functions_reject_other_lengths() {
		let meta = DigestAlgorithm::Sha3_256.metadata();
		assert!(meta.validate_output_len(32).is_ok());
		assert!(matches!(
			meta.validate_output_len(64),
			Err(KdgError::LengthMismatch {
				expected: 32,
				requested: 64,
				..
			})
		));
	}

	#[test]
	fn fixed_executor_refuses_a_shorter_output() {
		let exec = DigestAlgorithm::Sha3_256.create_executor();
		assert!(matches!(
			exec.finalize(16),
			Err(KdgError::LengthMismatch {
				expected: 32,
				requested: 16,
				..
			})
		));
		let exec = DigestAlgorithm::Sha3_512.create_executor();
		assert!(exec.finalize(32).is_err());
	}

	#[test]
	fn xof_rejects_zero_length() {
		let meta = DigestAlgorithm::Shake128.metadata();
		assert_eq!(meta.fixed_len, None);
		assert!(meta.validate_output_len(4096).is_ok());
		let exec = DigestAlgorithm::Shake128.create_executor();
		assert!(matches!(
			exec.finalize(0),
			Err(KdgError::EmptyOutput { .. })
		));
	}

	#[test]
	fn split_updates_match_single_update() {
		let mut split = DigestAlgorithm::Shake256.create_executor();
		split.update(b"hello ");
		split.update(b"world");
		let mut whole = DigestAlgorithm::Shake256.create_executor();
		whole.update(b"hello world");
		assert_eq!(split.finalize(48).unwrap(), whole.finalize(48).unwrap());
	}

	#[test]
	fn empty_message_vectors() {
		use hex_literal::hex;
		let exec = DigestAlgorithm::Sha3_256.create_executor();
		assert_eq!(
			exec.finalize(32).unwrap(),
			hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
		);
		let exec = DigestAlgorithm::Shake128.create_executor();
		assert_eq!(
			exec.finalize(32).unwrap(),
			hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
		);
	}
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: input.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Message constructors: the fixed 0xFF buffer hashed by the default run
//! and the counter-pattern messages used by the benchmark.

use std::ops::Deref;

pub const INPUT_LEN: usize = 1024;
pub const FILL_BYTE: u8 = 0xFF;

/// Immutable 1024-byte buffer of `0xFF`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBuffer {
	bytes: Box<[u8]>,
}

impl InputBuffer {
	pub fn new() -> Self {
		Self {
			bytes: vec![FILL_BYTE; INPUT_LEN].into_boxed_slice(),
		}
	}
}

impl Default for InputBuffer {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for InputBuffer {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		&self.bytes
	}
}

/// Byte `i` of the message is `i & 0xFF`.
pub fn counter_message(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i & 0xFF) as u8).collect()
}

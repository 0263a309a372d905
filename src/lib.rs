// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod kdg {
	pub mod app;
	pub mod benchmark;
	pub mod digest;
	pub mod error;
	pub mod input;
	pub mod output;
	pub mod registry;
	pub mod runner;
}

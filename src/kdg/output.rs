// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// Module: output
// Purpose: Labelled hex lines for digest records.

use super::digest::DigestRecord;
use super::error::KdgError;
use std::io::Write;

const SEPARATOR: &str = ": ";

pub fn render_line(record: &DigestRecord) -> String {
	format!("{}{}{}", record.label, SEPARATOR, record.to_hex())
}

/// Write one line per record, in order, then flush.
pub fn write_records<W: Write>(
	writer: &mut W,
	records: &[DigestRecord],
) -> Result<(), KdgError> {
	for record in records {
		writeln!(writer, "{}", render_line(record))?;
	}
	writer.flush()?;
	Ok(())
}

/// Split a printed line into its label and decoded digest bytes.
pub fn decode_line(line: &str) -> Result<(String, Vec<u8>), KdgError> {
	let (label, digest_hex) = line
		.trim_end_matches(['\r', '\n'])
		.split_once(SEPARATOR)
		.ok_or_else(|| KdgError::MalformedLine(line.to_string()))?;
	let bytes = hex::decode(digest_hex)?;
	Ok((label.to_string(), bytes))
}

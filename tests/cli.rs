// SPDX-License-Identifier: MIT OR Apache-2.0
use assert_cmd::cargo::cargo_bin_cmd;
use keccak_digest::kdg::output::decode_line;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn default_run_prints_four_lines() {
	let mut cmd = cargo_bin_cmd!("kdg");
	let assert = cmd.assert().success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone())
		.expect("stdout should be UTF-8");
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 4);
	let expected = [
		("SHA3-256", 32),
		("SHA3-512", 64),
		("SHAKE128 (32 bytes)", 32),
		("SHAKE256 (64 bytes)", 1024),
	];
	for (line, (label, len)) in lines.iter().zip(expected) {
		let (got_label, bytes) = decode_line(line).expect("hex line");
		assert_eq!(got_label, label);
		assert_eq!(bytes.len(), len);
	}
	assert_eq!(
		lines[0],
		"SHA3-256: 92b2e377b18ea3433dcaf92b9d3e656c6e5bf5468967d446ac8f2e7467b00b58"
	);
}

#[test]
fn default_run_is_repeatable_and_quiet_on_stderr() {
	let first = cargo_bin_cmd!("kdg").assert().success();
	let second = cargo_bin_cmd!("kdg").assert().success();
	assert_eq!(first.get_output().stdout, second.get_output().stdout);
	assert!(first.get_output().stderr.is_empty());
}

#[test]
fn bench_json_reports_each_length() {
	let assert = cargo_bin_cmd!("kdg")
		.args(["bench", "--alg", "shake128", "--iterations", "2", "--json"])
		.assert()
		.success();
	let payload: Value =
		serde_json::from_slice(&assert.get_output().stdout)
			.expect("json payload");
	let cases = payload["cases"].as_array().expect("cases array");
	assert_eq!(cases.len(), 4);
	let lengths: Vec<u64> = cases
		.iter()
		.map(|c| c["message_bytes"].as_u64().unwrap())
		.collect();
	assert_eq!(lengths, vec![32, 64, 256, 1024]);
	assert_eq!(payload["scenario"]["iterations"], 2);
}

#[test]
fn bench_rejects_zero_iterations() {
	cargo_bin_cmd!("kdg")
		.args(["bench", "-i", "0"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("iterations"));
}

#[test]
fn unknown_subcommand_fails() {
	cargo_bin_cmd!("kdg").arg("frobnicate").assert().failure();
}

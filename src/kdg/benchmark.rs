// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: benchmark.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Timing harness: every selected SHA-3 function over counter-pattern
//! messages of 32, 64, 256 and 1024 bytes.

use super::digest::DigestJob;
use super::error::KdgError;
use super::input::counter_message;
use super::registry::DigestAlgorithm;
use chrono::{DateTime, Utc};
use colored::Colorize;
use log::debug;
use serde::Serialize;
use std::fmt::Write as _;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

pub const MESSAGE_LENGTHS: [usize; 4] = [32, 64, 256, 1024];
pub const DEFAULT_ITERATIONS: u64 = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkScenario {
	pub algorithms: Vec<DigestAlgorithm>,
	pub message_lengths: Vec<usize>,
	pub iterations: u64,
	pub created_at: DateTime<Utc>,
}

impl BenchmarkScenario {
	pub fn new(
		algorithms: Vec<DigestAlgorithm>,
		iterations: u64,
	) -> Result<Self, KdgError> {
		if algorithms.is_empty() {
			return Err(KdgError::benchmark(
				"at least one algorithm must be specified",
			));
		}
		if iterations == 0 {
			return Err(KdgError::benchmark(
				"iterations must be at least one",
			));
		}
		Ok(Self {
			algorithms,
			message_lengths: MESSAGE_LENGTHS.to_vec(),
			iterations,
			created_at: Utc::now(),
		})
	}

	/// SHA3 functions emit their fixed length; SHAKE squeezes as many bytes
	/// as the message is long.
	pub fn job_for(
		algorithm: DigestAlgorithm,
		message_bytes: usize,
	) -> DigestJob {
		let meta = algorithm.metadata();
		let output_len = meta.fixed_len.unwrap_or(message_bytes);
		DigestJob::new(algorithm, output_len, meta.display_name)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
	pub algorithm: DigestAlgorithm,
	pub message_bytes: usize,
	pub output_bytes: usize,
	pub samples_collected: u64,
	pub total_ms: f64,
	pub mean_latency_us: f64,
	pub throughput_mib_s: f64,
}

impl BenchmarkResult {
	fn from_timing(
		job: &DigestJob,
		message_bytes: usize,
		iterations: u64,
		elapsed: Duration,
	) -> Self {
		let seconds = elapsed.as_secs_f64().max(f64::EPSILON);
		let processed = (message_bytes as f64) * iterations as f64;
		Self {
			algorithm: job.algorithm,
			message_bytes,
			output_bytes: job.output_len,
			samples_collected: iterations,
			total_ms: seconds * 1000.0,
			mean_latency_us: (seconds * 1_000_000.0) / iterations as f64,
			throughput_mib_s: processed / (1024.0 * 1024.0) / seconds,
		}
	}
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct BenchmarkEnvironment {
	pub hostname: Option<String>,
	pub os: Option<String>,
	pub cpu: Option<String>,
	pub tool_version: Option<String>,
}

impl BenchmarkEnvironment {
	pub fn detect() -> Self {
		let hostname = std::env::var("HOSTNAME")
			.or_else(|_| std::env::var("COMPUTERNAME"))
			.ok();
		Self {
			hostname,
			os: Some(std::env::consts::OS.to_string()),
			cpu: Some(std::env::consts::ARCH.to_string()),
			tool_version: Some(env!("CARGO_PKG_VERSION").to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
	pub scenario: BenchmarkScenario,
	pub cases: Vec<BenchmarkResult>,
	pub environment: BenchmarkEnvironment,
}

pub fn run_benchmarks(
	algorithms: Vec<DigestAlgorithm>,
	iterations: u64,
) -> Result<BenchmarkSummary, KdgError> {
	let scenario = BenchmarkScenario::new(algorithms, iterations)?;
	let mut cases = Vec::with_capacity(
		scenario.algorithms.len() * scenario.message_lengths.len(),
	);
	for &algorithm in &scenario.algorithms {
		for &message_bytes in &scenario.message_lengths {
			let message = counter_message(message_bytes);
			let job = BenchmarkScenario::job_for(algorithm, message_bytes);
			job.validate()?;
			let elapsed = time_job(&job, &message, iterations)?;
			debug!(
				"{} over {} bytes: {} iterations in {:?}",
				algorithm, message_bytes, iterations, elapsed
			);
			cases.push(BenchmarkResult::from_timing(
				&job,
				message_bytes,
				iterations,
				elapsed,
			));
		}
	}
	Ok(BenchmarkSummary {
		scenario,
		cases,
		environment: BenchmarkEnvironment::detect(),
	})
}

fn time_job(
	job: &DigestJob,
	message: &[u8],
	iterations: u64,
) -> Result<Duration, KdgError> {
	let start = Instant::now();
	for _ in 0..iterations {
		let mut executor = job.algorithm.create_executor();
		executor.update(black_box(message));
		black_box(executor.finalize(job.output_len)?);
	}
	Ok(start.elapsed())
}

pub fn render_console_summary(summary: &BenchmarkSummary) -> String {
	let mut out = String::new();
	let _ = writeln!(
		out,
		"Iterations per case: {} · Created at {}",
		summary.scenario.iterations,
		summary.scenario.created_at.to_rfc3339()
	);
	let env = &summary.environment;
	let _ = writeln!(
		out,
		"Environment: {} / {} · kdg {}",
		env.os.as_deref().unwrap_or("unknown"),
		env.cpu.as_deref().unwrap_or("unknown"),
		env.tool_version.as_deref().unwrap_or("unknown"),
	);
	let _ = writeln!(out);
	let header = format!(
		"{:<10} {:>9} {:>9} {:>12} {:>12}",
		"Algorithm", "Msg bytes", "Out bytes", "Mean µs", "MiB/s"
	);
	let _ = writeln!(out, "{}", header.as_str().bold());
	let _ = writeln!(out, "{}", "-".repeat(56));
	for case in &summary.cases {
		let _ = writeln!(
			out,
			"{:<10} {:>9} {:>9} {:>12.3} {:>12.2}",
			case.algorithm.display_name(),
			case.message_bytes,
			case.output_bytes,
			case.mean_latency_us,
			case.throughput_mib_s,
		);
	}
	out
}

pub fn write_summary<W: Write>(
	writer: &mut W,
	summary: &BenchmarkSummary,
	json: bool,
) -> Result<(), KdgError> {
	if json {
		let payload = serde_json::to_string_pretty(summary)?;
		writeln!(writer, "{}", payload)?;
	} else {
		write!(writer, "{}", render_console_summary(summary))?;
	}
	writer.flush()?;
	Ok(())
}

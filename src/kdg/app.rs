// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: keccak-digest
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::kdg::benchmark::{
	run_benchmarks, write_summary, DEFAULT_ITERATIONS,
};
use crate::kdg::error::KdgError;
use crate::kdg::registry::{algorithms, DigestAlgorithm};
use crate::kdg::runner;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Run without a command to print SHA3-256, SHA3-512, SHAKE128 and SHAKE256
digests of 1024 bytes of 0xff.
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
	name = "kdg",
	version,
	author,
	about,
	help_template = HELP_TEMPLATE
)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Time each digest over 32, 64, 256 and 1024 byte messages
	Bench {
		/// Algorithm to time; repeat to select several (default: all)
		#[arg(short = 'a', long = "alg", value_enum)]
		algorithms: Vec<DigestAlgorithm>,
		/// Iterations per algorithm and message length
		#[arg(short = 'i', long, default_value_t = DEFAULT_ITERATIONS)]
		iterations: u64,
		/// Print the summary as JSON
		#[arg(long)]
		json: bool,
	},
	/// Generate a shell completion script
	Completions {
		#[arg(value_enum)]
		shell: Shell,
	},
}

fn init_logger() {
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("warn"),
	)
	.try_init();
}

pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<(), KdgError> {
	match cli.command {
		None => runner::run(out),
		Some(Commands::Bench {
			algorithms: selected,
			iterations,
			json,
		}) => {
			let selected = if selected.is_empty() {
				algorithms().collect()
			} else {
				selected
			};
			let summary = run_benchmarks(selected, iterations)?;
			write_summary(out, &summary, json)
		}
		Some(Commands::Completions { shell }) => {
			let mut cmd = Cli::command();
			let name = cmd.get_name().to_string();
			generate(shell, &mut cmd, name, &mut *out);
			out.flush()?;
			Ok(())
		}
	}
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
	init_logger();
	let cli = Cli::parse();
	let stdout = io::stdout();
	let mut out = stdout.lock();
	execute(cli, &mut out)?;
	Ok(())
}

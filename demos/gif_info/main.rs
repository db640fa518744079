//! GIF inspection utility.
//!
//! Provides two subcommands:
//! - `inspect`: print frame count, loop count and the per-frame delay table
//!   of a single GIF.
//! - `validate`: scan a directory and check that every `.gif` file in it
//!   constructs a playable frame store.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use flipbook::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Validate(opts) => run_validate(opts),
	}
}

#[derive(Parser)]
#[command(name = "gif_info")]
#[command(author = "flipbook project")]
#[command(version)]
#[command(about = "Inspect and validate animated GIF files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the frame table of a single GIF
	Inspect(InspectArgs),
	/// Validate every .gif file under a directory
	Validate(ValidateArgs),
}

#[derive(Args)]
struct InspectArgs {
	/// Path to a GIF file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Decode every frame and report its dimensions
	#[arg(short, long, default_value_t = false)]
	frames: bool,
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing GIF files
	#[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
	root: PathBuf,
}

fn run_inspect(opts: InspectArgs) -> Result<()> {
	let mut gif = Gif::open(&opts.file)
		.with_context(|| format!("failed to open {}", opts.file.display()))?;

	let properties = *gif.properties_at(0);
	println!("{}", opts.file.display());
	println!("  frames: {}", gif.count());
	match properties.loop_count() {
		0 => println!("  loops:  forever"),
		count => println!("  loops:  {count}"),
	}

	let mut total = Milliseconds::new(0);
	for index in 0..gif.count() {
		let delay = gif.properties_at(index).delay_time();
		total = Milliseconds::new(total.as_i64() + delay.as_i64());

		if opts.frames {
			let image = gif.image_at(index);
			println!("  frame {index}: {delay} ({image})");
		} else {
			println!("  frame {index}: {delay}");
		}
	}
	println!("  pass duration: {total}");

	Ok(())
}

fn run_validate(opts: ValidateArgs) -> Result<()> {
	let entries = fs::read_dir(&opts.root)
		.with_context(|| format!("failed to read {}", opts.root.display()))?;

	let mut checked = 0usize;
	let mut failures = 0usize;

	for entry in entries {
		let path = entry?.path();
		let is_gif = path
			.extension()
			.is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
		if !is_gif {
			continue;
		}

		checked += 1;
		match Gif::open(&path) {
			Ok(gif) => println!("ok   {} ({} frames)", path.display(), gif.count()),
			Err(err) => {
				failures += 1;
				println!("FAIL {}: {err}", path.display());
			}
		}
	}

	println!("{checked} files checked, {failures} failures");
	if failures > 0 {
		bail!("{failures} of {checked} files failed validation");
	}

	Ok(())
}

//! Terminal GIF player.
//!
//! Drives an [`Animator`] against the wall clock and prints every frame
//! change notification. Playback ends when the container's loop count is
//! reached, or after `--seconds` for GIFs that loop forever.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use flipbook::prelude::*;

#[derive(Parser)]
#[command(name = "player")]
#[command(author = "flipbook project")]
#[command(version)]
#[command(about = "Play an animated GIF in the terminal", long_about = None)]
struct Cli {
	/// Path to a GIF file
	#[arg(value_name = "FILE")]
	file: std::path::PathBuf,

	/// Stop after this many seconds even if the GIF loops forever
	#[arg(short, long, value_name = "SECONDS", default_value_t = 10.0)]
	seconds: f64,

	/// Milliseconds between scheduler ticks
	#[arg(long, value_name = "MS", default_value_t = 16)]
	tick: u64,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let gif = Gif::open(&cli.file)
		.with_context(|| format!("failed to open {}", cli.file.display()))?;
	println!(
		"{}: {} frames, loop count {}",
		cli.file.display(),
		gif.count(),
		gif.properties_at(0).loop_count()
	);

	let gif = Rc::new(RefCell::new(gif));
	let started = Instant::now();

	let mut animator = Animator::new();
	animator.set_delegate(Some(Box::new(move |image: Arc<PixelBuffer>, index: usize| {
		println!("{:>8.3}s  frame {index}  {image}", started.elapsed().as_secs_f64());
	})));
	animator.set_gif(Some(&gif));

	while animator.is_playing() && started.elapsed().as_secs_f64() < cli.seconds {
		animator.tick();
		thread::sleep(Duration::from_millis(cli.tick));
	}

	println!("done after {:.3}s", started.elapsed().as_secs_f64());
	Ok(())
}

//! This crate provides the core playback types for the `flipbook` project.
//!
//! `flipbook` plays animated GIFs for image-view components: it decodes a
//! multi-frame container lazily, frame by frame, and drives a scheduler that
//! advances the visible frame according to each frame's declared display
//! duration, honoring the container's loop count.
//!
//! # Components
//!
//! - [`gif::Gif`]: the frame store. Validates the container up front,
//!   extracts display metadata for every frame eagerly, and decodes pixel
//!   data lazily on first access, caching it for the store's lifetime.
//! - [`gif::inflate`]: stateless normalization of decoded frames into a
//!   premultiplied blit-ready buffer, run off the scheduling path.
//! - [`animator::Animator`]: the scheduling state machine. Observes a frame
//!   store through a non-owning handle, picks the visible frame on every
//!   timer tick, and notifies a single observer of frame changes.
//! - [`timing`]: the millisecond and frame-index value types the scheduler
//!   works in, each with a reserved sentinel for "not started yet".
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use flipbook_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gif = Gif::open("spinner.gif")?;
//! println!("{} frames, first shown for {}", gif.count(), gif.properties_at(0).delay_time());
//! # Ok(())
//! # }
//! ```

pub mod animator;
pub mod gif;
pub mod timing;

/// `use flipbook_types::prelude::*;` to import commonly used items.
pub mod prelude;

//! Prelude module for `flipbook_types`.
//!
//! This module provides a convenient way to import commonly used types and
//! traits.
//!
//! # Examples
//!
//! ```no_run
//! use flipbook_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gif = Gif::open("spinner.gif")?;
//! let animator = Animator::new();
//! assert!(!animator.is_playing());
//! # Ok(())
//! # }
//! ```

// Frame store types
#[doc(inline)]
pub use crate::gif::{FrameProperties, Gif, GifError, PixelBuffer, inflate};

// Scheduler types
#[doc(inline)]
pub use crate::animator::{Animator, AnimatorDelegate};

#[doc(inline)]
pub use crate::animator::timer::{AnimationTimer, ManualTimer, SystemTimer};

// Value types
#[doc(inline)]
pub use crate::timing::{FrameIndex, Milliseconds};

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `flipbook` is an animated GIF playback engine: lazy per-frame decoding,
//! a display-duration scheduler with loop-count handling, and background
//! frame normalization, designed to sit behind any image-view component
//! that can supply a periodic tick.
//!
//! The entire API lives in [`flipbook_types`] and is re-exported here.
//!
//! # Examples
//!
//! ```no_run
//! use flipbook::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gif = Rc::new(RefCell::new(Gif::open("spinner.gif")?));
//!
//! let mut animator = Animator::new();
//! animator.set_delegate(Some(Box::new(|image: Arc<PixelBuffer>, index: usize| {
//!     println!("frame {index}: {image}");
//! })));
//! animator.set_gif(Some(&gif));
//! # Ok(())
//! # }
//! ```

pub use flipbook_types::*;

//! Animated GIF frame store with lazy per-frame decoding.
//!
//! A [`Gif`] owns the ordered frame sequence of one animated image. Display
//! metadata for every frame is extracted eagerly at construction, so the
//! scheduler can ask "how long is frame `i` shown" without ever touching
//! pixels. Pixel data is a fault: absent until first access, decoded on
//! demand, and cached for the store's lifetime. The cache is bounded by the
//! fixed frame count of the container, so nothing is ever evicted.
//!
//! # Construction
//!
//! Three inputs are accepted, and all of them validate the container before
//! any frame metadata is trusted:
//!
//! - [`Gif::named`] resolves a resource name against a directory
//! - [`Gif::open`] reads a file path
//! - [`Gif::from_bytes`] takes an encoded buffer directly
//!
//! Validation runs in two passes over the encoded source. The signature
//! check rejects non-GIF data, then a metadata pass walks every frame
//! descriptor collecting delays and the container's loop count. Failure of
//! either pass fails the whole construction; a store that exists always has
//! a readable [`FrameProperties`] for every index in `0..count`.
//!
//! # Decoding
//!
//! GIF frames composite onto the previous canvas, so pixel extraction is
//! sequential. The store keeps a decode cursor and, on a fault, decodes
//! forward from the cursor through the requested index, caching every frame
//! it passes. Each frame is decoded exactly once per store lifetime.
//!
//! # Examples
//!
//! ```no_run
//! use flipbook_types::gif::Gif;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut gif = Gif::open("loading.gif")?;
//!
//! println!("{} frames", gif.count());
//! for index in 0..gif.count() {
//!     println!("frame {}: {}", index, gif.properties_at(index));
//! }
//!
//! let first = gif.image_at(0);
//! println!("first frame is {}x{}", first.width(), first.height());
//! # Ok(())
//! # }
//! ```

mod decompress;
mod error;
mod frame;
mod properties;

use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use self::frame::ImageFault;

pub use self::decompress::inflate;
pub use self::error::GifError;
pub use self::frame::PixelBuffer;
pub use self::properties::FrameProperties;

mod constants {
	/// Signature of the 1987 GIF revision
	pub const MAGIC_87A: &[u8; 6] = b"GIF87a";

	/// Signature of the 1989 GIF revision
	pub const MAGIC_89A: &[u8; 6] = b"GIF89a";

	/// Length of the container signature
	pub const SIGNATURE_LEN: usize = 6;
}

/// Callback invoked with a decoded frame once it is ready.
pub type FrameReady = Box<dyn FnOnce(Arc<PixelBuffer>)>;

/// An animated GIF frame store.
///
/// Owns a fixed-count sequence of frame slots plus the decode cursor over
/// the original encoded source. Frame count and metadata never change after
/// construction; pixel data is decoded lazily and cached.
///
/// The store is single-writer: all cache mutation happens on whichever
/// context calls [`image_at`](Self::image_at) and
/// [`poll_decompressed`](Self::poll_decompressed). Only the stateless
/// normalization in [`inflate`] runs on background workers.
pub struct Gif {
	faults: Vec<ImageFault>,
	cursor: image::Frames<'static>,
	decoded_upto: usize,
	inflated_tx: mpsc::Sender<(usize, PixelBuffer)>,
	inflated_rx: mpsc::Receiver<(usize, PixelBuffer)>,
	pending: Vec<(usize, FrameReady)>,
}

impl Gif {
	/// Opens a GIF by resource name.
	///
	/// Looks for `<name>.gif` and then `<name>` under `directory`, which
	/// defaults to the current directory.
	///
	/// # Errors
	///
	/// [`GifError::ResourceNotFound`] when neither candidate exists, plus
	/// everything [`Gif::open`] can return.
	pub fn named(name: &str, directory: Option<&Path>) -> Result<Self, GifError> {
		let directory = directory.unwrap_or(Path::new(".")).to_path_buf();

		let candidates = [directory.join(format!("{name}.gif")), directory.join(name)];
		for candidate in &candidates {
			if candidate.is_file() {
				log::debug!("resolved GIF {:?} to {}", name, candidate.display());
				return Self::open(candidate);
			}
		}

		log::warn!("unable to find GIF {:?} under {}", name, directory.display());
		Err(GifError::ResourceNotFound {
			name: name.to_owned(),
			directory,
		})
	}

	/// Opens a GIF from a file path.
	///
	/// # Errors
	///
	/// [`GifError::IOError`] when the file cannot be read, plus everything
	/// [`Gif::from_bytes`] can return.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GifError> {
		let bytes = std::fs::read(&path)?;
		Self::from_bytes(bytes)
	}

	/// Builds a frame store from an encoded byte buffer.
	///
	/// Validates the container signature, then extracts display metadata for
	/// every frame. Pixel data is not decoded here.
	///
	/// # Errors
	///
	/// - [`GifError::SourceInvalid`] when the bytes are not an animated GIF
	///   container, including a container with zero frames
	/// - [`GifError::DataInvalid`] when the codec cannot open the source
	/// - [`GifError::PropertiesInvalid`] when any frame's metadata is
	///   missing or malformed
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, GifError> {
		Self::validate_signature(&bytes)?;

		let faults = Self::create_faults(&bytes)?;
		if faults.is_empty() {
			return Err(GifError::SourceInvalid {
				reason: "container has no frames".to_owned(),
			});
		}

		let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(|err| GifError::DataInvalid {
			reason: err.to_string(),
		})?;

		log::debug!("loaded GIF with {} frames", faults.len());

		let (inflated_tx, inflated_rx) = mpsc::channel();
		Ok(Self {
			faults,
			cursor: decoder.into_frames(),
			decoded_upto: 0,
			inflated_tx,
			inflated_rx,
			pending: Vec::new(),
		})
	}

	fn validate_signature(bytes: &[u8]) -> Result<(), GifError> {
		if bytes.len() < constants::SIGNATURE_LEN {
			return Err(GifError::SourceInvalid {
				reason: format!("{} bytes is shorter than a signature", bytes.len()),
			});
		}

		let signature = &bytes[..constants::SIGNATURE_LEN];
		if signature != constants::MAGIC_87A && signature != constants::MAGIC_89A {
			return Err(GifError::SourceInvalid {
				reason: format!("signature {signature:02X?}"),
			});
		}

		Ok(())
	}

	/// Walks every frame descriptor, collecting display metadata without
	/// materializing pixels.
	fn create_faults(bytes: &[u8]) -> Result<Vec<ImageFault>, GifError> {
		let mut options = gif::DecodeOptions::new();
		options.set_color_output(gif::ColorOutput::Indexed);

		let mut decoder =
			options
				.read_info(Cursor::new(bytes))
				.map_err(|err| GifError::DataInvalid {
					reason: err.to_string(),
				})?;

		let mut delays = Vec::new();
		loop {
			match decoder.next_frame_info() {
				Ok(Some(frame)) => delays.push(frame.delay),
				Ok(None) => break,
				Err(err) => {
					return Err(GifError::PropertiesInvalid {
						index: delays.len(),
						reason: err.to_string(),
					});
				}
			}
		}

		// The loop-count extension has been parsed once every frame has
		// been seen.
		let loop_count = match decoder.repeat() {
			gif::Repeat::Infinite => 0,
			gif::Repeat::Finite(count) => count,
		};

		Ok(delays
			.into_iter()
			.map(|delay| ImageFault::new(FrameProperties::from_wire(loop_count, delay)))
			.collect())
	}

	/// Returns the number of frames, fixed for the store's lifetime.
	pub fn count(&self) -> usize {
		self.faults.len()
	}

	/// Returns the display metadata of the frame at `index`.
	///
	/// Defined for every `0 <= index < count`; anything else is a caller
	/// bug, not a recoverable failure.
	///
	/// # Panics
	///
	/// Panics when `index` is out of range.
	pub fn properties_at(&self, index: usize) -> &FrameProperties {
		debug_assert!(index < self.count(), "frame index {index} out of range");
		self.faults[index].properties()
	}

	/// Returns the pixel data of the frame at `index`, decoding it first if
	/// it has not been materialized yet.
	///
	/// Decoding runs on the calling context. Frames between the decode
	/// cursor and `index` are decoded and cached along the way.
	///
	/// # Panics
	///
	/// Panics when `index` is out of range, or when a frame whose metadata
	/// was validated at construction cannot be decoded.
	pub fn image_at(&mut self, index: usize) -> Arc<PixelBuffer> {
		debug_assert!(index < self.count(), "frame index {index} out of range");

		if let Some(image) = self.faults[index].image() {
			return Arc::clone(image);
		}

		loop {
			let position = self.decoded_upto;
			let frame = match self.cursor.next() {
				Some(Ok(frame)) => frame,
				Some(Err(err)) => panic!("failed to extract GIF frame at index {position}: {err}"),
				None => panic!("failed to extract GIF frame at index {position}: container exhausted"),
			};

			let buffer = frame.into_buffer();
			let (width, height) = (buffer.width(), buffer.height());
			let image = Arc::new(PixelBuffer::new(width, height, buffer.into_raw()));

			self.faults[position].fill(Arc::clone(&image));
			self.decoded_upto += 1;

			if position == index {
				return image;
			}
		}
	}

	/// Requests the pixel data of the frame at `index`, normalizing it on a
	/// background worker.
	///
	/// A cached frame is delivered synchronously. Otherwise the raw frame is
	/// decoded on the calling context, handed to [`inflate`] on a worker,
	/// and delivered through [`poll_decompressed`](Self::poll_decompressed)
	/// after the normalized result has been cached.
	///
	/// The callback receives whatever index it was registered for; a caller
	/// whose interest has moved on must discard stale deliveries itself.
	pub fn image_at_with<F>(&mut self, index: usize, on_ready: F)
	where
		F: FnOnce(Arc<PixelBuffer>) + 'static,
	{
		debug_assert!(index < self.count(), "frame index {index} out of range");

		if let Some(image) = self.faults[index].image() {
			on_ready(Arc::clone(image));
			return;
		}

		let raw = self.image_at(index);
		let results = self.inflated_tx.clone();
		std::thread::spawn(move || {
			let inflated = inflate((*raw).clone());
			// The store may be gone by the time normalization finishes.
			let _ = results.send((index, inflated));
		});

		self.pending.push((index, Box::new(on_ready)));
	}

	/// Drains finished background normalizations, caching each result and
	/// firing the callbacks registered for it.
	///
	/// Must be called on the same context that owns the store; this is the
	/// single place where worker results re-enter the cache. Returns the
	/// number of callbacks fired.
	pub fn poll_decompressed(&mut self) -> usize {
		let mut delivered = 0;

		while let Ok((index, buffer)) = self.inflated_rx.try_recv() {
			let image = Arc::new(buffer);
			self.faults[index].fill(Arc::clone(&image));

			let mut i = 0;
			while i < self.pending.len() {
				if self.pending[i].0 == index {
					let (_, on_ready) = self.pending.swap_remove(i);
					on_ready(Arc::clone(&image));
					delivered += 1;
				} else {
					i += 1;
				}
			}
		}

		delivered
	}
}

impl fmt::Debug for Gif {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Gif")
			.field("count", &self.count())
			.field("decoded_upto", &self.decoded_upto)
			.field("pending", &self.pending.len())
			.finish_non_exhaustive()
	}
}

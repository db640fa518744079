//! Error types for GIF loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when constructing a [`Gif`](super::Gif) frame store.
///
/// All variants are recoverable construction-time failures. Once a store has
/// been built, frame metadata access is infallible and pixel extraction of a
/// validated frame is treated as a fatal condition at the point of use.
#[derive(Debug, Error)]
pub enum GifError {
	/// Named resource lookup failed
	#[error("no GIF named {name:?} under {}", directory.display())]
	ResourceNotFound {
		/// Resource name that was looked up
		name: String,
		/// Directory that was searched
		directory: PathBuf,
	},

	/// Byte source could not be opened as an image source
	#[error("unreadable image source: {reason}")]
	DataInvalid {
		/// Decoder diagnostic
		reason: String,
	},

	/// Source opened, but is not an animated GIF container
	#[error("not an animated GIF container: {reason}")]
	SourceInvalid {
		/// What the validation found instead
		reason: String,
	},

	/// Container opened, but per-frame metadata is unreadable
	#[error("unreadable properties for frame {index}: {reason}")]
	PropertiesInvalid {
		/// Frame index whose metadata could not be read
		index: usize,
		/// Decoder diagnostic
		reason: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

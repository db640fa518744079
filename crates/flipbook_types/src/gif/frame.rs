//! Decoded frame buffers and the lazy fault holding them.

use std::fmt::Display;
use std::sync::Arc;

use super::properties::FrameProperties;

/// Decoded frame pixels in row-major RGBA8 layout.
///
/// Buffers come out of the codec with straight alpha; the decompressor
/// normalizes them into the premultiplied blit format and flips the
/// `premultiplied` flag. The payload length always matches the dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
	width: u32,
	height: u32,
	premultiplied: bool,
	data: Vec<u8>,
}

impl PixelBuffer {
	/// Bytes per pixel (four 8-bit components).
	pub const BYTES_PER_PIXEL: usize = 4;

	/// Creates a buffer from raw straight-alpha RGBA8 data.
	///
	/// # Panics
	///
	/// Panics if the data length doesn't match the dimensions.
	pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
		assert_eq!(
			data.len(),
			width as usize * height as usize * Self::BYTES_PER_PIXEL,
			"Pixel data length must match frame dimensions"
		);
		Self {
			width,
			height,
			premultiplied: false,
			data,
		}
	}

	/// Returns the frame width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the frame height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the raw pixel bytes.
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Consumes the buffer, returning the raw pixel bytes.
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}

	/// Returns `true` once the buffer holds premultiplied alpha.
	pub fn is_premultiplied(&self) -> bool {
		self.premultiplied
	}

	/// Returns `true` if any pixel is not fully opaque.
	pub fn has_alpha(&self) -> bool {
		self.data.chunks_exact(Self::BYTES_PER_PIXEL).any(|px| px[3] != u8::MAX)
	}

	pub(crate) fn set_premultiplied(&mut self, premultiplied: bool) {
		self.premultiplied = premultiplied;
	}

	pub(crate) fn data_mut(&mut self) -> &mut [u8] {
		&mut self.data
	}
}

impl Display for PixelBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}x{} rgba8{}",
			self.width,
			self.height,
			if self.premultiplied { " premultiplied" } else { "" }
		)
	}
}

/// A frame slot: metadata always present, pixels absent until first access.
pub(crate) struct ImageFault {
	properties: FrameProperties,
	image: Option<Arc<PixelBuffer>>,
}

impl ImageFault {
	pub(crate) fn new(properties: FrameProperties) -> Self {
		Self {
			properties,
			image: None,
		}
	}

	pub(crate) fn properties(&self) -> &FrameProperties {
		&self.properties
	}

	pub(crate) fn image(&self) -> Option<&Arc<PixelBuffer>> {
		self.image.as_ref()
	}

	pub(crate) fn fill(&mut self, image: Arc<PixelBuffer>) {
		self.image = Some(image);
	}
}

//! Frame normalization for fast blitting.
//!
//! Decoded GIF frames arrive with straight alpha. Compositors blend
//! premultiplied pixels without a per-draw conversion, so each frame is
//! normalized once, off the scheduling path. The transform is stateless and
//! thread-safe, which is what lets the store run it on background workers.

use super::frame::PixelBuffer;

/// Normalizes a decoded frame into the canonical blit format.
///
/// Frames with translucent pixels are premultiplied in place; fully opaque
/// frames pass through with the alpha byte forced to `0xFF`. Either way the
/// result is 8 bits per component, 4 components, sized exactly
/// `width * height * 4`.
///
/// Fails open: a buffer whose dimensions disagree with its payload is
/// returned unchanged rather than rejected.
///
/// # Examples
///
/// ```
/// use flipbook_types::gif::{PixelBuffer, inflate};
///
/// let frame = PixelBuffer::new(1, 1, vec![200, 100, 50, 128]);
/// let normalized = inflate(frame);
///
/// assert!(normalized.is_premultiplied());
/// assert_eq!(normalized.data(), &[100, 50, 25, 128]);
/// ```
pub fn inflate(mut frame: PixelBuffer) -> PixelBuffer {
	let expected = frame.width() as usize * frame.height() as usize * PixelBuffer::BYTES_PER_PIXEL;
	if frame.data().len() != expected {
		log::warn!(
			"skipping normalization of {}: expected {} bytes, found {}",
			frame,
			expected,
			frame.data().len()
		);
		return frame;
	}

	if frame.is_premultiplied() {
		return frame;
	}

	if frame.has_alpha() {
		for px in frame.data_mut().chunks_exact_mut(PixelBuffer::BYTES_PER_PIXEL) {
			let alpha = u16::from(px[3]);
			px[0] = ((u16::from(px[0]) * alpha) / 255) as u8;
			px[1] = ((u16::from(px[1]) * alpha) / 255) as u8;
			px[2] = ((u16::from(px[2]) * alpha) / 255) as u8;
		}
	} else {
		// Opaque frames only need the alpha byte pinned
		for px in frame.data_mut().chunks_exact_mut(PixelBuffer::BYTES_PER_PIXEL) {
			px[3] = u8::MAX;
		}
	}

	frame.set_premultiplied(true);
	frame
}

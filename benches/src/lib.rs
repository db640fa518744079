//! Benchmark helper utilities for flipbook
//!
//! This module provides utilities for generating synthetic animated GIF
//! containers in memory, so the benchmarks exercise realistic decode work
//! without shipping binary fixtures.

/// Generates an animated GIF with `frames` full-canvas frames of the given
/// dimensions.
///
/// Every frame carries a 50 ms wire delay and a gradient fill, so both the
/// metadata pass and the pixel pass have real work to do.
pub fn generate_test_gif_data(width: u16, height: u16, frames: usize) -> Vec<u8> {
	let mut bytes = Vec::new();
	{
		let mut encoder = gif::Encoder::new(&mut bytes, width, height, &[])
			.expect("in-memory GIF encoding cannot fail");
		encoder
			.set_repeat(gif::Repeat::Infinite)
			.expect("in-memory GIF encoding cannot fail");

		let pixel_count = width as usize * height as usize;
		for index in 0..frames {
			let mut pixels = Vec::with_capacity(pixel_count * 3);
			for position in 0..pixel_count {
				let shade = ((position + index * 31) % 256) as u8;
				pixels.extend_from_slice(&[shade, shade.wrapping_add(85), shade.wrapping_mul(2)]);
			}

			let mut frame = gif::Frame::from_rgb(width, height, &pixels);
			frame.delay = 5;
			encoder
				.write_frame(&frame)
				.expect("in-memory GIF encoding cannot fail");
		}
	}
	bytes
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny animation: 32x32, 4 frames
	pub const TINY: (u16, u16, usize) = (32, 32, 4);
	/// Small animation: 128x128, 8 frames
	pub const SMALL: (u16, u16, usize) = (128, 128, 8);
	/// Medium animation: 256x256, 16 frames
	pub const MEDIUM: (u16, u16, usize) = (256, 256, 16);
	/// Large animation: 480x270, 24 frames - typical short clip
	pub const LARGE: (u16, u16, usize) = (480, 270, 24);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_gif_data() {
		let data = generate_test_gif_data(32, 32, 4);

		// Check magic bytes
		assert_eq!(&data[0..6], b"GIF89a");

		// The container must round-trip through the frame store.
		let gif = flipbook_types::gif::Gif::from_bytes(data).unwrap();
		assert_eq!(gif.count(), 4);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::TINY, (32, 32, 4));
		assert_eq!(sizes::SMALL, (128, 128, 8));
		assert_eq!(sizes::MEDIUM, (256, 256, 16));
		assert_eq!(sizes::LARGE, (480, 270, 24));
	}
}

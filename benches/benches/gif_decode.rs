//! Benchmark suite for GIF loading and frame decoding
//!
//! Measures the three costs the playback engine pays: the construction-time
//! metadata pass, lazy pixel decoding of a whole sequence, and frame
//! normalization.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flipbook_benches::{generate_test_gif_data, sizes};
use flipbook_types::gif::{Gif, PixelBuffer, inflate};
use std::hint::black_box;

/// Benchmark the construction-time metadata pass over the whole container
fn bench_metadata_pass(c: &mut Criterion) {
	let mut group = c.benchmark_group("gif_metadata");

	for (name, (width, height, frames)) in [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
	] {
		let data = generate_test_gif_data(width, height, frames);

		group.throughput(Throughput::Elements(frames as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| {
				let gif = Gif::from_bytes(black_box(data.clone()));
				black_box(gif)
			});
		});
	}

	group.finish();
}

/// Benchmark sequential lazy decoding of every frame in the container
fn bench_frame_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gif_decode");

	for (name, (width, height, frames)) in [("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let data = generate_test_gif_data(width, height, frames);

		let pixels = (width as u64) * (height as u64) * (frames as u64);
		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("all_frames", name), &data, |b, data| {
			b.iter(|| {
				let mut gif = Gif::from_bytes(data.clone()).unwrap();
				for index in 0..gif.count() {
					black_box(gif.image_at(index));
				}
			});
		});
	}

	group.finish();
}

/// Benchmark normalization of a translucent frame
fn bench_inflate(c: &mut Criterion) {
	let mut group = c.benchmark_group("gif_inflate");

	for (name, (width, height, _)) in [("small", sizes::SMALL), ("large", sizes::LARGE)] {
		let pixel_count = width as usize * height as usize;
		let mut data = Vec::with_capacity(pixel_count * 4);
		for position in 0..pixel_count {
			let shade = (position % 256) as u8;
			data.extend_from_slice(&[shade, shade, shade, shade.wrapping_add(1)]);
		}
		let frame = PixelBuffer::new(width as u32, height as u32, data);

		group.throughput(Throughput::Elements(pixel_count as u64));
		group.bench_with_input(BenchmarkId::new("inflate", name), &frame, |b, frame| {
			b.iter(|| black_box(inflate(frame.clone())));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_metadata_pass, bench_frame_decode, bench_inflate);
criterion_main!(benches);

//! End-to-end playback tests against synthesized GIF containers.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use flipbook::prelude::*;

/// Encodes a 2x2 animated GIF in memory with the given frame delays.
fn encode_gif(delays: &[u16], repeat: gif::Repeat) -> Vec<u8> {
	let mut bytes = Vec::new();
	{
		let mut encoder = gif::Encoder::new(&mut bytes, 2, 2, &[]).unwrap();
		encoder.set_repeat(repeat).unwrap();

		for (index, &delay) in delays.iter().enumerate() {
			let shade = (index * 60) as u8;
			let pixels = [shade; 12];
			let mut frame = gif::Frame::from_rgb(2, 2, &pixels);
			frame.delay = delay;
			encoder.write_frame(&frame).unwrap();
		}
	}
	bytes
}

fn playback_rig(
	delays: &[u16],
	repeat: gif::Repeat,
) -> (Animator, ManualTimer, Rc<RefCell<Gif>>, Rc<RefCell<Vec<usize>>>) {
	let gif = Rc::new(RefCell::new(Gif::from_bytes(encode_gif(delays, repeat)).unwrap()));

	let timer = ManualTimer::new();
	let mut animator = Animator::with_timer(Box::new(timer.clone()));

	let notified: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&notified);
	animator.set_delegate(Some(Box::new(move |_image: Arc<PixelBuffer>, index: usize| {
		log.borrow_mut().push(index);
	})));

	animator.set_gif(Some(&gif));
	(animator, timer, gif, notified)
}

/// Two frames shown for 100 ms and 200 ms, loop count 2. The exact timeline
/// follows from the strict-greater expiry rule: a tick at exactly the
/// declared delay does not advance, the first tick past it does, and the
/// wrap selects frame 0 again within the same tick.
#[test_log::test]
fn test_two_frame_two_loop_timeline() {
	let (mut animator, timer, _gif, notified) =
		playback_rig(&[10, 20], gif::Repeat::Finite(2));

	assert!(animator.is_playing());

	// First tick leaves prestart and shows frame 0.
	timer.set_timestamp(0.05);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0]);

	// 70 ms into a 100 ms frame: nothing happens.
	timer.set_timestamp(0.12);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0]);

	// 200 ms elapsed, strictly past 100 ms: frame 1.
	timer.set_timestamp(0.25);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1]);

	// 90 ms into a 200 ms frame: nothing.
	timer.set_timestamp(0.34);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1]);

	// Exactly 200 ms elapsed: the boundary is exclusive, still nothing.
	timer.set_timestamp(0.45);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1]);
	assert!(animator.is_playing());

	// 210 ms elapsed: the pass completes and the wrap shows frame 0 again
	// within the same tick. One loop done, one to go.
	timer.set_timestamp(0.46);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1, 0]);
	assert!(animator.is_playing());

	// Second pass.
	timer.set_timestamp(0.57);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1, 0, 1]);

	// Second wrap reaches the loop limit: frame 0 is announced for the new
	// pass, then playback stops.
	timer.set_timestamp(0.78);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1, 0, 1, 0]);
	assert!(!animator.is_playing());

	// Stopped for good: later ticks notify nothing.
	timer.set_timestamp(2.0);
	animator.tick();
	assert_eq!(*notified.borrow(), vec![0, 1, 0, 1, 0]);
}

#[test]
fn test_infinite_gif_keeps_playing() {
	let (mut animator, timer, _gif, notified) =
		playback_rig(&[10], gif::Repeat::Infinite);

	let mut now = 0.0;
	for _ in 0..25 {
		now += 0.11;
		timer.set_timestamp(now);
		animator.tick();
	}

	assert!(animator.is_playing());
	// A single-frame GIF wraps on every advance, always back to frame 0.
	assert!(notified.borrow().iter().all(|&index| index == 0));
	assert_eq!(notified.borrow().len(), 25);
}

#[test]
fn test_notified_pixels_match_container() {
	let gif = Rc::new(RefCell::new(
		Gif::from_bytes(encode_gif(&[10, 10], gif::Repeat::Infinite)).unwrap(),
	));

	let timer = ManualTimer::new();
	let mut animator = Animator::with_timer(Box::new(timer.clone()));

	let seen: Rc<RefCell<Vec<Arc<PixelBuffer>>>> = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&seen);
	animator.set_delegate(Some(Box::new(move |image: Arc<PixelBuffer>, _index: usize| {
		log.borrow_mut().push(image);
	})));
	animator.set_gif(Some(&gif));

	timer.set_timestamp(0.0);
	animator.tick();

	let seen = seen.borrow();
	assert_eq!(seen.len(), 1);
	assert_eq!(seen[0].width(), 2);
	assert_eq!(seen[0].height(), 2);
	assert_eq!(seen[0].data().len(), 16);
}

#[test]
fn test_dropping_store_mid_playback_stops() {
	let (mut animator, timer, gif, notified) = playback_rig(&[10, 10], gif::Repeat::Infinite);

	timer.set_timestamp(0.0);
	animator.tick();
	assert_eq!(notified.borrow().len(), 1);

	drop(gif);

	timer.set_timestamp(0.2);
	animator.tick();
	assert!(!animator.is_playing());
	assert_eq!(notified.borrow().len(), 1);
}

#[test]
fn test_named_lookup_roundtrip() {
	let directory = std::env::temp_dir();
	let name = format!("flipbook-playback-{}", std::process::id());
	let path = directory.join(format!("{name}.gif"));

	std::fs::write(&path, encode_gif(&[10], gif::Repeat::Infinite)).unwrap();

	let gif = Gif::named(&name, Some(&directory)).unwrap();
	assert_eq!(gif.count(), 1);

	std::fs::remove_file(&path).unwrap();

	let missing = Gif::named(&name, Some(&directory));
	assert!(matches!(missing, Err(GifError::ResourceNotFound { .. })));
}

#[test]
fn test_construction_error_taxonomy() {
	let not_a_gif = Gif::from_bytes(b"definitely not an image".to_vec());
	assert!(matches!(not_a_gif, Err(GifError::SourceInvalid { .. })));

	let mut corrupt = b"GIF89a".to_vec();
	corrupt.extend_from_slice(&[0xFF; 4]);
	assert!(matches!(
		Gif::from_bytes(corrupt),
		Err(GifError::DataInvalid { .. })
	));

	assert!(matches!(
		Gif::open("/nonexistent/path.gif"),
		Err(GifError::IOError(_))
	));
}

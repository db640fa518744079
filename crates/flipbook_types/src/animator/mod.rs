//! Frame scheduling state machine.
//!
//! An [`Animator`] observes a [`Gif`] frame store and decides, on every tick
//! of its timer, which frame should be on screen. It is either **stopped**
//! (timer paused, no frame timing in progress) or **playing** (timer
//! running, frames advancing). Assigning a store starts playback from the
//! beginning; clearing it, or dropping the store elsewhere, stops playback.
//!
//! # Scheduling
//!
//! Ticks arrive at a faster cadence than frames change, so most ticks do
//! nothing. A frame is swapped out only on the first tick that finds its
//! elapsed display time *strictly* greater than its declared delay, which
//! guarantees every frame at least its full declared duration on screen.
//! When the index runs past the last frame the animator wraps to frame 0
//! within the same tick, counts the completed pass, and stops once the
//! container's loop count is reached.
//!
//! Exactly one observer is notified of frame changes. Notifications carry
//! the decoded pixels and the frame index, arrive at most once per tick, and
//! always in increasing index order within a pass.
//!
//! # Driving
//!
//! The host owns the periodic callback and calls [`Animator::tick`] from its
//! scheduling context (a render loop, a UI repaint handler). All animator
//! and cache state is mutated on that single context; no locking anywhere.
//!
//! # Examples
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use std::sync::Arc;
//!
//! use flipbook_types::animator::Animator;
//! use flipbook_types::gif::{Gif, PixelBuffer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gif = Rc::new(RefCell::new(Gif::open("spinner.gif")?));
//!
//! let mut animator = Animator::new();
//! animator.set_delegate(Some(Box::new(|image: Arc<PixelBuffer>, index: usize| {
//!     println!("frame {index}: {image}");
//! })));
//! animator.set_gif(Some(&gif));
//!
//! loop {
//!     animator.tick();
//!     std::thread::sleep(std::time::Duration::from_millis(16));
//! }
//! # }
//! ```

pub mod timer;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::gif::{Gif, PixelBuffer};
use crate::timing::{FrameIndex, Milliseconds};

use self::timer::{AnimationTimer, SystemTimer};

/// Single observer of frame changes.
///
/// Implemented for any `FnMut(Arc<PixelBuffer>, usize)` closure, so a
/// delegate can be as small as a `println!`. Fan-out to multiple observers
/// is the subscriber's business, not the animator's.
pub trait AnimatorDelegate {
	/// Called once per frame change with the new pixels and frame index.
	fn image_updated(&mut self, image: Arc<PixelBuffer>, index: usize);
}

impl<F> AnimatorDelegate for F
where
	F: FnMut(Arc<PixelBuffer>, usize),
{
	fn image_updated(&mut self, image: Arc<PixelBuffer>, index: usize) {
		self(image, index);
	}
}

/// The frame scheduling state machine.
///
/// Holds a non-owning handle to the frame store; ownership stays with the
/// embedding component. A handle that no longer resolves is treated exactly
/// like an explicitly cleared one.
pub struct Animator {
	delegate: Option<Box<dyn AnimatorDelegate>>,
	gif: Weak<RefCell<Gif>>,
	timer: Box<dyn AnimationTimer>,
	frame_start_time: Milliseconds,
	current_image_index: FrameIndex,
	loops: u32,
}

impl Animator {
	/// Creates a stopped animator driven by a [`SystemTimer`].
	pub fn new() -> Self {
		Self::with_timer(Box::new(SystemTimer::new()))
	}

	/// Creates a stopped animator driven by the given timer.
	pub fn with_timer(mut timer: Box<dyn AnimationTimer>) -> Self {
		timer.set_paused(true);

		Self {
			delegate: None,
			gif: Weak::new(),
			timer,
			frame_start_time: Milliseconds::IDLE,
			current_image_index: FrameIndex::PRESTART,
			loops: 0,
		}
	}

	/// Registers the observer notified of frame changes, replacing any
	/// previous one.
	pub fn set_delegate(&mut self, delegate: Option<Box<dyn AnimatorDelegate>>) {
		self.delegate = delegate;
	}

	/// Returns the observed frame store, if it is still alive.
	pub fn gif(&self) -> Option<Rc<RefCell<Gif>>> {
		self.gif.upgrade()
	}

	/// Assigns the frame store to animate.
	///
	/// A non-null store restarts playback from the first frame with the
	/// loop counter cleared. `None` stops playback and pauses the timer.
	pub fn set_gif(&mut self, gif: Option<&Rc<RefCell<Gif>>>) {
		match gif {
			Some(gif) => {
				self.gif = Rc::downgrade(gif);
				self.start();
			}
			None => {
				self.gif = Weak::new();
				self.stop();
			}
		}
	}

	/// Returns `true` while frames are advancing.
	pub fn is_playing(&self) -> bool {
		!self.timer.is_paused()
	}

	fn start(&mut self) {
		if self.gif.upgrade().is_none() {
			return;
		}

		self.loops = 0;

		self.reset();
		self.timer.set_paused(false);
		log::debug!("playback started");
	}

	fn stop(&mut self) {
		self.timer.set_paused(true);
		self.reset();
	}

	fn reset(&mut self) {
		self.frame_start_time = Milliseconds::IDLE;
		self.current_image_index = FrameIndex::PRESTART;
	}

	/// Advances the state machine by one timer callback.
	///
	/// Call this from the host's periodic callback on the scheduling
	/// context. Returns immediately while stopped; degrades to stopped when
	/// the frame store has gone away.
	pub fn tick(&mut self) {
		if self.timer.is_paused() {
			return;
		}

		let Some(gif) = self.gif.upgrade() else {
			self.stop();
			return;
		};

		let current_time = Milliseconds::from_timestamp(self.timer.timestamp());
		if self.current_image_index.is_prestart()
			|| self.is_current_frame_expired(&gif, current_time)
		{
			self.frame_start_time = current_time;
			self.current_image_index.advance();

			// Loop
			let count = gif.borrow().count();
			if self.current_image_index.reached_end(count) {
				self.loops += 1;
				self.reset();
				self.tick();

				let properties = *gif.borrow().properties_at(self.current_image_index.as_usize());
				if properties.loop_count() > 0 && self.loops >= u32::from(properties.loop_count()) {
					log::debug!("loop limit {} reached, stopping", properties.loop_count());
					self.stop();
				}

				return;
			}

			let index = self.current_image_index.as_usize();
			let image = gif.borrow_mut().image_at(index);
			log::trace!("frame {index} selected at {current_time}");

			if let Some(delegate) = self.delegate.as_mut() {
				delegate.image_updated(image, index);
			}
		}
	}

	fn is_current_frame_expired(&self, gif: &Rc<RefCell<Gif>>, time: Milliseconds) -> bool {
		let gif = gif.borrow();
		let properties = gif.properties_at(self.current_image_index.as_usize());
		let delta_time = time - self.frame_start_time;

		delta_time > properties.delay_time()
	}
}

impl Default for Animator {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for Animator {
	fn drop(&mut self) {
		self.stop();
		self.timer.invalidate();
	}
}

impl fmt::Debug for Animator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Animator")
			.field("playing", &self.is_playing())
			.field("frame_start_time", &self.frame_start_time)
			.field("current_image_index", &self.current_image_index)
			.field("loops", &self.loops)
			.finish_non_exhaustive()
	}
}

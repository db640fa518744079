//! Injectable timer seam for the animator.
//!
//! The animator never reads the wall clock directly. It owns an
//! [`AnimationTimer`] that supplies a monotonic timestamp and a pause flag,
//! while the embedding host drives [`Animator::tick`](super::Animator::tick)
//! from its own periodic callback (a frame loop, a UI repaint, a timer
//! thread). [`SystemTimer`] is the real implementation; [`ManualTimer`] is a
//! hand-advanced one for tests and headless hosts.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time source and pause switch owned by an animator.
pub trait AnimationTimer {
	/// Returns seconds elapsed on the timer's monotonic clock.
	fn timestamp(&self) -> f64;

	/// Returns `true` while the timer is paused.
	fn is_paused(&self) -> bool;

	/// Pauses or resumes the timer.
	fn set_paused(&mut self, paused: bool);

	/// Releases the underlying timer resource. Called once on teardown;
	/// further use of the timer is a no-op.
	fn invalidate(&mut self);
}

/// Wall-clock timer backed by [`Instant`].
///
/// The timestamp origin is the moment of construction.
#[derive(Debug)]
pub struct SystemTimer {
	origin: Instant,
	paused: bool,
}

impl SystemTimer {
	/// Creates a paused timer anchored at the current instant.
	pub fn new() -> Self {
		Self {
			origin: Instant::now(),
			paused: true,
		}
	}
}

impl Default for SystemTimer {
	fn default() -> Self {
		Self::new()
	}
}

impl AnimationTimer for SystemTimer {
	fn timestamp(&self) -> f64 {
		self.origin.elapsed().as_secs_f64()
	}

	fn is_paused(&self) -> bool {
		self.paused
	}

	fn set_paused(&mut self, paused: bool) {
		self.paused = paused;
	}

	fn invalidate(&mut self) {
		self.paused = true;
	}
}

/// Manually advanced timer for tests and headless hosts.
///
/// The handle is cheap to clone and every clone shares the same state, so a
/// test can keep one handle, give the animator another, and move time
/// explicitly:
///
/// ```
/// use flipbook_types::animator::timer::{AnimationTimer, ManualTimer};
///
/// let timer = ManualTimer::new();
/// let clone = timer.clone();
///
/// timer.set_timestamp(0.3);
/// assert_eq!(clone.timestamp(), 0.3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
	inner: Rc<RefCell<ManualTimerState>>,
}

#[derive(Debug, Default)]
struct ManualTimerState {
	timestamp: f64,
	paused: bool,
}

impl ManualTimer {
	/// Creates an unpaused timer at timestamp zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the timestamp in seconds.
	pub fn set_timestamp(&self, seconds: f64) {
		self.inner.borrow_mut().timestamp = seconds;
	}

	/// Moves the timestamp forward by `seconds`.
	pub fn advance(&self, seconds: f64) {
		self.inner.borrow_mut().timestamp += seconds;
	}
}

impl AnimationTimer for ManualTimer {
	fn timestamp(&self) -> f64 {
		self.inner.borrow().timestamp
	}

	fn is_paused(&self) -> bool {
		self.inner.borrow().paused
	}

	fn set_paused(&mut self, paused: bool) {
		self.inner.borrow_mut().paused = paused;
	}

	fn invalidate(&mut self) {
		self.inner.borrow_mut().paused = true;
	}
}

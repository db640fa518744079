//! Time and index value types used by the playback scheduler.
//!
//! Both types reserve a sentinel below their normal range: [`Milliseconds::IDLE`]
//! marks "no frame timing in progress" and [`FrameIndex::PRESTART`] marks
//! "animation not yet begun". The sentinels compare below every normal value,
//! which is what lets the scheduler treat "advance from prestart" and "advance
//! past an expired frame" with the same increment.

use std::fmt::Display;
use std::ops::Sub;
use std::time::Duration;

/// Millisecond count since an arbitrary epoch.
///
/// Values are signed so that the [`IDLE`](Self::IDLE) sentinel stays distinct
/// from the non-negative normal range. Subtraction yields a delta in the same
/// unit and the full ordering is derived, so expiry checks read naturally:
///
/// ```
/// use flipbook_types::timing::Milliseconds;
///
/// let started = Milliseconds::new(300);
/// let now = Milliseconds::new(450);
///
/// assert_eq!(now - started, Milliseconds::new(150));
/// assert!(now - started > Milliseconds::new(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Milliseconds(i64);

impl Milliseconds {
	/// Sentinel marking that no frame timing is in progress.
	pub const IDLE: Milliseconds = Milliseconds(-1);

	/// Delay substituted when a frame reports no usable display duration.
	///
	/// A zero delay would spin the scheduler through the whole sequence on a
	/// single tick, so unspecified delays resolve to 100 ms.
	pub const DEFAULT_DELAY: Milliseconds = Milliseconds(100);

	/// Creates a millisecond count from a raw value.
	pub const fn new(ms: i64) -> Self {
		Self(ms)
	}

	/// Converts a monotonic timestamp in seconds into milliseconds.
	///
	/// # Examples
	///
	/// ```
	/// use flipbook_types::timing::Milliseconds;
	///
	/// assert_eq!(Milliseconds::from_timestamp(0.3), Milliseconds::new(300));
	/// ```
	pub fn from_timestamp(seconds: f64) -> Self {
		Self((seconds * 1000.0).round() as i64)
	}

	/// Converts a GIF wire delay (centiseconds) into milliseconds.
	///
	/// A wire value of zero means the source did not specify a delay and
	/// resolves to [`DEFAULT_DELAY`](Self::DEFAULT_DELAY).
	pub fn from_centis(centiseconds: u16) -> Self {
		if centiseconds == 0 {
			Self::DEFAULT_DELAY
		} else {
			Self(i64::from(centiseconds) * 10)
		}
	}

	/// Converts a [`Duration`] into milliseconds, saturating on overflow.
	pub fn from_duration(duration: Duration) -> Self {
		Self(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
	}

	/// Returns `true` when this is the [`IDLE`](Self::IDLE) sentinel.
	pub const fn is_idle(&self) -> bool {
		self.0 == Self::IDLE.0
	}

	/// Returns the raw millisecond count.
	pub const fn as_i64(&self) -> i64 {
		self.0
	}

	/// Converts a non-negative count into a [`Duration`], clamping below zero.
	pub fn as_duration(&self) -> Duration {
		Duration::from_millis(self.0.max(0) as u64)
	}
}

impl Sub for Milliseconds {
	type Output = Milliseconds;

	fn sub(self, rhs: Self) -> Self::Output {
		Milliseconds(self.0 - rhs.0)
	}
}

impl Display for Milliseconds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_idle() {
			write!(f, "idle")
		} else {
			write!(f, "{}ms", self.0)
		}
	}
}

/// Position within a frame sequence.
///
/// [`PRESTART`](Self::PRESTART) is reserved for "animation not yet begun" and
/// is distinct from every valid index `0..count`. Advancing from prestart
/// lands on frame 0.
///
/// ```
/// use flipbook_types::timing::FrameIndex;
///
/// let mut index = FrameIndex::PRESTART;
/// index.advance();
///
/// assert_eq!(index, FrameIndex::new(0));
/// assert!(!index.reached_end(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(i64);

impl FrameIndex {
	/// Sentinel marking that the animation has not yet begun.
	pub const PRESTART: FrameIndex = FrameIndex(-1);

	/// Creates an index pointing at a concrete frame.
	pub const fn new(index: usize) -> Self {
		Self(index as i64)
	}

	/// Returns `true` when this is the [`PRESTART`](Self::PRESTART) sentinel.
	pub const fn is_prestart(&self) -> bool {
		self.0 == Self::PRESTART.0
	}

	/// Moves to the next frame position.
	pub fn advance(&mut self) {
		self.0 += 1;
	}

	/// Returns `true` when the index has run past the last frame of a
	/// sequence with `count` frames.
	pub fn reached_end(&self, count: usize) -> bool {
		self.0 >= count as i64
	}

	/// Returns the concrete frame position.
	///
	/// # Panics
	///
	/// Panics when called on [`PRESTART`](Self::PRESTART). Only the scheduler
	/// converts indices, and it never does so before the first advance.
	pub fn as_usize(&self) -> usize {
		assert!(self.0 >= 0, "frame index read before playback started");
		self.0 as usize
	}
}

impl Display for FrameIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_prestart() {
			write!(f, "prestart")
		} else {
			write!(f, "{}", self.0)
		}
	}
}

//! Deferred window activation drained on the host tick.
//!
//! Showing a window while views are being matched is unsafe: the pass may
//! have been triggered by that window's own close. Matching only enqueues;
//! the host calls [`WindowShowQueue::tick`] once per update.

use veil_primitives::WindowId;

use crate::host::WindowHost;

/// LIFO queue of windows waiting to be shown.
#[derive(Debug, Default, Clone)]
pub struct WindowShowQueue {
	pending: Vec<WindowId>,
}

impl WindowShowQueue {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a window to be shown on the next tick. Safe at any time.
	pub fn enqueue(&mut self, window: WindowId) {
		self.pending.push(window);
	}

	/// Returns queued window count.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true when nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn contains(&self, window: WindowId) -> bool {
		self.pending.contains(&window)
	}

	/// Drains the whole queue, newest first, showing every window that is
	/// still alive. Returns how many windows were shown.
	pub fn tick<H>(&mut self, host: &mut H) -> usize
	where
		H: WindowHost + ?Sized,
	{
		let mut shown = 0;
		while let Some(window) = self.pending.pop() {
			if !host.is_window_alive(window) {
				tracing::debug!(?window, "Skipping destroyed window");
				continue;
			}
			host.show_window(window);
			shown += 1;
		}
		shown
	}
}

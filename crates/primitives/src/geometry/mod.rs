use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in view-local GUI units.
///
/// `x`/`y` are the top-left corner; the right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	/// Builds a rectangle from its min/max corners.
	pub fn from_min_max(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
		Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
	}

	pub fn left(&self) -> f32 {
		self.x
	}

	pub fn right(&self) -> f32 {
		self.x + self.width
	}

	pub fn top(&self) -> f32 {
		self.y
	}

	pub fn bottom(&self) -> f32 {
		self.y + self.height
	}

	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}

	pub fn contains(&self, x: f32, y: f32) -> bool {
		x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
	}

	/// Bounding box of both rectangles.
	///
	/// Degenerate rectangles still contribute their corners, matching how
	/// captured GUI rects are accumulated.
	pub fn union(&self, other: &Rect) -> Rect {
		Rect::from_min_max(
			self.left().min(other.left()),
			self.top().min(other.top()),
			self.right().max(other.right()),
			self.bottom().max(other.bottom()),
		)
	}

	/// Stretches the rectangle horizontally across `width`, inset by
	/// `padding` on both sides. The vertical extent is kept; the width never
	/// drops below zero.
	pub fn expand_width_to(&self, width: f32, padding: f32) -> Rect {
		Rect::new(padding, self.y, (width - padding * 2.0).max(0.0), self.height)
	}
}

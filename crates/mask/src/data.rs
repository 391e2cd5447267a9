//! Mask entries keyed by view identity.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use veil_primitives::{Rect, TypeName, ViewId, WindowId};

use crate::host::WindowHost;

/// How the overlay treats an unmasked view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskType {
	/// Listed rects (or the whole view when none) are visible and interactive.
	#[default]
	FullyUnmasked,
	/// Listed rects are visible but interaction is still blocked.
	BlockInteractions,
}

/// Post-processing applied to every rect found in a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSizeModifier {
	#[default]
	None,
	/// Stretch each rect across the view width, inset by
	/// [`EXPAND_WIDTH_PADDING`] on both sides. Views narrower than twice the
	/// padding get zero-width rects.
	ExpandWidthToWindow,
}

/// Inset applied on both sides by [`MaskSizeModifier::ExpandWidthToWindow`].
pub const EXPAND_WIDTH_PADDING: f32 = 5.0;

/// Mask state for one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskEntry {
	pub mask_type: MaskType,
	pub size_modifier: MaskSizeModifier,
	/// Unmasked regions in view-local coordinates. Empty means the whole
	/// view when no controls were requested.
	pub rects: Vec<Rect>,
}

impl MaskEntry {
	pub fn new(mask_type: MaskType, size_modifier: MaskSizeModifier) -> Self {
		Self {
			mask_type,
			size_modifier,
			rects: Vec::new(),
		}
	}

	/// Whole view unmasked, no rect restriction.
	pub fn fully_unmasked() -> Self {
		Self::default()
	}
}

/// Windows currently holding a view fully unmasked, and the entry the view
/// had before the first of them arrived.
#[derive(Debug, Clone, Default)]
struct WindowClaims {
	/// `None` marks a view that had no entry.
	original: Option<MaskEntry>,
	windows: SmallVec<[WindowId; 2]>,
}

/// Aggregate mask for one frame: which views stay unmasked and where.
///
/// Cloning yields a deep, independent copy. Equality compares entries only.
#[derive(Debug, Clone, Default)]
pub struct MaskData {
	entries: IndexMap<ViewId, MaskEntry>,
	/// Per-view claims made by [`MaskData::add_fully_unmasked_for_window`],
	/// released by [`MaskData::remove_for_window`].
	claims: FxHashMap<ViewId, WindowClaims>,
}

impl PartialEq for MaskData {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl MaskData {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, view: ViewId) -> Option<&MaskEntry> {
		self.entries.get(&view)
	}

	pub fn contains_view(&self, view: ViewId) -> bool {
		self.entries.contains_key(&view)
	}

	/// Unmasked rects of a view; empty when the view has no entry.
	pub fn rects_for(&self, view: ViewId) -> &[Rect] {
		self.entries.get(&view).map(|entry| entry.rects.as_slice()).unwrap_or_default()
	}

	/// Views in insertion order.
	pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
		self.entries.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ViewId, &MaskEntry)> {
		self.entries.iter().map(|(view, entry)| (*view, entry))
	}

	/// Replaces the entry for `view`, returning the previous one.
	pub fn insert(&mut self, view: ViewId, entry: MaskEntry) -> Option<MaskEntry> {
		self.entries.insert(view, entry)
	}

	/// Removes the entry for `view`, keeping the order of the remaining views.
	pub fn remove(&mut self, view: ViewId) -> Option<MaskEntry> {
		self.entries.shift_remove(&view)
	}

	/// Returns the entry for `view`, seeding it with the given metadata if absent.
	pub(crate) fn entry_or_insert(&mut self, view: ViewId, mask_type: MaskType, size_modifier: MaskSizeModifier) -> &mut MaskEntry {
		self.entries.entry(view).or_insert_with(|| MaskEntry::new(mask_type, size_modifier))
	}

	/// Fully unmasks the view a window is docked in.
	///
	/// Several windows tabbed into one view each hold a claim on it. Returns
	/// false when the window has no parent view. Undo with
	/// [`MaskData::remove_for_window`].
	pub fn add_fully_unmasked_for_window<H>(&mut self, window: WindowId, host: &H) -> bool
	where
		H: WindowHost + ?Sized,
	{
		let Some(view) = host.window_parent_view(window) else {
			return false;
		};
		let previous = self.entries.insert(view, MaskEntry::fully_unmasked());
		let claims = self.claims.entry(view).or_insert_with(|| WindowClaims {
			original: previous,
			windows: SmallVec::new(),
		});
		if !claims.windows.contains(&window) {
			claims.windows.push(window);
		}
		true
	}

	/// Releases the view a window is docked in.
	///
	/// The view stays fully unmasked while other windows still claim it. Once
	/// the last claim is released, the entry it had before the first
	/// [`MaskData::add_fully_unmasked_for_window`] is put back. A view nobody
	/// claimed loses its entry. Returns false when the window has no parent
	/// view.
	pub fn remove_for_window<H>(&mut self, window: WindowId, host: &H) -> bool
	where
		H: WindowHost + ?Sized,
	{
		let Some(view) = host.window_parent_view(window) else {
			return false;
		};
		let Some(claims) = self.claims.get_mut(&view) else {
			self.entries.shift_remove(&view);
			return true;
		};
		claims.windows.retain(|claimant| *claimant != window);
		if !claims.windows.is_empty() {
			tracing::trace!(?view, remaining = claims.windows.len(), "View still claimed by other windows");
			return true;
		}
		match self.claims.remove(&view).and_then(|claims| claims.original) {
			Some(original) => {
				self.entries.insert(view, original);
			}
			None => {
				self.entries.shift_remove(&view);
			}
		}
		true
	}

	/// Fully unmasks every live tooltip view. Returns how many were added.
	pub fn add_all_tooltip_views<H>(&mut self, host: &H) -> usize
	where
		H: WindowHost + ?Sized,
	{
		let mut added = 0;
		for view in tooltip_views(host) {
			self.entries.insert(view, MaskEntry::fully_unmasked());
			added += 1;
		}
		added
	}

	/// Drops the entries of every live tooltip view. Returns how many were removed.
	pub fn remove_all_tooltip_views<H>(&mut self, host: &H) -> usize
	where
		H: WindowHost + ?Sized,
	{
		tooltip_views(host).filter(|view| self.entries.shift_remove(view).is_some()).count()
	}
}

fn tooltip_views<H>(host: &H) -> impl Iterator<Item = ViewId> + '_
where
	H: WindowHost + ?Sized,
{
	host.live_views().into_iter().filter(|&view| host.is_assignable_to(view, &TypeName::TOOLTIP))
}

//! Locating control rects inside one view's captured instruction stream.
//!
//! Content, style-name, named-control and property selectors take the last
//! matching instruction; object-reference selectors take the first. Existing
//! masking setups depend on that split, so it is kept as is.

use veil_primitives::{Rect, TypeName, ViewId};

use crate::data::{EXPAND_WIDTH_PADDING, MaskSizeModifier};
use crate::host::{InstructionCapture, ObjectResolver, WindowHost, capture_view};
use crate::instruction::{CapturedInstructions, UnifiedKind};
use crate::selector::Selector;

/// Rects found for one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewResolution {
	/// One rect per selector that matched, in selector order.
	pub rects: Vec<Rect>,
	/// Set when a property selector matched through an ancestor path.
	pub ancestor_property_used: bool,
}

/// A rect located for a single selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
	pub rect: Rect,
	pub via_ancestor: bool,
}

impl Located {
	fn exact(rect: Rect) -> Self {
		Self { rect, via_ancestor: false }
	}

	fn ancestor(rect: Rect) -> Self {
		Self { rect, via_ancestor: true }
	}
}

/// Captures `view` and locates every selector in it.
///
/// Views whose window or root went away this frame, and views without
/// selectors, are skipped without capturing. Selectors that match nothing
/// contribute no rect.
pub fn resolve_view<H, C, O>(host: &mut H, capture: &mut C, objects: &O, view: ViewId, size_modifier: MaskSizeModifier, selectors: &[Selector]) -> ViewResolution
where
	H: WindowHost + ?Sized,
	C: InstructionCapture + ?Sized,
	O: ObjectResolver + ?Sized,
{
	let mut resolution = ViewResolution::default();

	if !host.is_window_and_root_valid(view) {
		tracing::debug!(?view, "View lost its window or root; nothing to unmask this frame");
		return resolution;
	}
	if selectors.is_empty() {
		return resolution;
	}

	// Inspectors cache their layout; property rects would be stale.
	if selectors.iter().any(Selector::is_property)
		&& let Some(window) = host.owner_window(view)
		&& host.window_is_of_type(window, &TypeName::INSPECTOR)
	{
		host.invalidate_optimized_gui(window);
	}

	let captured = capture_view(host, capture, view);
	let view_width = host.view_width(view);

	for selector in selectors {
		let Some(located) = captured.locate(selector, objects) else {
			tracing::trace!(?view, ?selector, "Selector matched no instruction");
			continue;
		};
		resolution.ancestor_property_used |= located.via_ancestor;
		let rect = match size_modifier {
			MaskSizeModifier::None => located.rect,
			MaskSizeModifier::ExpandWidthToWindow => located.rect.expand_width_to(view_width, EXPAND_WIDTH_PADDING),
		};
		resolution.rects.push(rect);
	}

	resolution
}

impl CapturedInstructions {
	/// Finds the rect a selector refers to in this capture.
	pub fn locate<O>(&self, selector: &Selector, objects: &O) -> Option<Located>
	where
		O: ObjectResolver + ?Sized,
	{
		match selector {
			Selector::Content(content) => self.draws.iter().rev().find(|draw| draw.content.is_equivalent(content)).map(|draw| Located::exact(draw.rect)),
			Selector::StyleName(name) => self.draws.iter().rev().find(|draw| draw.style_name == *name).map(|draw| Located::exact(draw.rect)),
			Selector::NamedControl(name) => self.named_controls.iter().rev().find(|control| control.name == *name).map(|control| Located::exact(control.rect)),
			Selector::Property { target_type: None, path } => {
				tracing::warn!(%path, "Property selector has no target type; skipping");
				None
			}
			Selector::Property { target_type: Some(target_type), path } => self
				.properties
				.iter()
				.rev()
				.find(|property| property.matches(target_type, path))
				.map(|property| Located::exact(property.rect))
				.or_else(|| self.ancestor_property_rect(target_type, path).map(Located::ancestor)),
			Selector::ObjectReference(None) => {
				tracing::warn!("Object reference selector has no reference; skipping");
				None
			}
			Selector::ObjectReference(Some(reference)) => {
				let Some(name) = objects.resolve_name(*reference) else {
					tracing::trace!(?reference, "Referenced object is gone");
					return None;
				};
				self.draws.iter().find(|draw| draw.content.text_or_empty() == name).map(|draw| Located::exact(draw.rect))
			}
		}
	}

	/// Searches ancestor property paths, nearest first.
	///
	/// The first property drawn at a shortened path seeds the rect, which is
	/// then grown over every styled draw nested inside that property's scope.
	/// Returns `None` once the path has no dot left to strip.
	pub fn ancestor_property_rect(&self, target_type: &TypeName, path: &str) -> Option<Rect> {
		let mut path = path;
		while let Some((parent, _)) = path.rsplit_once('.') {
			path = parent;
			if let Some(seed) = self.properties.iter().find(|property| property.matches(target_type, path)) {
				tracing::trace!(%target_type, %path, "Matched ancestor property");
				return Some(self.property_scope_rect(target_type, path, seed.rect));
			}
		}
		None
	}

	/// Unions `seed` with every styled draw inside the property's scope in the
	/// unified trace. The scope ends at the next entry on the same or a
	/// shallower level.
	fn property_scope_rect(&self, target_type: &TypeName, path: &str, seed: Rect) -> Rect {
		let begin = self.unified.iter().position(|entry| {
			entry.kind == UnifiedKind::PropertyBegin && self.properties.get(entry.index).is_some_and(|property| property.matches(target_type, path))
		});
		let Some(begin) = begin else {
			return seed;
		};
		let level = self.unified[begin].level;

		self.unified[begin + 1..]
			.iter()
			.take_while(|entry| entry.level > level)
			.filter(|entry| entry.kind == UnifiedKind::StyleDraw)
			.filter_map(|entry| self.draws.get(entry.index))
			.fold(seed, |rect, draw| rect.union(&draw.rect))
	}
}

//! One masking pass over a set of unmasked-view descriptors.

use indexmap::IndexMap;
use veil_primitives::ViewId;

use crate::config::MaskingSettings;
use crate::data::{MaskData, MaskSizeModifier};
use crate::error::Result;
use crate::host::{InstructionCapture, ObjectResolver, WindowHost};
use crate::resolve::resolve_view;
use crate::selector::{Selector, UnmaskedView};
use crate::show_queue::WindowShowQueue;
use crate::view_ref::ViewOwnership;

/// Result of a masking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskOutcome {
	pub data: MaskData,
	/// True when at least one property selector only matched an ancestor
	/// property path. Useful to warn authors about imprecise selectors.
	pub ancestor_property_used: bool,
}

/// Borrows the editor collaborators for the duration of one pass.
///
/// Everything runs synchronously on the caller's thread. Windows that need
/// surfacing are pushed to `show_queue`; the host shows them on its next
/// tick via [`WindowShowQueue::tick`].
pub struct MaskingPass<'a, H: ?Sized, C: ?Sized, O: ?Sized> {
	host: &'a mut H,
	capture: &'a mut C,
	objects: &'a O,
	show_queue: &'a mut WindowShowQueue,
}

impl<'a, H, C, O> MaskingPass<'a, H, C, O>
where
	H: WindowHost + ?Sized,
	C: InstructionCapture + ?Sized,
	O: ObjectResolver + ?Sized,
{
	pub fn new(host: &'a mut H, capture: &'a mut C, objects: &'a O, show_queue: &'a mut WindowShowQueue) -> Self {
		Self {
			host,
			capture,
			objects,
			show_queue,
		}
	}

	/// Computes the mask for `descriptors`.
	///
	/// The first descriptor that claims a view decides its mask type and size
	/// modifier; selectors from every descriptor claiming it are resolved and
	/// their rects accumulated.
	///
	/// # Errors
	///
	/// Fails without producing partial data when a descriptor's type does not
	/// resolve, or when one view is owned by two different windows.
	pub fn produce(&mut self, descriptors: &[UnmaskedView]) -> Result<MaskOutcome> {
		let mut data = MaskData::new();
		let mut ownership = ViewOwnership::default();
		let mut pending: IndexMap<ViewId, Vec<Selector>> = IndexMap::new();
		let mut live_views = self.host.live_views();

		for descriptor in descriptors {
			let views = descriptor.view.matching_views(&*self.host, &mut live_views, &mut ownership, &mut *self.show_queue)?;
			for view in views {
				data.entry_or_insert(view, descriptor.mask_type, descriptor.size_modifier);
				pending.entry(view).or_default().extend(descriptor.controls.iter().cloned());
			}
		}

		ownership.validate()?;

		let mut ancestor_property_used = false;
		for (view, selectors) in &pending {
			if selectors.is_empty() {
				continue;
			}
			let size_modifier = data.get(*view).map_or(MaskSizeModifier::None, |entry| entry.size_modifier);
			let resolution = resolve_view(&mut *self.host, &mut *self.capture, self.objects, *view, size_modifier, selectors);
			ancestor_property_used |= resolution.ancestor_property_used;

			let entry = data.entry_or_insert(*view, Default::default(), size_modifier);
			entry.rects.extend(resolution.rects);
		}

		tracing::debug!(views = data.len(), ancestor_property_used, "Masking pass complete");
		Ok(MaskOutcome { data, ancestor_property_used })
	}

	/// Computes the mask described by a settings document.
	///
	/// Disabled settings produce an empty mask.
	pub fn produce_from_settings(&mut self, settings: &MaskingSettings) -> Result<MaskOutcome> {
		self.produce(&settings.unmasked_views())
	}
}

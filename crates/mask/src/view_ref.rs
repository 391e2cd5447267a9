//! Resolution of view references to the views that are live this frame.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use veil_primitives::{TypeName, ViewId, WindowId};

use crate::error::{MaskError, Result};
use crate::host::WindowHost;
use crate::show_queue::WindowShowQueue;

/// Which views a descriptor targets.
///
/// References are resolved against the live view set on every pass; the
/// result is never cached because views come and go between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewReference {
	/// Every live view assignable to this view type.
	View(TypeName),
	/// The view hosting an editor window of `primary` type, or of the first
	/// resolvable alternate.
	EditorWindow { primary: TypeName, alternates: Vec<TypeName> },
}

impl ViewReference {
	pub fn editor_window(primary: impl Into<TypeName>) -> Self {
		Self::EditorWindow {
			primary: primary.into(),
			alternates: Vec::new(),
		}
	}

	/// Returns the views this reference selects.
	///
	/// Editor windows are queued on `show_queue` rather than shown here: a
	/// pass may run while that very window is being torn down. The window's
	/// parent view is appended to `live_views` when missing, and every
	/// matched view is recorded in `ownership`.
	pub fn matching_views<H>(&self, host: &H, live_views: &mut Vec<ViewId>, ownership: &mut ViewOwnership, show_queue: &mut WindowShowQueue) -> Result<IndexSet<ViewId>>
	where
		H: WindowHost + ?Sized,
	{
		let mut matched = IndexSet::new();

		match self {
			ViewReference::EditorWindow { primary, alternates } => {
				let window_type = host
					.resolve_window_type(primary)
					.or_else(|| alternates.iter().find_map(|alt| host.resolve_window_type(alt)))
					.ok_or_else(|| MaskError::UnresolvedWindowType {
						primary: primary.clone(),
						alternates: alternates.clone(),
					})?;

				// Only one instance is expected in practice, so the first is taken.
				let Some(window) = host.windows_of_type(&window_type).into_iter().next() else {
					tracing::debug!(%window_type, "No live window instance");
					return Ok(matched);
				};
				let Some(parent) = host.window_parent_view(window) else {
					tracing::debug!(%window_type, ?window, "Window has no parent view yet");
					return Ok(matched);
				};

				show_queue.enqueue(window);

				if !live_views.contains(&parent) {
					live_views.push(parent);
				}

				for &view in live_views.iter() {
					if host.is_assignable_to(view, &window_type) {
						matched.insert(view);
						ownership.record(view, window, &window_type);
					}
				}
			}
			ViewReference::View(view_type) => {
				let view_type = host.resolve_view_type(view_type).ok_or_else(|| MaskError::UnresolvedViewType(view_type.clone()))?;

				matched.extend(live_views.iter().copied().filter(|&view| host.is_assignable_to(view, &view_type)));
			}
		}

		Ok(matched)
	}
}

/// Accumulates which windows claim which views across a pass.
#[derive(Debug, Default, Clone)]
pub struct ViewOwnership {
	owners: FxHashMap<ViewId, SmallVec<[(WindowId, TypeName); 1]>>,
}

impl ViewOwnership {
	/// Records `window` as an owner of `view`. Repeated records are ignored.
	pub fn record(&mut self, view: ViewId, window: WindowId, window_type: &TypeName) {
		let owners = self.owners.entry(view).or_default();
		if !owners.iter().any(|(owner, _)| *owner == window) {
			owners.push((window, window_type.clone()));
		}
	}

	pub fn owners(&self, view: ViewId) -> &[(WindowId, TypeName)] {
		self.owners.get(&view).map(|owners| owners.as_slice()).unwrap_or_default()
	}

	/// Fails on the lowest view claimed by more than one distinct window.
	pub fn validate(&self) -> Result<()> {
		let mut views: Vec<_> = self.owners.iter().filter(|(_, owners)| owners.len() > 1).collect();
		views.sort_by_key(|(view, _)| **view);

		match views.first() {
			Some((view, owners)) => Err(MaskError::AmbiguousDocking {
				view: **view,
				first: owners[0].1.clone(),
				second: owners[1].1.clone(),
			}),
			None => Ok(()),
		}
	}
}

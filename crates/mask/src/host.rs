//! Narrow interfaces onto the editor.
//!
//! The masking pass never owns views or windows. It asks the host about the
//! live hierarchy, asks the capture facility for instruction traces, and asks
//! the object resolver for scene object names.

use veil_primitives::{ObjectRef, TypeName, ViewId, WindowId};

use crate::instruction::{CapturedInstructions, DrawInstruction, NamedControlInstruction, PropertyInstruction, UnifiedInstruction};

/// Window and view management owned by the editor.
pub trait WindowHost {
	/// Returns the canonical view type for `name`, if the editor knows it.
	fn resolve_view_type(&self, name: &TypeName) -> Option<TypeName>;

	/// Returns the canonical editor window type for `name`, if the editor knows it.
	fn resolve_window_type(&self, name: &TypeName) -> Option<TypeName>;

	/// All live views in enumeration order.
	fn live_views(&self) -> Vec<ViewId>;

	/// Live window instances of the given type, in no particular order.
	fn windows_of_type(&self, window_type: &TypeName) -> Vec<WindowId>;

	/// The view a window is docked in. `None` while the window is not on screen yet.
	fn window_parent_view(&self, window: WindowId) -> Option<ViewId>;

	/// The window currently hosted by a view, if any.
	fn owner_window(&self, view: ViewId) -> Option<WindowId>;

	/// Whether the view (or the window it hosts) is assignable to `ty`.
	fn is_assignable_to(&self, view: ViewId, ty: &TypeName) -> bool;

	/// Whether the window instance is assignable to `ty`.
	fn window_is_of_type(&self, window: WindowId, ty: &TypeName) -> bool;

	/// False when the view lost its native window or root this frame, e.g.
	/// because another view was maximized.
	fn is_window_and_root_valid(&self, view: ViewId) -> bool;

	/// Redraws the view synchronously so a capture reflects current layout.
	fn repaint_immediately(&mut self, view: ViewId);

	fn view_width(&self, view: ViewId) -> f32;

	fn is_window_alive(&self, window: WindowId) -> bool;

	/// Makes the window visible.
	fn show_window(&mut self, window: WindowId);

	/// Drops cached/optimized GUI state so the next repaint re-lays controls out.
	fn invalidate_optimized_gui(&mut self, window: WindowId);
}

/// GUI debug capture facility. Holds at most one session at a time.
pub trait InstructionCapture {
	fn begin_capture(&mut self, view: ViewId);
	fn draw_instructions(&self) -> Vec<DrawInstruction>;
	fn named_control_instructions(&self) -> Vec<NamedControlInstruction>;
	fn property_instructions(&self) -> Vec<PropertyInstruction>;
	fn unified_instructions(&self) -> Vec<UnifiedInstruction>;
	fn end_capture(&mut self);
}

/// Resolves non-owning scene object references.
pub trait ObjectResolver {
	/// Name of the referenced object, or `None` if it no longer exists.
	fn resolve_name(&self, reference: ObjectRef) -> Option<String>;
}

/// Captures a fresh instruction trace for `view` and closes the session.
///
/// The view is repainted after the session opens so the trace reflects the
/// current frame rather than a cached one.
pub fn capture_view<H, C>(host: &mut H, capture: &mut C, view: ViewId) -> CapturedInstructions
where
	H: WindowHost + ?Sized,
	C: InstructionCapture + ?Sized,
{
	capture.begin_capture(view);
	host.repaint_immediately(view);
	let captured = CapturedInstructions {
		draws: capture.draw_instructions(),
		named_controls: capture.named_control_instructions(),
		properties: capture.property_instructions(),
		unified: capture.unified_instructions(),
	};
	capture.end_capture();
	tracing::trace!(
		?view,
		draws = captured.draws.len(),
		named = captured.named_controls.len(),
		properties = captured.properties.len(),
		unified = captured.unified.len(),
		"Captured view instructions"
	);
	captured
}

//! In-memory editor collaborators for tests.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use veil_primitives::{ObjectRef, Rect, TypeName, ViewId, WindowId};

use crate::host::{InstructionCapture, ObjectResolver, WindowHost};
use crate::instruction::{CapturedInstructions, DrawInstruction, GuiContent, NamedControlInstruction, PropertyInstruction, UnifiedInstruction, UnifiedKind};

/// Width given to views unless a test overrides it.
pub const DEFAULT_VIEW_WIDTH: f32 = 400.0;

#[derive(Debug, Clone)]
struct FakeView {
	types: Vec<TypeName>,
	owner: Option<WindowId>,
	width: f32,
	valid: bool,
	listed: bool,
}

#[derive(Debug, Clone)]
struct FakeWindow {
	types: Vec<TypeName>,
	parent: Option<ViewId>,
	alive: bool,
}

/// Fake window/view hierarchy recording every side effect.
#[derive(Debug, Default)]
pub struct FakeHost {
	view_types: Vec<TypeName>,
	window_types: Vec<TypeName>,
	views: IndexMap<ViewId, FakeView>,
	windows: IndexMap<WindowId, FakeWindow>,
	next_id: u64,
	shown: Vec<WindowId>,
	repainted: Vec<ViewId>,
	invalidated: Vec<WindowId>,
}

impl FakeHost {
	#[must_use]
	pub fn new() -> Self {
		Self {
			next_id: 1,
			..Self::default()
		}
	}

	fn next_id(&mut self) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		id
	}

	/// Makes `name` resolvable as a view type.
	pub fn register_view_type(&mut self, name: impl Into<TypeName>) {
		let name = name.into();
		if !self.view_types.contains(&name) {
			self.view_types.push(name);
		}
	}

	/// Makes `name` resolvable as an editor window type.
	pub fn register_window_type(&mut self, name: impl Into<TypeName>) {
		let name = name.into();
		if !self.window_types.contains(&name) {
			self.window_types.push(name);
		}
	}

	/// Adds a live, enumerated view assignable to `types`. View types are registered.
	pub fn add_view<I, T>(&mut self, types: I) -> ViewId
	where
		I: IntoIterator<Item = T>,
		T: Into<TypeName>,
	{
		let types: Vec<TypeName> = types.into_iter().map(Into::into).collect();
		for ty in &types {
			self.register_view_type(ty.clone());
		}
		let id = ViewId(self.next_id());
		self.views.insert(
			id,
			FakeView {
				types,
				owner: None,
				width: DEFAULT_VIEW_WIDTH,
				valid: true,
				listed: true,
			},
		);
		id
	}

	/// Adds a live window of `window_type`, docked in `parent` when given.
	///
	/// The window type is registered, and the parent view becomes assignable
	/// to it.
	pub fn add_window(&mut self, window_type: impl Into<TypeName>, parent: Option<ViewId>) -> WindowId {
		let window_type = window_type.into();
		self.register_window_type(window_type.clone());
		let id = WindowId(self.next_id());
		if let Some(view) = parent.and_then(|view| self.views.get_mut(&view)) {
			view.owner = Some(id);
		}
		self.windows.insert(
			id,
			FakeWindow {
				types: vec![window_type],
				parent,
				alive: true,
			},
		);
		id
	}

	/// Adds an extra category tag to a window, e.g. [`TypeName::INSPECTOR`].
	pub fn tag_window(&mut self, window: WindowId, ty: impl Into<TypeName>) {
		if let Some(entry) = self.windows.get_mut(&window) {
			entry.types.push(ty.into());
		}
	}

	/// Docks `window` into another view.
	pub fn dock_window(&mut self, window: WindowId, view: ViewId) {
		if let Some(entry) = self.windows.get_mut(&window) {
			entry.parent = Some(view);
		}
		if let Some(entry) = self.views.get_mut(&view) {
			entry.owner = Some(window);
		}
	}

	pub fn destroy_window(&mut self, window: WindowId) {
		if let Some(entry) = self.windows.get_mut(&window) {
			entry.alive = false;
		}
	}

	/// Excludes a view from [`WindowHost::live_views`] while keeping it alive.
	pub fn unlist_view(&mut self, view: ViewId) {
		if let Some(entry) = self.views.get_mut(&view) {
			entry.listed = false;
		}
	}

	/// Marks the view's window or root as invalid this frame.
	pub fn invalidate_root(&mut self, view: ViewId) {
		if let Some(entry) = self.views.get_mut(&view) {
			entry.valid = false;
		}
	}

	pub fn set_view_width(&mut self, view: ViewId, width: f32) {
		if let Some(entry) = self.views.get_mut(&view) {
			entry.width = width;
		}
	}

	pub fn shown_windows(&self) -> &[WindowId] {
		&self.shown
	}

	pub fn repainted_views(&self) -> &[ViewId] {
		&self.repainted
	}

	pub fn invalidated_windows(&self) -> &[WindowId] {
		&self.invalidated
	}
}

impl WindowHost for FakeHost {
	fn resolve_view_type(&self, name: &TypeName) -> Option<TypeName> {
		self.view_types.iter().find(|ty| *ty == name).cloned()
	}

	fn resolve_window_type(&self, name: &TypeName) -> Option<TypeName> {
		self.window_types.iter().find(|ty| *ty == name).cloned()
	}

	fn live_views(&self) -> Vec<ViewId> {
		self.views.iter().filter(|(_, view)| view.listed).map(|(id, _)| *id).collect()
	}

	fn windows_of_type(&self, window_type: &TypeName) -> Vec<WindowId> {
		self.windows
			.iter()
			.filter(|(_, window)| window.alive && window.types.contains(window_type))
			.map(|(id, _)| *id)
			.collect()
	}

	fn window_parent_view(&self, window: WindowId) -> Option<ViewId> {
		self.windows.get(&window).and_then(|window| window.parent)
	}

	fn owner_window(&self, view: ViewId) -> Option<WindowId> {
		self.views.get(&view).and_then(|view| view.owner)
	}

	fn is_assignable_to(&self, view: ViewId, ty: &TypeName) -> bool {
		let Some(entry) = self.views.get(&view) else {
			return false;
		};
		// A dock view is assignable to every window type tabbed into it.
		entry.types.contains(ty) || self.windows.values().any(|window| window.alive && window.parent == Some(view) && window.types.contains(ty))
	}

	fn window_is_of_type(&self, window: WindowId, ty: &TypeName) -> bool {
		self.windows.get(&window).is_some_and(|window| window.types.contains(ty))
	}

	fn is_window_and_root_valid(&self, view: ViewId) -> bool {
		self.views.get(&view).is_some_and(|view| view.valid)
	}

	fn repaint_immediately(&mut self, view: ViewId) {
		self.repainted.push(view);
	}

	fn view_width(&self, view: ViewId) -> f32 {
		self.views.get(&view).map_or(0.0, |view| view.width)
	}

	fn is_window_alive(&self, window: WindowId) -> bool {
		self.windows.get(&window).is_some_and(|window| window.alive)
	}

	fn show_window(&mut self, window: WindowId) {
		self.shown.push(window);
	}

	fn invalidate_optimized_gui(&mut self, window: WindowId) {
		self.invalidated.push(window);
	}
}

/// Session lifecycle event recorded by [`FakeCapture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
	Begin(ViewId),
	End,
}

/// Fake capture facility replaying canned traces per view.
#[derive(Debug, Default)]
pub struct FakeCapture {
	traces: FxHashMap<ViewId, CapturedInstructions>,
	active: Option<ViewId>,
	events: Vec<CaptureEvent>,
	overlapping_sessions: usize,
}

impl FakeCapture {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_trace(&mut self, view: ViewId, trace: CapturedInstructions) {
		self.traces.insert(view, trace);
	}

	pub fn events(&self) -> &[CaptureEvent] {
		&self.events
	}

	/// Number of sessions begun while another one was still open.
	pub fn overlapping_sessions(&self) -> usize {
		self.overlapping_sessions
	}

	fn active_trace(&self) -> Option<&CapturedInstructions> {
		self.active.and_then(|view| self.traces.get(&view))
	}
}

impl InstructionCapture for FakeCapture {
	fn begin_capture(&mut self, view: ViewId) {
		if self.active.is_some() {
			self.overlapping_sessions += 1;
		}
		self.active = Some(view);
		self.events.push(CaptureEvent::Begin(view));
	}

	fn draw_instructions(&self) -> Vec<DrawInstruction> {
		self.active_trace().map(|trace| trace.draws.clone()).unwrap_or_default()
	}

	fn named_control_instructions(&self) -> Vec<NamedControlInstruction> {
		self.active_trace().map(|trace| trace.named_controls.clone()).unwrap_or_default()
	}

	fn property_instructions(&self) -> Vec<PropertyInstruction> {
		self.active_trace().map(|trace| trace.properties.clone()).unwrap_or_default()
	}

	fn unified_instructions(&self) -> Vec<UnifiedInstruction> {
		self.active_trace().map(|trace| trace.unified.clone()).unwrap_or_default()
	}

	fn end_capture(&mut self) {
		self.active = None;
		self.events.push(CaptureEvent::End);
	}
}

/// Fake scene object names keyed by reference.
#[derive(Debug, Default)]
pub struct FakeObjects {
	names: FxHashMap<ObjectRef, String>,
}

impl FakeObjects {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, reference: ObjectRef, name: impl Into<String>) {
		self.names.insert(reference, name.into());
	}
}

impl ObjectResolver for FakeObjects {
	fn resolve_name(&self, reference: ObjectRef) -> Option<String> {
		self.names.get(&reference).cloned()
	}
}

/// Builds a capture trace the way a repaint emits it: typed records plus the
/// level-annotated unified trace.
#[derive(Debug, Default)]
pub struct TraceBuilder {
	trace: CapturedInstructions,
	open_properties: Vec<usize>,
}

impl TraceBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	fn level(&self) -> u32 {
		self.open_properties.len() as u32
	}

	/// Styled draw of `content` at the current nesting level.
	#[must_use]
	pub fn draw_content(mut self, content: GuiContent, style_name: &str, rect: Rect) -> Self {
		let index = self.trace.draws.len();
		self.trace.draws.push(DrawInstruction {
			content,
			style_name: style_name.to_string(),
			rect,
		});
		self.trace.unified.push(UnifiedInstruction {
			kind: UnifiedKind::StyleDraw,
			level: self.level(),
			index,
		});
		self
	}

	/// Styled draw of plain text at the current nesting level.
	#[must_use]
	pub fn draw(self, text: &str, style_name: &str, rect: Rect) -> Self {
		self.draw_content(GuiContent::text(text), style_name, rect)
	}

	#[must_use]
	pub fn named_control(mut self, name: &str, rect: Rect) -> Self {
		self.trace.named_controls.push(NamedControlInstruction { name: name.to_string(), rect });
		self.trace.unified.push(UnifiedInstruction {
			kind: UnifiedKind::Other,
			level: self.level(),
			index: 0,
		});
		self
	}

	/// Opens a property scope; draws until the matching [`TraceBuilder::end_property`] nest inside it.
	#[must_use]
	pub fn begin_property(mut self, target_type: &str, path: &str, rect: Rect) -> Self {
		let index = self.trace.properties.len();
		self.trace.properties.push(PropertyInstruction {
			target_type: TypeName::new(target_type),
			path: path.to_string(),
			rect,
		});
		self.trace.unified.push(UnifiedInstruction {
			kind: UnifiedKind::PropertyBegin,
			level: self.level(),
			index,
		});
		self.open_properties.push(index);
		self
	}

	#[must_use]
	pub fn end_property(mut self) -> Self {
		if let Some(index) = self.open_properties.pop() {
			self.trace.unified.push(UnifiedInstruction {
				kind: UnifiedKind::PropertyEnd,
				level: self.level(),
				index,
			});
		}
		self
	}

	#[must_use]
	pub fn build(self) -> CapturedInstructions {
		self.trace
	}
}

//! Common fixtures for masking integration tests.

use veil_mask::test_helpers::{FakeCapture, FakeHost, FakeObjects, TraceBuilder};
use veil_mask::{MaskOutcome, MaskingPass, Rect, Result, TypeName, UnmaskedView, ViewId, WindowId, WindowShowQueue};

/// Toolbar plus a dock holding the inspector, next to a scene view that
/// no descriptor targets.
pub struct Editor {
	pub host: FakeHost,
	pub capture: FakeCapture,
	pub objects: FakeObjects,
	pub show_queue: WindowShowQueue,
	pub toolbar: ViewId,
	pub dock: ViewId,
	pub scene: ViewId,
	pub inspector: WindowId,
}

impl Editor {
	pub fn new() -> Self {
		let _ = tracing_subscriber::fmt::try_init();

		let mut host = FakeHost::new();
		let toolbar = host.add_view(["Toolbar"]);
		let dock = host.add_view(["DockArea"]);
		let scene = host.add_view(["SceneView"]);
		let inspector = host.add_window(TypeName::INSPECTOR, Some(dock));
		host.set_view_width(dock, 320.0);

		let mut capture = FakeCapture::new();
		capture.set_trace(
			toolbar,
			TraceBuilder::new()
				.draw("", "CommandLeft", Rect::new(400.0, 4.0, 32.0, 20.0))
				.named_control("ToolbarSearchField", Rect::new(800.0, 4.0, 160.0, 20.0))
				.build(),
		);
		capture.set_trace(
			dock,
			TraceBuilder::new()
				.draw("Main Camera", "boldLabel", Rect::new(40.0, 4.0, 120.0, 18.0))
				.begin_property("Transform", "m_LocalPosition", Rect::new(0.0, 40.0, 320.0, 18.0))
				.draw("X", "textField", Rect::new(120.0, 40.0, 60.0, 18.0))
				.draw("Y", "textField", Rect::new(190.0, 40.0, 60.0, 18.0))
				.end_property()
				.draw("Add Component", "AC Button", Rect::new(80.0, 300.0, 160.0, 24.0))
				.build(),
		);

		Self {
			host,
			capture,
			objects: FakeObjects::new(),
			show_queue: WindowShowQueue::new(),
			toolbar,
			dock,
			scene,
			inspector,
		}
	}

	/// Runs one masking pass.
	pub fn produce(&mut self, descriptors: &[UnmaskedView]) -> Result<MaskOutcome> {
		MaskingPass::new(&mut self.host, &mut self.capture, &self.objects, &mut self.show_queue).produce(descriptors)
	}

	/// Ends the frame: drains queued window activations.
	pub fn tick(&mut self) -> usize {
		self.show_queue.tick(&mut self.host)
	}
}

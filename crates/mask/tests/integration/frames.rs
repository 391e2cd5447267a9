use pretty_assertions::assert_eq;
use veil_mask::test_helpers::CaptureEvent;
use veil_mask::{GuiContent, MaskEntry, MaskSizeModifier, ObjectRef, Rect, Selector, TypeName, UnmaskedView};

use crate::common::Editor;

fn tutorial_step() -> Vec<UnmaskedView> {
	vec![
		UnmaskedView::from_view("Toolbar").with_control(Selector::named_control("ToolbarSearchField")),
		UnmaskedView::from_editor_window(TypeName::INSPECTOR)
			.with_size_modifier(MaskSizeModifier::ExpandWidthToWindow)
			.with_control(Selector::property("Transform", "m_LocalPosition.y"))
			.with_control(Selector::content(GuiContent::text("Add Component"))),
	]
}

#[test]
fn tutorial_step_unmasks_toolbar_field_and_inspector_rows() {
	let mut editor = Editor::new();
	let outcome = editor.produce(&tutorial_step()).unwrap();

	assert!(outcome.ancestor_property_used);
	assert_eq!(outcome.data.views().collect::<Vec<_>>(), vec![editor.toolbar, editor.dock]);
	assert_eq!(outcome.data.rects_for(editor.toolbar), &[Rect::new(800.0, 4.0, 160.0, 20.0)]);
	assert_eq!(
		outcome.data.rects_for(editor.dock),
		&[Rect::new(5.0, 40.0, 310.0, 18.0), Rect::new(5.0, 300.0, 310.0, 24.0)]
	);
	assert!(!outcome.data.contains_view(editor.scene));
	assert_eq!(editor.host.invalidated_windows(), &[editor.inspector]);
}

#[test]
fn capture_sessions_never_overlap() {
	let mut editor = Editor::new();
	editor.produce(&tutorial_step()).unwrap();

	assert_eq!(editor.capture.overlapping_sessions(), 0);
	assert_eq!(
		editor.capture.events(),
		&[CaptureEvent::Begin(editor.toolbar), CaptureEvent::End, CaptureEvent::Begin(editor.dock), CaptureEvent::End]
	);
}

#[test]
fn queued_inspector_is_shown_on_the_following_tick() {
	let mut editor = Editor::new();
	editor.produce(&tutorial_step()).unwrap();
	assert!(editor.host.shown_windows().is_empty());

	assert_eq!(editor.tick(), 1);
	assert_eq!(editor.host.shown_windows(), &[editor.inspector]);
	assert_eq!(editor.tick(), 0);
}

#[test]
fn inspector_closed_before_tick_is_not_shown() {
	let mut editor = Editor::new();
	editor.produce(&tutorial_step()).unwrap();
	editor.host.destroy_window(editor.inspector);

	assert_eq!(editor.tick(), 0);
	assert!(editor.host.shown_windows().is_empty());
}

#[test]
fn maximized_view_degrades_to_fewer_rects() {
	let mut editor = Editor::new();
	editor.host.invalidate_root(editor.dock);

	let outcome = editor.produce(&tutorial_step()).unwrap();
	assert_eq!(outcome.data.get(editor.dock).map(|entry| entry.rects.len()), Some(0));
	assert_eq!(outcome.data.rects_for(editor.toolbar).len(), 1);
	assert!(!outcome.ancestor_property_used);
}

#[test]
fn closed_window_selects_nothing_next_frame() {
	let mut editor = Editor::new();
	editor.host.destroy_window(editor.inspector);

	let outcome = editor.produce(&tutorial_step()).unwrap();
	assert!(!outcome.data.contains_view(editor.dock));
	assert!(editor.show_queue.is_empty());
}

#[test]
fn object_reference_matches_by_object_name() {
	let mut editor = Editor::new();
	editor.objects.insert(ObjectRef(42), "Main Camera");

	let outcome = editor
		.produce(&[UnmaskedView::from_editor_window(TypeName::INSPECTOR)
			.with_control(Selector::object(ObjectRef(42)))
			.with_control(Selector::object(ObjectRef(7)))])
		.unwrap();
	assert_eq!(outcome.data.rects_for(editor.dock), &[Rect::new(40.0, 4.0, 120.0, 18.0)]);
}

#[test]
fn overlay_helpers_round_trip_on_a_produced_mask() {
	let mut editor = Editor::new();
	let tooltip = editor.host.add_view([TypeName::TOOLTIP]);
	let console_dock = editor.host.add_view(["DockArea"]);
	let console = editor.host.add_window("ConsoleWindow", Some(console_dock));

	let outcome = editor.produce(&tutorial_step()).unwrap();
	let mut data = outcome.data.clone();

	data.add_all_tooltip_views(&editor.host);
	data.add_fully_unmasked_for_window(console, &editor.host);
	assert_eq!(data.get(tooltip), Some(&MaskEntry::fully_unmasked()));
	assert_eq!(data.get(console_dock), Some(&MaskEntry::fully_unmasked()));
	assert!(!outcome.data.contains_view(tooltip));

	data.remove_for_window(console, &editor.host);
	data.remove_all_tooltip_views(&editor.host);
	assert_eq!(data, outcome.data);
}

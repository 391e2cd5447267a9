use pretty_assertions::assert_eq;
use veil_mask::{MaskError, MaskType, MaskingPass, MaskingSettings, Rect};

use crate::common::Editor;

const STEP: &str = r#"
	[[unmasked_views]]
	mask_type = "block_interactions"
	view = { kind = "view", view_type = "Toolbar" }

	[[unmasked_views.controls]]
	mode = "style_name"
	name = "CommandLeft"

	[[unmasked_views.controls]]
	mode = "gui_style_path"

	[[unmasked_views]]
	view = { kind = "editor_window", window_type = "LegacyInspector", alternates = ["InspectorWindow"] }

	[[unmasked_views.controls]]
	mode = "property"
	property_path = "m_LocalPosition"
"#;

#[test]
fn settings_document_drives_a_pass() {
	let mut editor = Editor::new();
	let settings = MaskingSettings::from_toml_str(STEP).unwrap();

	let outcome = MaskingPass::new(&mut editor.host, &mut editor.capture, &editor.objects, &mut editor.show_queue)
		.produce_from_settings(&settings)
		.unwrap();

	let toolbar = outcome.data.get(editor.toolbar).unwrap();
	assert_eq!(toolbar.mask_type, MaskType::BlockInteractions);
	assert_eq!(toolbar.rects, vec![Rect::new(400.0, 4.0, 32.0, 20.0)]);

	// The property control has no target type and is skipped.
	assert_eq!(outcome.data.rects_for(editor.dock), &[] as &[Rect]);
	assert!(outcome.data.contains_view(editor.dock));
}

#[test]
fn disabled_settings_unmask_nothing() {
	let mut editor = Editor::new();
	let settings = MaskingSettings::from_toml_str(&format!("enabled = false\n{STEP}")).unwrap();

	let outcome = MaskingPass::new(&mut editor.host, &mut editor.capture, &editor.objects, &mut editor.show_queue)
		.produce_from_settings(&settings)
		.unwrap();
	assert!(outcome.data.is_empty());
}

#[test]
fn unknown_window_types_in_settings_fail_the_pass() {
	let mut editor = Editor::new();
	let settings = MaskingSettings::from_toml_str(
		r#"
		[[unmasked_views]]
		view = { kind = "editor_window", window_type = "AnimationWindow" }
		"#,
	)
	.unwrap();

	let err = MaskingPass::new(&mut editor.host, &mut editor.capture, &editor.objects, &mut editor.show_queue)
		.produce_from_settings(&settings)
		.unwrap_err();
	assert!(matches!(err, MaskError::UnresolvedWindowType { .. }));
}

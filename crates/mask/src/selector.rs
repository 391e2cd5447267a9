//! Control selectors and the descriptors that group them per view.

use veil_primitives::{ObjectRef, TypeName};

use crate::data::{MaskSizeModifier, MaskType};
use crate::instruction::GuiContent;
use crate::view_ref::ViewReference;

/// Identifies one GUI control inside a view.
///
/// Selectors are plain data and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
	/// Draw instruction with equivalent visible content. Last match wins.
	Content(GuiContent),
	/// Draw instruction with this style name. Last match wins.
	StyleName(String),
	/// Control registered under this control name. Last match wins.
	NamedControl(String),
	/// Serialized-property field. Last exact match wins; falls back to the
	/// nearest ancestor property path when no exact match exists.
	///
	/// `target_type` is `None` when the descriptor never set one; such
	/// selectors are skipped with a warning.
	Property { target_type: Option<TypeName>, path: String },
	/// Draw instruction whose text equals the referenced object's name.
	/// First match wins. `None` is an unset reference and is skipped with a
	/// warning.
	ObjectReference(Option<ObjectRef>),
}

impl Selector {
	pub fn content(content: GuiContent) -> Self {
		Self::Content(content)
	}

	pub fn style_name(name: impl Into<String>) -> Self {
		Self::StyleName(name.into())
	}

	pub fn named_control(name: impl Into<String>) -> Self {
		Self::NamedControl(name.into())
	}

	pub fn property(target_type: impl Into<TypeName>, path: impl Into<String>) -> Self {
		Self::Property {
			target_type: Some(target_type.into()),
			path: path.into(),
		}
	}

	pub fn object(reference: ObjectRef) -> Self {
		Self::ObjectReference(Some(reference))
	}

	pub fn is_property(&self) -> bool {
		matches!(self, Self::Property { .. })
	}
}

/// Declares one view (or editor window) to keep unmasked and the controls
/// inside it that stay interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmaskedView {
	pub view: ViewReference,
	pub mask_type: MaskType,
	pub size_modifier: MaskSizeModifier,
	/// Empty means the whole view is unmasked without rect restriction.
	pub controls: Vec<Selector>,
}

impl UnmaskedView {
	/// Unmasks the whole view of the given type.
	pub fn from_view(view_type: impl Into<TypeName>) -> Self {
		Self::new(ViewReference::View(view_type.into()))
	}

	/// Unmasks the view hosting the given editor window type.
	pub fn from_editor_window(window_type: impl Into<TypeName>) -> Self {
		Self::new(ViewReference::editor_window(window_type))
	}

	fn new(view: ViewReference) -> Self {
		Self {
			view,
			mask_type: MaskType::FullyUnmasked,
			size_modifier: MaskSizeModifier::None,
			controls: Vec::new(),
		}
	}

	/// Adds alternate window types tried when the primary does not resolve.
	///
	/// Has no effect on view-type descriptors.
	pub fn with_alternates<I, T>(mut self, alternates: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<TypeName>,
	{
		if let ViewReference::EditorWindow { alternates: existing, .. } = &mut self.view {
			existing.extend(alternates.into_iter().map(Into::into));
		}
		self
	}

	pub fn with_mask_type(mut self, mask_type: MaskType) -> Self {
		self.mask_type = mask_type;
		self
	}

	pub fn with_size_modifier(mut self, size_modifier: MaskSizeModifier) -> Self {
		self.size_modifier = size_modifier;
		self
	}

	pub fn with_control(mut self, selector: Selector) -> Self {
		self.controls.push(selector);
		self
	}
}

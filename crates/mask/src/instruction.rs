//! Instruction records produced by the host's GUI debug capture.
//!
//! A capture is a flat trace of one repaint of a single view. The typed
//! lists are referenced from the unified trace by index, and
//! `PropertyBegin`/`PropertyEnd` entries bracket nested property scopes.

use serde::{Deserialize, Serialize};
use veil_primitives::{ImageId, Rect, TypeName};

/// Visible content of a GUI control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiContent {
	#[serde(default)]
	pub text: Option<String>,
	#[serde(default)]
	pub tooltip: Option<String>,
	#[serde(default)]
	pub image: Option<ImageId>,
}

impl GuiContent {
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			text: Some(text.into()),
			..Self::default()
		}
	}

	/// Returns true if both contents would render the same control.
	///
	/// Unset and empty text (or tooltip) are interchangeable. Images match
	/// only by identity.
	pub fn is_equivalent(&self, other: &GuiContent) -> bool {
		fn normalized(value: &Option<String>) -> &str {
			value.as_deref().unwrap_or_default()
		}

		normalized(&self.text) == normalized(&other.text) && normalized(&self.tooltip) == normalized(&other.tooltip) && self.image == other.image
	}

	/// Text as drawn, with unset text treated as empty.
	pub fn text_or_empty(&self) -> &str {
		self.text.as_deref().unwrap_or_default()
	}
}

/// One styled draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
	pub content: GuiContent,
	pub style_name: String,
	pub rect: Rect,
}

/// One control registered under an explicit control name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedControlInstruction {
	pub name: String,
	pub rect: Rect,
}

/// One serialized-property field drawn for a target object type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInstruction {
	pub target_type: TypeName,
	pub path: String,
	pub rect: Rect,
}

impl PropertyInstruction {
	pub fn matches(&self, target_type: &TypeName, path: &str) -> bool {
		self.target_type == *target_type && self.path == path
	}
}

/// Kind of a unified trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnifiedKind {
	/// Opens a property scope; `index` points into the property list.
	PropertyBegin,
	/// Closes a property scope; `index` points into the property list.
	PropertyEnd,
	/// Styled draw; `index` points into the draw list.
	StyleDraw,
	/// Layout groups, clips and other instructions without typed payload.
	Other,
}

/// Entry in the level-annotated trace of one capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedInstruction {
	pub kind: UnifiedKind,
	pub level: u32,
	pub index: usize,
}

/// All instruction lists drained from one finished capture session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedInstructions {
	pub draws: Vec<DrawInstruction>,
	pub named_controls: Vec<NamedControlInstruction>,
	pub properties: Vec<PropertyInstruction>,
	pub unified: Vec<UnifiedInstruction>,
}

//! Masking settings documents.
//!
//! Settings are authored elsewhere and loaded from TOML. Control entries keep
//! the loose `mode` + fields shape only until they are converted into
//! [`Selector`]s; unsupported modes are dropped with a warning at that point.
//!
//! ```toml
//! enabled = true
//!
//! [[unmasked_views]]
//! mask_type = "block_interactions"
//! view = { kind = "editor_window", window_type = "InspectorWindow" }
//!
//! [[unmasked_views.controls]]
//! mode = "property"
//! target_type = "Transform"
//! property_path = "m_LocalPosition.x"
//! ```

use serde::Deserialize;
use veil_primitives::{ImageId, ObjectRef, TypeName};

use crate::data::{MaskSizeModifier, MaskType};
use crate::error::Result;
use crate::instruction::GuiContent;
use crate::selector::{Selector, UnmaskedView};
use crate::view_ref::ViewReference;

/// Top-level masking settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MaskingSettings {
	/// When false no views are unmasked by these settings.
	pub enabled: bool,
	pub unmasked_views: Vec<UnmaskedViewConfig>,
}

impl Default for MaskingSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			unmasked_views: Vec::new(),
		}
	}
}

impl MaskingSettings {
	/// Parses settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Descriptors to feed into a masking pass. Empty when disabled.
	pub fn unmasked_views(&self) -> Vec<UnmaskedView> {
		if !self.enabled {
			return Vec::new();
		}
		self.unmasked_views.iter().map(UnmaskedViewConfig::to_unmasked_view).collect()
	}
}

/// One unmasked-view entry as written in settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnmaskedViewConfig {
	pub view: ViewReferenceConfig,
	#[serde(default)]
	pub mask_type: MaskType,
	#[serde(default)]
	pub mask_size_modifier: MaskSizeModifier,
	#[serde(default)]
	pub controls: Vec<ControlConfig>,
}

impl UnmaskedViewConfig {
	pub fn to_unmasked_view(&self) -> UnmaskedView {
		let view = match &self.view {
			ViewReferenceConfig::View { view_type } => ViewReference::View(view_type.clone()),
			ViewReferenceConfig::EditorWindow { window_type, alternates } => ViewReference::EditorWindow {
				primary: window_type.clone(),
				alternates: alternates.clone(),
			},
		};

		UnmaskedView {
			view,
			mask_type: self.mask_type,
			size_modifier: self.mask_size_modifier,
			controls: self.controls.iter().filter_map(ControlConfig::to_selector).collect(),
		}
	}
}

/// View reference as written in settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewReferenceConfig {
	View {
		view_type: TypeName,
	},
	EditorWindow {
		window_type: TypeName,
		#[serde(default)]
		alternates: Vec<TypeName>,
	},
}

/// Control selector as written in settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ControlConfig {
	Content {
		#[serde(default)]
		text: Option<String>,
		#[serde(default)]
		tooltip: Option<String>,
		#[serde(default)]
		image: Option<ImageId>,
	},
	StyleName {
		name: String,
	},
	NamedControl {
		name: String,
	},
	Property {
		#[serde(default)]
		target_type: Option<TypeName>,
		property_path: String,
	},
	ObjectReference {
		#[serde(default)]
		object: Option<ObjectRef>,
	},
	#[serde(other)]
	Unsupported,
}

impl ControlConfig {
	/// Converts to a selector. Unsupported modes yield `None`.
	pub fn to_selector(&self) -> Option<Selector> {
		let selector = match self {
			ControlConfig::Content { text, tooltip, image } => Selector::Content(GuiContent {
				text: text.clone(),
				tooltip: tooltip.clone(),
				image: *image,
			}),
			ControlConfig::StyleName { name } => Selector::StyleName(name.clone()),
			ControlConfig::NamedControl { name } => Selector::NamedControl(name.clone()),
			ControlConfig::Property { target_type, property_path } => Selector::Property {
				target_type: target_type.clone().filter(|ty| !ty.as_str().is_empty()),
				path: property_path.clone(),
			},
			ControlConfig::ObjectReference { object } => Selector::ObjectReference(*object),
			ControlConfig::Unsupported => {
				tracing::warn!("Unsupported control selector mode; skipping");
				return None;
			}
		};
		Some(selector)
	}
}

//! Error types for masking passes.

use thiserror::Error;
use veil_primitives::{TypeName, ViewId};

/// Configuration errors that abort a masking pass.
///
/// Per-control resolution misses are never errors; they only yield fewer
/// unmasked rectangles.
#[derive(Debug, Error)]
pub enum MaskError {
	/// A view-type descriptor names a type the host cannot resolve.
	#[error("unresolved view type: {0}")]
	UnresolvedViewType(TypeName),

	/// Neither the primary nor any alternate window type resolved.
	#[error("unresolved editor window type: {primary} (alternates tried: {})", format_names(.alternates))]
	UnresolvedWindowType {
		/// Primary window type of the descriptor.
		primary: TypeName,
		/// Alternate window types tried after the primary.
		alternates: Vec<TypeName>,
	},

	/// Two different windows claim the same view.
	///
	/// This happens when two window types are docked in the same area, which
	/// makes the unmask intent ambiguous.
	#[error("view {view:?} is owned by both {first} and {second}; windows docked together cannot be unmasked separately")]
	AmbiguousDocking {
		view: ViewId,
		first: TypeName,
		second: TypeName,
	},

	/// A masking settings document could not be parsed.
	#[error("masking settings parse error: {0}")]
	Config(#[from] toml::de::Error),
}

fn format_names(names: &[TypeName]) -> String {
	if names.is_empty() {
		return "none".to_string();
	}
	names.iter().map(TypeName::as_str).collect::<Vec<_>>().join(", ")
}

/// Result type for masking operations.
pub type Result<T> = std::result::Result<T, MaskError>;

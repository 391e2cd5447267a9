#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Runtime UI masking for editor views.
//!
//! Given a set of [`UnmaskedView`] descriptors, this crate inspects the live
//! window/view hierarchy through [`WindowHost`], replays each view's GUI
//! instruction stream through [`InstructionCapture`], and produces a
//! [`MaskData`] describing which screen rectangles stay interactive.
//!
//! # Pass structure
//!
//! ```text
//! descriptors ──► view_ref (match live views, queue windows to show)
//!             ──► resolve  (capture instructions, locate control rects)
//!             ──► aggregate (merge into MaskData, validate docking)
//! ```
//!
//! Windows that must be surfaced are never shown during a pass; they are
//! queued on a [`WindowShowQueue`] and shown on the host's next tick.

/// Mask aggregation across descriptors.
pub mod aggregate;
/// Serde configuration documents for masking settings.
pub mod config;
/// Per-view mask entries and the aggregate mask map.
pub mod data;
pub mod error;
/// Collaborator traits implemented by the editor.
pub mod host;
/// Captured GUI instruction records.
pub mod instruction;
/// Region resolution against a captured instruction stream.
pub mod resolve;
/// Control selectors and unmasked-view descriptors.
pub mod selector;
/// Deferred window activation.
pub mod show_queue;
#[doc(hidden)]
pub mod test_helpers;
/// View reference matching against the live view set.
pub mod view_ref;

pub use aggregate::{MaskOutcome, MaskingPass};
pub use config::{MaskingSettings, UnmaskedViewConfig};
pub use data::{MaskData, MaskEntry, MaskSizeModifier, MaskType};
pub use error::{MaskError, Result};
pub use host::{InstructionCapture, ObjectResolver, WindowHost};
pub use instruction::{CapturedInstructions, DrawInstruction, GuiContent, NamedControlInstruction, PropertyInstruction, UnifiedInstruction, UnifiedKind};
pub use selector::{Selector, UnmaskedView};
pub use show_queue::WindowShowQueue;
pub use veil_primitives::{ImageId, ObjectRef, Rect, TypeName, ViewId, WindowId};
pub use view_ref::{ViewOwnership, ViewReference};

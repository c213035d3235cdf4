//! Human-readable names for attribute changes.
//!
//! Change-tracking UIs label each undoable step with a short phrase
//! saying which attribute changed. [`action_name`] covers every known
//! attribute; [`action_name_for`] accepts string names from outside
//! and reports unknown ones, at which point callers should show
//! [`GENERIC_ACTION_NAME`] rather than fail.

use crate::attrs::AttributeId;
use crate::error::StyleTextError;

/// Fallback label for changes whose attribute could not be identified.
pub const GENERIC_ACTION_NAME: &str = "Change Formatting";

/// The undo-menu phrase for a change to the given attribute.
pub fn action_name(id: AttributeId) -> &'static str {
    match id {
        AttributeId::Font => "Change Font",
        AttributeId::FontSize => "Change Font Size",
        AttributeId::Color => "Change Text Colour",
        AttributeId::Alignment => "Change Alignment",
        AttributeId::Underline => "Change Underline",
        AttributeId::Paragraph => "Change Paragraph Style",
    }
}

/// Like [`action_name`], keyed by the attribute's string name.
///
/// Fails with [`StyleTextError::UnknownAttribute`] for names outside
/// the known set.
pub fn action_name_for(name: &str) -> Result<&'static str, StyleTextError> {
    Ok(action_name(name.parse()?))
}

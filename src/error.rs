//! Errors for text attribute operations.

use thiserror::Error;

use crate::attrs::AttributeId;

/// Error returned by facet mutation, conversion, and name lookup.
///
/// All failures are local and synchronous. [`InvalidArgument`] and
/// [`TypeMismatch`] indicate programmer errors and should be surfaced
/// loudly; [`UnknownAttribute`] is recoverable — callers looking up an
/// action name should fall back to [`crate::GENERIC_ACTION_NAME`].
///
/// [`InvalidArgument`]: StyleTextError::InvalidArgument
/// [`TypeMismatch`]: StyleTextError::TypeMismatch
/// [`UnknownAttribute`]: StyleTextError::UnknownAttribute
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleTextError {
    /// A numeric argument was outside its valid range.
    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    /// The value supplied to a change did not match the attribute's type.
    #[error("attribute '{attribute}' expects a {expected} value, got {got}")]
    TypeMismatch {
        attribute: AttributeId,
        expected: &'static str,
        got: &'static str,
    },

    /// A string attribute name did not match any known attribute.
    #[error("unknown text attribute '{name}'")]
    UnknownAttribute { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = StyleTextError::InvalidArgument {
            what: "font size",
            value: -3.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("font size"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = StyleTextError::TypeMismatch {
            attribute: AttributeId::FontSize,
            expected: "font size",
            got: "color",
        };
        let msg = err.to_string();
        assert!(msg.contains("font_size"));
        assert!(msg.contains("expects a font size"));
        assert!(msg.contains("got color"));
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = StyleTextError::UnknownAttribute {
            name: "bogus".to_string(),
        };
        assert!(err.to_string().contains("bogus"));
    }
}

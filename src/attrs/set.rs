//! The attribute vocabulary shared by facets, converters, and text ranges.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::color::Rgba;
use super::font::{FontDescription, FontTraits};
use super::paragraph::{Alignment, ParagraphFormat};
use crate::error::StyleTextError;

/// Identifies one changeable text attribute.
///
/// This is a closed set: every attribute the facet understands has a
/// variant here, and every variant has a stable string name (used by
/// callers that receive attribute names from outside, e.g. scripting
/// or document formats) and a human-readable action description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeId {
    /// The font triple: family, traits, and size together.
    Font,
    /// Point size alone.
    FontSize,
    /// Foreground text color.
    Color,
    /// Paragraph alignment.
    Alignment,
    /// Underline level (0 = none, 1 = single, 2 = double, …).
    Underline,
    /// Paragraph spacing and indents.
    Paragraph,
}

impl AttributeId {
    /// All attribute identifiers.
    pub const ALL: [AttributeId; 6] = [
        AttributeId::Font,
        AttributeId::FontSize,
        AttributeId::Color,
        AttributeId::Alignment,
        AttributeId::Underline,
        AttributeId::Paragraph,
    ];

    /// Stable string name for this attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeId::Font => "font",
            AttributeId::FontSize => "font_size",
            AttributeId::Color => "color",
            AttributeId::Alignment => "alignment",
            AttributeId::Underline => "underline",
            AttributeId::Paragraph => "paragraph_style",
        }
    }

    /// Human-readable name of the value type this attribute expects,
    /// used in [`StyleTextError::TypeMismatch`] messages.
    pub fn expected_type(self) -> &'static str {
        match self {
            AttributeId::Font => "font description",
            AttributeId::FontSize => "font size",
            AttributeId::Color => "color",
            AttributeId::Alignment => "alignment",
            AttributeId::Underline => "underline level",
            AttributeId::Paragraph => "paragraph format",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static NAME_TABLE: Lazy<HashMap<&'static str, AttributeId>> =
    Lazy::new(|| AttributeId::ALL.iter().map(|id| (id.as_str(), *id)).collect());

impl FromStr for AttributeId {
    type Err = StyleTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TABLE
            .get(s)
            .copied()
            .ok_or_else(|| StyleTextError::UnknownAttribute {
                name: s.to_string(),
            })
    }
}

/// A typed value destined for one attribute.
///
/// The variant must match the target [`AttributeId`]; the facet's
/// change funnel rejects mismatched pairs with
/// [`StyleTextError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Font(FontDescription),
    Size(f64),
    Color(Rgba),
    Alignment(Alignment),
    Underline(u32),
    Paragraph(ParagraphFormat),
}

impl AttributeValue {
    /// Human-readable name of this value's type, matching the
    /// [`AttributeId::expected_type`] vocabulary.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Font(_) => "font description",
            AttributeValue::Size(_) => "font size",
            AttributeValue::Color(_) => "color",
            AttributeValue::Alignment(_) => "alignment",
            AttributeValue::Underline(_) => "underline level",
            AttributeValue::Paragraph(_) => "paragraph format",
        }
    }
}

/// A partial set of text formatting attributes.
///
/// Every field is optional: `None` means "not present", so a set can
/// describe just the attributes observed on (or destined for) a span
/// of text. Applying a set writes only the present fields; merging a
/// set into a facet leaves absent fields untouched. Equality is
/// field-by-field.
///
/// # Example
///
/// ```rust
/// use inkstyle::{AttributeSet, Rgba};
///
/// let just_color = AttributeSet::new().with_color(Rgba::RED);
/// assert!(just_color.alignment.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    pub font_family: Option<String>,
    pub font_traits: Option<FontTraits>,
    pub font_size: Option<f64>,
    pub color: Option<Rgba>,
    pub alignment: Option<Alignment>,
    pub underline: Option<u32>,
    pub paragraph: Option<ParagraphFormat>,
}

impl AttributeSet {
    /// Creates a set with no attributes present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_traits.is_none()
            && self.font_size.is_none()
            && self.color.is_none()
            && self.alignment.is_none()
            && self.underline.is_none()
            && self.paragraph.is_none()
    }

    /// Sets the font family, returning the updated set for chaining.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_font_traits(mut self, traits: FontTraits) -> Self {
        self.font_traits = Some(traits);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn with_underline(mut self, level: u32) -> Self {
        self.underline = Some(level);
        self
    }

    #[must_use]
    pub fn with_paragraph(mut self, paragraph: ParagraphFormat) -> Self {
        self.paragraph = Some(paragraph);
        self
    }
}

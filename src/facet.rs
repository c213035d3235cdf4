//! The text-specific slice of a drawing style's state.

use tracing::debug;

use crate::attrs::{
    Alignment, AttributeId, AttributeValue, FontDescription, FontTraits, ParagraphFormat, Rgba,
};
use crate::error::StyleTextError;

/// Font family used by newly created facets.
///
/// Stands in for the platform UI font; callers wanting a specific face
/// should set one explicitly.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Point size used by newly created facets.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Text formatting state owned by one drawing style.
///
/// A facet is exclusively owned: styles never share one. Two styles
/// wanting the same formatting copy values (the facet is `Clone`).
/// Mutation is synchronous and in-process; callers sharing a style
/// across threads must serialize access themselves.
///
/// Undo-aware callers should mutate through [`change_attribute`] (or
/// the typed setters, which delegate to it where validation applies)
/// and label the change with [`crate::action_name`].
///
/// # Example
///
/// ```rust
/// use inkstyle::{action_name, AttributeId, AttributeValue, Rgba, StyleTextFacet};
///
/// let mut facet = StyleTextFacet::new();
/// let changed = facet
///     .change_attribute(AttributeId::Color, AttributeValue::Color(Rgba::RED))
///     .unwrap();
/// assert_eq!(action_name(changed), "Change Text Colour");
/// ```
///
/// [`change_attribute`]: StyleTextFacet::change_attribute
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTextFacet {
    font: FontDescription,
    color: Rgba,
    alignment: Alignment,
    underline: u32,
    paragraph: ParagraphFormat,
}

impl Default for StyleTextFacet {
    fn default() -> Self {
        Self {
            font: FontDescription::new(DEFAULT_FONT_FAMILY, FontTraits::empty(), DEFAULT_FONT_SIZE),
            color: Rgba::BLACK,
            alignment: Alignment::Natural,
            underline: 0,
            paragraph: ParagraphFormat::default(),
        }
    }
}

impl StyleTextFacet {
    /// Creates a facet at the documented defaults: the default UI face
    /// at 12pt, black, natural alignment, no underline, single-spaced
    /// paragraphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current font triple.
    pub fn font(&self) -> &FontDescription {
        &self.font
    }

    /// The current point size.
    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    /// The current text color.
    pub fn text_color(&self) -> Rgba {
        self.color
    }

    /// The current paragraph alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The current underline level: 0 = none, 1 = single, 2 = double.
    /// Levels above 2 are carried verbatim for consumers that support
    /// them.
    pub fn underline(&self) -> u32 {
        self.underline
    }

    /// The current paragraph format.
    pub fn paragraph_format(&self) -> ParagraphFormat {
        self.paragraph
    }

    /// Replaces family, traits, and size together.
    ///
    /// Fails with [`StyleTextError::InvalidArgument`] if the
    /// description's size is not a positive finite number; the facet is
    /// left unchanged on failure.
    pub fn set_font(&mut self, font: FontDescription) -> Result<(), StyleTextError> {
        self.change_attribute(AttributeId::Font, AttributeValue::Font(font))
            .map(|_| ())
    }

    /// Sets the point size, keeping family and traits.
    ///
    /// Sizes are stored exactly as given — no rounding or clamping —
    /// so ordering among accepted sizes is preserved. Fails with
    /// [`StyleTextError::InvalidArgument`] for zero, negative, or
    /// non-finite sizes.
    pub fn set_font_size(&mut self, size: f64) -> Result<(), StyleTextError> {
        self.change_attribute(AttributeId::FontSize, AttributeValue::Size(size))
            .map(|_| ())
    }

    /// Sets the text color.
    pub fn set_text_color(&mut self, color: Rgba) {
        self.apply(AttributeValue::Color(color));
    }

    /// Sets the paragraph alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.apply(AttributeValue::Alignment(alignment));
    }

    /// Sets the underline level. Any level is accepted; interpretation
    /// of levels above 2 is up to the text consumer.
    pub fn set_underline(&mut self, level: u32) {
        self.apply(AttributeValue::Underline(level));
    }

    /// Toggles underline on and off: level 0 becomes 1, any non-zero
    /// level becomes 0. A double underline therefore toggles off, not
    /// down to single.
    pub fn toggle_underline(&mut self) {
        let level = if self.underline == 0 { 1 } else { 0 };
        self.apply(AttributeValue::Underline(level));
    }

    /// Sets the paragraph format.
    pub fn set_paragraph_format(&mut self, paragraph: ParagraphFormat) {
        self.apply(AttributeValue::Paragraph(paragraph));
    }

    /// Changes one attribute through the validating funnel.
    ///
    /// The value's variant must match `id` ([`StyleTextError::TypeMismatch`]
    /// otherwise), and size-carrying values must be positive and finite
    /// ([`StyleTextError::InvalidArgument`]). On success the applied
    /// `id` is returned so the caller can fetch a change label from
    /// [`crate::action_name`]. On any failure the facet is unchanged.
    pub fn change_attribute(
        &mut self,
        id: AttributeId,
        value: AttributeValue,
    ) -> Result<AttributeId, StyleTextError> {
        let matches = matches!(
            (id, &value),
            (AttributeId::Font, AttributeValue::Font(_))
                | (AttributeId::FontSize, AttributeValue::Size(_))
                | (AttributeId::Color, AttributeValue::Color(_))
                | (AttributeId::Alignment, AttributeValue::Alignment(_))
                | (AttributeId::Underline, AttributeValue::Underline(_))
                | (AttributeId::Paragraph, AttributeValue::Paragraph(_))
        );
        if !matches {
            return Err(StyleTextError::TypeMismatch {
                attribute: id,
                expected: id.expected_type(),
                got: value.type_name(),
            });
        }

        let size = match &value {
            AttributeValue::Font(font) => Some(font.size),
            AttributeValue::Size(size) => Some(*size),
            _ => None,
        };
        if let Some(size) = size {
            if !(size.is_finite() && size > 0.0) {
                return Err(StyleTextError::InvalidArgument {
                    what: "font size",
                    value: size,
                });
            }
        }

        self.apply(value);
        debug!(attribute = %id, "changed text attribute");
        Ok(id)
    }

    /// Like [`change_attribute`], keyed by the attribute's string name.
    ///
    /// Unknown names fail with [`StyleTextError::UnknownAttribute`]
    /// before anything is touched.
    ///
    /// [`change_attribute`]: StyleTextFacet::change_attribute
    pub fn change_attribute_named(
        &mut self,
        name: &str,
        value: AttributeValue,
    ) -> Result<AttributeId, StyleTextError> {
        let id: AttributeId = name.parse()?;
        self.change_attribute(id, value)
    }

    // Single mutation point; all setters and the change funnel land here.
    fn apply(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Font(font) => self.font = font,
            AttributeValue::Size(size) => self.font.size = size,
            AttributeValue::Color(color) => self.color = color,
            AttributeValue::Alignment(alignment) => self.alignment = alignment,
            AttributeValue::Underline(level) => self.underline = level,
            AttributeValue::Paragraph(paragraph) => self.paragraph = paragraph,
        }
    }

    pub(crate) fn set_font_family(&mut self, family: String) {
        self.font.family = family;
    }

    pub(crate) fn set_font_traits(&mut self, traits: FontTraits) {
        self.font.traits = traits;
    }
}

//! Constructors for styles carrying text formatting.

use crate::attrs::FontDescription;
use crate::convert;
use crate::error::StyleTextError;
use crate::facet::StyleTextFacet;

/// A drawing style that owns text formatting.
///
/// Stand-in for the host drawing-style record: a name plus an
/// exclusively owned [`StyleTextFacet`]. Cloning a record copies the
/// facet; two records never share one.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    name: Option<String>,
    text: StyleTextFacet,
}

impl StyleRecord {
    /// The style's display name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &StyleTextFacet {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut StyleTextFacet {
        &mut self.text
    }
}

/// A style whose facet sits at the documented defaults.
pub fn default_text_style() -> StyleRecord {
    StyleRecord {
        name: Some("Default text style".to_string()),
        text: StyleTextFacet::new(),
    }
}

/// A style fonted from `font` and named after it via
/// [`style_name_for_font`].
///
/// Fails with [`StyleTextError::InvalidArgument`] if the description's
/// size is not a positive finite number.
pub fn text_style_with_font(font: &FontDescription) -> Result<StyleRecord, StyleTextError> {
    let mut text = StyleTextFacet::new();
    text.set_font(font.clone())?;
    Ok(StyleRecord {
        name: Some(style_name_for_font(font)),
        text,
    })
}

/// Formats a font description as a style name, e.g. a bold 18pt
/// Helvetica becomes `"Helvetica Bold 18pt"`.
///
/// Trait labels are joined with spaces in display order; the size is
/// rendered with the fewest digits that preserve it (`18` for a whole
/// size, `12.5` otherwise).
pub fn style_name_for_font(font: &FontDescription) -> String {
    let mut name = font.family.clone();
    for t in font.traits.iter() {
        name.push(' ');
        name.push_str(t.label());
    }
    name.push_str(&format!(" {}pt", font.size));
    name
}

/// A fresh style reproducing the given facet's current formatting.
///
/// Values are copied, never shared; the new record is named after the
/// facet's font.
pub fn drawing_style_from_text_attributes(facet: &StyleTextFacet) -> StyleRecord {
    let mut text = StyleTextFacet::new();
    convert::adopt_attribute_set(&mut text, &convert::attribute_set(facet));
    StyleRecord {
        name: Some(style_name_for_font(facet.font())),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{Alignment, FontTrait, FontTraits, Rgba};
    use crate::facet::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

    #[test]
    fn test_default_text_style() {
        let style = default_text_style();
        assert_eq!(style.name(), Some("Default text style"));
        assert_eq!(style.text().font().family, DEFAULT_FONT_FAMILY);
        assert_eq!(style.text().font_size(), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_text_style_with_font() {
        let font = FontDescription::new("Menlo", FontTraits::empty().with(FontTrait::Bold), 14.0);
        let style = text_style_with_font(&font).unwrap();
        assert_eq!(style.name(), Some("Menlo Bold 14pt"));
        assert_eq!(style.text().font(), &font);
    }

    #[test]
    fn test_text_style_with_font_rejects_bad_size() {
        let font = FontDescription::new("Menlo", FontTraits::empty(), -1.0);
        assert!(matches!(
            text_style_with_font(&font),
            Err(StyleTextError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_style_name_whole_size() {
        let font = FontDescription::new(
            "Helvetica",
            FontTraits::empty().with(FontTrait::Bold),
            18.0,
        );
        assert_eq!(style_name_for_font(&font), "Helvetica Bold 18pt");
    }

    #[test]
    fn test_style_name_fractional_size() {
        let font = FontDescription::new("Arial", FontTraits::empty(), 12.5);
        assert_eq!(style_name_for_font(&font), "Arial 12.5pt");
    }

    #[test]
    fn test_style_name_multiple_traits() {
        let font = FontDescription::new(
            "Futura",
            FontTraits::empty()
                .with(FontTrait::Italic)
                .with(FontTrait::Bold),
            10.0,
        );
        assert_eq!(style_name_for_font(&font), "Futura Bold Italic 10pt");
    }

    #[test]
    fn test_drawing_style_copies_not_shares() {
        let mut facet = StyleTextFacet::new();
        facet.set_text_color(Rgba::RED);
        facet.set_alignment(Alignment::Justified);
        facet.set_underline(2);

        let mut style = drawing_style_from_text_attributes(&facet);
        assert_eq!(style.text(), &facet);
        assert_eq!(style.name(), Some("Helvetica 12pt"));

        // Mutating the copy must not touch the source.
        style.text_mut().set_underline(0);
        assert_eq!(facet.underline(), 2);
    }
}

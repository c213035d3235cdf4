//! Conversion between a facet and the attribute vocabulary.
//!
//! Two directions with deliberately different semantics:
//!
//! - [`apply_to_range`] is a full replace: every attribute the facet
//!   carries is written onto the range, overwriting what was there.
//! - [`adopt_attribute_set`] / [`adopt_from_range`] are merges: only
//!   attributes present in the incoming set overwrite facet fields,
//!   so formatting observed on edited text never resets attributes it
//!   doesn't mention.

use tracing::trace;

use crate::attrs::AttributeSet;
use crate::facet::StyleTextFacet;

/// Minimal capability the converter needs from a text buffer: report a
/// length and get/set formatting attributes over the span it covers.
///
/// Implemented by whatever text storage the host drawing object owns;
/// nothing here assumes a particular buffer representation.
pub trait FormattedRange {
    /// Length of the range in the buffer's own units (characters,
    /// glyphs, bytes — the converter only distinguishes empty from
    /// non-empty).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The formatting currently observed over the range. Attributes
    /// that don't vary meaningfully over the range, or that the buffer
    /// doesn't track, are simply absent from the returned set.
    fn attributes(&self) -> AttributeSet;

    /// Writes the present fields of `attrs` over the range, leaving
    /// attributes absent from `attrs` as they were.
    fn set_attributes(&mut self, attrs: &AttributeSet);
}

/// Captures a facet's complete formatting as an attribute set.
///
/// Total and deterministic: every field of the result is present.
pub fn attribute_set(facet: &StyleTextFacet) -> AttributeSet {
    AttributeSet {
        font_family: Some(facet.font().family.clone()),
        font_traits: Some(facet.font().traits),
        font_size: Some(facet.font_size()),
        color: Some(facet.text_color()),
        alignment: Some(facet.alignment()),
        underline: Some(facet.underline()),
        paragraph: Some(facet.paragraph_format()),
    }
}

/// Merges an externally observed attribute set into a facet.
///
/// Only present fields overwrite; absent fields leave the facet as it
/// was. Font family, traits, and size merge independently, since an
/// edit may have changed just one of them. An incoming font size that
/// is not a positive finite number is skipped rather than rejected —
/// attribute sets coming off foreign text buffers are not trusted to
/// be well formed, and a merge is not the place to fail.
pub fn adopt_attribute_set(facet: &mut StyleTextFacet, attrs: &AttributeSet) {
    if let Some(family) = &attrs.font_family {
        facet.set_font_family(family.clone());
    }
    if let Some(traits) = attrs.font_traits {
        facet.set_font_traits(traits);
    }
    if let Some(size) = attrs.font_size {
        if size.is_finite() && size > 0.0 {
            // Cannot fail: size was just checked.
            let _ = facet.set_font_size(size);
        } else {
            trace!(size, "ignoring invalid font size during adopt");
        }
    }
    if let Some(color) = attrs.color {
        facet.set_text_color(color);
    }
    if let Some(alignment) = attrs.alignment {
        facet.set_alignment(alignment);
    }
    if let Some(level) = attrs.underline {
        facet.set_underline(level);
    }
    if let Some(paragraph) = attrs.paragraph {
        facet.set_paragraph_format(paragraph);
    }
}

/// Writes the facet's complete formatting onto a text range.
///
/// Full replace: every attribute is written. An empty range is a
/// no-op — no writes are issued.
pub fn apply_to_range<R: FormattedRange>(facet: &StyleTextFacet, range: &mut R) {
    if range.is_empty() {
        return;
    }
    range.set_attributes(&attribute_set(facet));
}

/// Updates a facet from the formatting observed on a text range.
///
/// Merge semantics per [`adopt_attribute_set`]; an empty range is a
/// no-op.
pub fn adopt_from_range<R: FormattedRange>(facet: &mut StyleTextFacet, range: &R) {
    if range.is_empty() {
        return;
    }
    adopt_attribute_set(facet, &range.attributes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{Alignment, FontTrait, FontTraits, Rgba};

    /// In-memory stand-in for a host text buffer, counting writes.
    struct Run {
        len: usize,
        attrs: AttributeSet,
        writes: usize,
    }

    impl Run {
        fn new(len: usize) -> Self {
            Self {
                len,
                attrs: AttributeSet::new(),
                writes: 0,
            }
        }
    }

    impl FormattedRange for Run {
        fn len(&self) -> usize {
            self.len
        }

        fn attributes(&self) -> AttributeSet {
            self.attrs.clone()
        }

        fn set_attributes(&mut self, attrs: &AttributeSet) {
            self.writes += 1;
            if attrs.font_family.is_some() {
                self.attrs.font_family = attrs.font_family.clone();
            }
            if attrs.font_traits.is_some() {
                self.attrs.font_traits = attrs.font_traits;
            }
            if attrs.font_size.is_some() {
                self.attrs.font_size = attrs.font_size;
            }
            if attrs.color.is_some() {
                self.attrs.color = attrs.color;
            }
            if attrs.alignment.is_some() {
                self.attrs.alignment = attrs.alignment;
            }
            if attrs.underline.is_some() {
                self.attrs.underline = attrs.underline;
            }
            if attrs.paragraph.is_some() {
                self.attrs.paragraph = attrs.paragraph;
            }
        }
    }

    #[test]
    fn test_attribute_set_is_complete() {
        let set = attribute_set(&StyleTextFacet::new());
        assert!(set.font_family.is_some());
        assert!(set.font_traits.is_some());
        assert!(set.font_size.is_some());
        assert!(set.color.is_some());
        assert!(set.alignment.is_some());
        assert!(set.underline.is_some());
        assert!(set.paragraph.is_some());
    }

    #[test]
    fn test_adopt_merges_only_present_fields() {
        let mut facet = StyleTextFacet::new();
        facet.set_text_color(Rgba::RED);
        facet.set_alignment(Alignment::Center);

        let attrs = AttributeSet::new().with_underline(1);
        adopt_attribute_set(&mut facet, &attrs);

        assert_eq!(facet.underline(), 1);
        assert_eq!(facet.text_color(), Rgba::RED);
        assert_eq!(facet.alignment(), Alignment::Center);
    }

    #[test]
    fn test_adopt_merges_font_fields_independently() {
        let mut facet = StyleTextFacet::new();
        facet.set_font_size(18.0).unwrap();

        let attrs = AttributeSet::new()
            .with_font_traits(FontTraits::empty().with(FontTrait::Bold));
        adopt_attribute_set(&mut facet, &attrs);

        assert!(facet.font().traits.contains(FontTrait::Bold));
        assert_eq!(facet.font_size(), 18.0);
        assert_eq!(facet.font().family, crate::DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_adopt_skips_invalid_font_size() {
        let mut facet = StyleTextFacet::new();
        let attrs = AttributeSet::new()
            .with_font_size(-2.0)
            .with_color(Rgba::BLUE);
        adopt_attribute_set(&mut facet, &attrs);

        assert_eq!(facet.font_size(), crate::DEFAULT_FONT_SIZE);
        assert_eq!(facet.text_color(), Rgba::BLUE);
    }

    #[test]
    fn test_apply_to_range_writes_everything() {
        let mut facet = StyleTextFacet::new();
        facet.set_text_color(Rgba::GREEN);
        facet.set_underline(2);

        let mut run = Run::new(10);
        run.attrs = AttributeSet::new().with_alignment(Alignment::Right);
        apply_to_range(&facet, &mut run);

        assert_eq!(run.writes, 1);
        // Full replace: the facet's natural alignment wins.
        assert_eq!(run.attrs.alignment, Some(Alignment::Natural));
        assert_eq!(run.attrs.color, Some(Rgba::GREEN));
        assert_eq!(run.attrs.underline, Some(2));
    }

    #[test]
    fn test_apply_to_empty_range_is_a_noop() {
        let facet = StyleTextFacet::new();
        let mut run = Run::new(0);
        apply_to_range(&facet, &mut run);
        assert_eq!(run.writes, 0);
        assert!(run.attrs.is_empty());
    }

    #[test]
    fn test_adopt_from_empty_range_is_a_noop() {
        let mut facet = StyleTextFacet::new();
        let before = facet.clone();
        let mut run = Run::new(0);
        run.attrs = AttributeSet::new().with_color(Rgba::RED);
        adopt_from_range(&mut facet, &run);
        assert_eq!(facet, before);
    }

    #[test]
    fn test_adopt_from_range_merges() {
        let mut facet = StyleTextFacet::new();
        let mut run = Run::new(5);
        run.attrs = AttributeSet::new()
            .with_color(Rgba::BLUE)
            .with_underline(1);
        adopt_from_range(&mut facet, &run);
        assert_eq!(facet.text_color(), Rgba::BLUE);
        assert_eq!(facet.underline(), 1);
        assert_eq!(facet.alignment(), Alignment::Natural);
    }
}

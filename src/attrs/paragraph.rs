//! Paragraph-level formatting values.

/// Horizontal paragraph alignment.
///
/// `Natural` resolves to the writing direction of the text and is the
/// default for new facets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justified,
    #[default]
    Natural,
}

/// Paragraph spacing and indent parameters.
///
/// Distances are in the owning document's point units. The default is
/// a standard single-spaced paragraph with no extra spacing or indents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphFormat {
    /// Line height multiple; 1.0 is single spacing.
    pub line_spacing: f64,
    /// Extra space above the paragraph.
    pub spacing_before: f64,
    /// Extra space below the paragraph.
    pub spacing_after: f64,
    /// Indent applied to the first line only.
    pub first_line_indent: f64,
    /// Leading-edge indent for the whole paragraph.
    pub head_indent: f64,
    /// Trailing-edge indent for the whole paragraph.
    pub tail_indent: f64,
}

impl Default for ParagraphFormat {
    fn default() -> Self {
        Self {
            line_spacing: 1.0,
            spacing_before: 0.0,
            spacing_after: 0.0,
            first_line_indent: 0.0,
            head_indent: 0.0,
            tail_indent: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignment_is_natural() {
        assert_eq!(Alignment::default(), Alignment::Natural);
    }

    #[test]
    fn test_default_paragraph_is_single_spaced() {
        let p = ParagraphFormat::default();
        assert_eq!(p.line_spacing, 1.0);
        assert_eq!(p.spacing_before, 0.0);
        assert_eq!(p.head_indent, 0.0);
    }
}

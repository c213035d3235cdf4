//! Text attribute facet for drawing-object styles.
//!
//! A drawing style that displays text carries a [`StyleTextFacet`]:
//! font, color, alignment, underline level, and paragraph formatting.
//! This crate provides that facet and everything around it:
//!
//! - [`attrs`]: the typed attribute vocabulary ([`AttributeSet`],
//!   [`FontDescription`], [`Rgba`], …)
//! - [`StyleTextFacet`]: per-style text state with a validating
//!   single-attribute change funnel
//! - [`convert`]: facet ⇄ attribute-set conversion and application to
//!   text ranges via the [`FormattedRange`] seam
//! - [`action_name`]: undo-menu labels for attribute changes
//! - [`factory`]: style constructors and font-derived style names
//!
//! # Example
//!
//! ```rust
//! use inkstyle::{
//!     attribute_set, style_name_for_font, FontDescription, FontTrait, FontTraits,
//!     StyleTextFacet,
//! };
//!
//! let mut facet = StyleTextFacet::new();
//! facet
//!     .set_font(FontDescription::new(
//!         "Helvetica",
//!         FontTraits::empty().with(FontTrait::Bold),
//!         18.0,
//!     ))
//!     .unwrap();
//!
//! assert_eq!(style_name_for_font(facet.font()), "Helvetica Bold 18pt");
//! assert_eq!(attribute_set(&facet).font_size, Some(18.0));
//! ```
//!
//! Facets are exclusively owned by their style and mutated
//! synchronously; the attribute values themselves are plain `Clone`
//! types that can be shared freely.

pub mod action;
pub mod attrs;
pub mod convert;
pub mod error;
pub mod facet;
pub mod factory;

pub use action::{action_name, action_name_for, GENERIC_ACTION_NAME};
pub use attrs::{
    Alignment, AttributeId, AttributeSet, AttributeValue, FontDescription, FontTrait, FontTraits,
    ParagraphFormat, Rgba,
};
pub use convert::{
    adopt_attribute_set, adopt_from_range, apply_to_range, attribute_set, FormattedRange,
};
pub use error::StyleTextError;
pub use facet::{StyleTextFacet, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
pub use factory::{
    default_text_style, drawing_style_from_text_attributes, style_name_for_font,
    text_style_with_font, StyleRecord,
};

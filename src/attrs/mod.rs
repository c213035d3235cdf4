//! Text attribute value types.
//!
//! This module provides the closed vocabulary the rest of the crate
//! speaks:
//!
//! - [`FontDescription`], [`FontTrait`], [`FontTraits`]: the font triple
//! - [`Rgba`]: text color
//! - [`Alignment`], [`ParagraphFormat`]: paragraph-level formatting
//! - [`AttributeSet`]: a partial bag of attributes for a span of text
//! - [`AttributeId`], [`AttributeValue`]: typed handles for single-attribute
//!   changes
//!
//! All types here are plain values: immutable by convention, cheap to
//! clone, and safe to copy across threads.

mod color;
mod font;
mod paragraph;
mod set;

pub use color::Rgba;
pub use font::{FontDescription, FontTrait, FontTraits};
pub use paragraph::{Alignment, ParagraphFormat};
pub use set::{AttributeId, AttributeSet, AttributeValue};

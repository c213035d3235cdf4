//! Font description values: family, traits, size.

/// A single typographic trait a font can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontTrait {
    Bold,
    Italic,
    Condensed,
    Expanded,
}

impl FontTrait {
    /// All traits, in the order they appear in font-derived style names.
    pub const ALL: [FontTrait; 4] = [
        FontTrait::Bold,
        FontTrait::Italic,
        FontTrait::Condensed,
        FontTrait::Expanded,
    ];

    /// Human-readable label, as it appears in a style name like
    /// `"Helvetica Bold 18pt"`.
    pub fn label(self) -> &'static str {
        match self {
            FontTrait::Bold => "Bold",
            FontTrait::Italic => "Italic",
            FontTrait::Condensed => "Condensed",
            FontTrait::Expanded => "Expanded",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`FontTrait`]s with a fixed iteration order.
///
/// Copyable and cheap to compare; iteration always yields traits in
/// the [`FontTrait::ALL`] order regardless of insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontTraits(u8);

impl FontTraits {
    /// Creates an empty trait set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns an updated set with `trait_` added, for chaining.
    #[must_use]
    pub const fn with(self, trait_: FontTrait) -> Self {
        Self(self.0 | trait_.bit())
    }

    /// Adds a trait to the set.
    pub fn insert(&mut self, trait_: FontTrait) {
        self.0 |= trait_.bit();
    }

    /// Removes a trait from the set.
    pub fn remove(&mut self, trait_: FontTrait) {
        self.0 &= !trait_.bit();
    }

    /// Returns `true` if the set contains `trait_`.
    pub const fn contains(self, trait_: FontTrait) -> bool {
        self.0 & trait_.bit() != 0
    }

    /// Returns `true` if no traits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained traits in display order.
    pub fn iter(self) -> impl Iterator<Item = FontTrait> {
        FontTrait::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<FontTrait> for FontTraits {
    fn from_iter<I: IntoIterator<Item = FontTrait>>(iter: I) -> Self {
        let mut traits = FontTraits::empty();
        for t in iter {
            traits.insert(t);
        }
        traits
    }
}

/// The font triple carried by a text facet.
///
/// Family, traits, and size always change together when set through
/// [`crate::StyleTextFacet::set_font`]; conversion from observed text
/// may update them independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescription {
    pub family: String,
    pub traits: FontTraits,
    pub size: f64,
}

impl FontDescription {
    /// Creates a font description. Size validity is checked by the
    /// facet when the description is applied, not here.
    pub fn new(family: impl Into<String>, traits: FontTraits, size: f64) -> Self {
        Self {
            family: family.into(),
            traits,
            size,
        }
    }
}

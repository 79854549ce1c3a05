//! Card Records
//!
//! A card is one displayable unit: an ordered sequence of text fragments
//! where the first fragment doubles as the card's stable identity and
//! display title, and the rest are body lines.

use serde::{Deserialize, Serialize};

/// Display height of every card, in layout units.
///
/// The surface decides how layout units map to its own geometry; the
/// constant lives here because the stacking layout ([`crate::Deck`])
/// sums these heights.
pub const CARD_HEIGHT: u32 = 200;

/// One displayable card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Text fragments; `fields[0]` is the title and identity key,
    /// `fields[1..]` are body lines.
    pub fields: Vec<String>,
    /// Display height in layout units (constant today, carried per
    /// card so a future feed can size cards individually).
    pub height: u32,
}

impl Card {
    /// Create a card from its fields with the standard height.
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            height: CARD_HEIGHT,
        }
    }

    /// The stable identity of this card, used as the animation and
    /// render key. Empty for a (degenerate) field-less card.
    #[must_use]
    pub fn key(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }

    /// The display title (same fragment as [`Card::key`]).
    #[must_use]
    pub fn title(&self) -> &str {
        self.key()
    }

    /// Body lines: every fragment after the title.
    #[must_use]
    pub fn body_lines(&self) -> &[String] {
        self.fields.get(1..).unwrap_or(&[])
    }
}

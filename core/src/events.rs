//! Feed Events
//!
//! Messages delivered from background refresh tasks to the display
//! surface. The surface drains these non-blockingly each loop pass and
//! applies them to its deck; state mutation stays on the surface task.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Outcome of one refresh attempt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum FeedEvent {
    /// The fetch succeeded: replace the whole deck with these cards.
    Replaced {
        /// The sanitized cards for the selected user, in feed order.
        cards: Vec<Card>,
    },
    /// The fetch failed: keep the current deck, surface the reason.
    Failed {
        /// Human-readable failure description for the header marker.
        reason: String,
    },
}

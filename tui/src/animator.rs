//! Card Animator
//!
//! Per-card enter/update/leave motion for the stacked layout. Each card
//! key owns a motion record whose `y` and `height` (in layout units)
//! ease toward targets taken from `Deck::layout()`.
//!
//! # Design
//!
//! The animator uses frame deltas from the render loop rather than wall
//! clock deadlines: every `update(delta)` moves each value a fixed
//! fraction of its remaining distance (exponential approach), which
//! stays smooth under jittery frame timing.
//!
//! Entering cards grow from zero height at their slot; leaving cards
//! shrink to zero height in place and are dropped once flat. Leaving
//! cards keep full color intensity the whole way out - there is no
//! fade.

use std::collections::HashMap;
use std::time::Duration;

use cardwall_core::{Card, Deck};

/// Approach rate per second; higher means snappier motion.
const APPROACH_RATE: f32 = 6.0;

/// Distance (in layout units) below which a value snaps to its target.
const SNAP_EPSILON: f32 = 0.5;

/// Where a card is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    /// Growing into its slot.
    Entering,
    /// At (or easing toward) its layout position.
    Settled,
    /// Shrinking out; dropped when flat.
    Leaving,
}

/// Animated state for one card.
#[derive(Clone, Debug)]
pub struct CardMotion {
    /// The card being displayed (kept here so leaving cards can still
    /// render after the deck has dropped them).
    pub card: Card,
    /// Current vertical offset in layout units.
    pub y: f32,
    /// Target vertical offset.
    pub target_y: f32,
    /// Current height in layout units.
    pub height: f32,
    /// Target height.
    pub target_height: f32,
    /// Lifecycle phase.
    pub phase: MotionPhase,
}

/// Tracks motion records for every visible card, keyed by the card's
/// first field.
#[derive(Debug, Default)]
pub struct CardAnimator {
    motions: Vec<CardMotion>,
}

impl CardAnimator {
    /// Create an empty animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retarget from the deck's current layout: surviving keys ease to
    /// their new offsets, new keys enter, vanished keys start leaving.
    /// Motion order follows deck order, leaving cards last.
    pub fn sync(&mut self, deck: &Deck) {
        let mut old: HashMap<String, CardMotion> = self
            .motions
            .drain(..)
            .map(|m| (m.card.key().to_string(), m))
            .collect();

        let mut next = Vec::with_capacity(deck.len());
        for (placement, card) in deck.layout() {
            let target_y = placement.y as f32;
            let target_height = placement.height as f32;

            match old.remove(card.key()) {
                Some(mut motion) => {
                    motion.card = card.clone();
                    motion.target_y = target_y;
                    motion.target_height = target_height;
                    if motion.phase == MotionPhase::Leaving {
                        motion.phase = MotionPhase::Entering;
                    }
                    next.push(motion);
                }
                None => next.push(CardMotion {
                    card: card.clone(),
                    y: target_y,
                    target_y,
                    height: 0.0,
                    target_height,
                    phase: MotionPhase::Entering,
                }),
            }
        }

        for (_, mut motion) in old {
            motion.phase = MotionPhase::Leaving;
            motion.target_height = 0.0;
            next.push(motion);
        }

        self.motions = next;
    }

    /// Advance all motions by one frame delta; drops leaving cards that
    /// have flattened out.
    pub fn update(&mut self, delta: Duration) {
        let factor = 1.0 - (-APPROACH_RATE * delta.as_secs_f32()).exp();

        for motion in &mut self.motions {
            motion.y = approach(motion.y, motion.target_y, factor);
            motion.height = approach(motion.height, motion.target_height, factor);

            if motion.phase == MotionPhase::Entering
                && (motion.height - motion.target_height).abs() < SNAP_EPSILON
                && (motion.y - motion.target_y).abs() < SNAP_EPSILON
            {
                motion.phase = MotionPhase::Settled;
            }
        }

        self.motions
            .retain(|m| !(m.phase == MotionPhase::Leaving && m.height < SNAP_EPSILON));
    }

    /// Current motion records in draw order (deck order, then leaving).
    pub fn motions(&self) -> &[CardMotion] {
        &self.motions
    }

    /// True when every card sits exactly at its target.
    pub fn is_idle(&self) -> bool {
        self.motions.iter().all(|m| {
            m.phase == MotionPhase::Settled
                && (m.y - m.target_y).abs() < SNAP_EPSILON
                && (m.height - m.target_height).abs() < SNAP_EPSILON
        })
    }
}

fn approach(current: f32, target: f32, factor: f32) -> f32 {
    let next = current + (target - current) * factor;
    if (next - target).abs() < SNAP_EPSILON {
        target
    } else {
        next
    }
}

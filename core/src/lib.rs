//! Cardwall Core - Headless Card Feed and Rotation Logic
//!
//! This crate provides the business logic for cardwall, completely
//! independent of any UI framework. It can drive the terminal surface,
//! a different renderer, or run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       UI Surface                            │
//! │                 (cardwall-tui, ratatui)                     │
//! │                           │                                 │
//! │        tick / refresh (down)     FeedEvent (up)             │
//! │                           │                                 │
//! └───────────────────────────┼─────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼─────────────────────────────────┐
//! │                     CARDWALL CORE                           │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌─────────────┐  │
//! │  │ Schedule │  │   Deck   │  │   Feed   │  │   Config    │  │
//! │  │ (ticks)  │  │ (cards)  │  │ (worker) │  │ (file/env)  │  │
//! │  └──────────┘  └──────────┘  └──────────┘  └─────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Deck`]: the ordered card list, replaced on refresh and rotated
//!   between refreshes
//! - [`Schedule`]: the one-second tick counter and its refresh/rotate
//!   decision rule
//! - [`FeedWorker`]: spawns non-blocking refreshes and delivers
//!   [`FeedEvent`]s over a channel
//! - [`FeedSource`]: the fetch seam; [`HttpFeed`] is the production
//!   implementation, tests substitute scripted mocks
//! - [`DisplayConfig`]: defaults < config file < environment
//!
//! # No UI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any
//! other UI framework. It's pure logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod config;
pub mod deck;
pub mod events;
pub mod feed;
pub mod sanitize;
pub mod schedule;

// Re-exports for convenience
pub use card::{Card, CARD_HEIGHT};
pub use config::{
    default_config_path, load_config, load_config_from_path, CardwallToml, ConfigError,
    ConfigSource, DisplayConfig, ThemeMode,
};
pub use deck::{Deck, Placement};
pub use events::FeedEvent;
pub use feed::{select_cards, Feed, FeedError, FeedSource, FeedWorker, HttpFeed};
pub use sanitize::{sanitize_field, strip_image_tags, strip_tags};
pub use schedule::{Schedule, TickAction};

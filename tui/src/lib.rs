//! Cardwall TUI - Terminal surface for the card display
//!
//! This crate renders the cardwall deck as a full-screen, animated,
//! auto-rotating stack of bordered cards.
//!
//! # Architecture
//!
//! - **App**: event loop wiring keys, the one-second schedule tick, the
//!   frame tick, and feed events together
//! - **Animator**: per-card enter/update/leave motion in layout units
//! - **View**: header line plus the card stack
//! - **Theme**: dark/light palettes with a runtime toggle

pub mod animator;
pub mod app;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;

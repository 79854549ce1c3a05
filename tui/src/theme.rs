//! Theme and Colors
//!
//! Two palettes, dark and light, toggled at runtime with the `t` key.
//! The mode itself lives in core config ([`ThemeMode`]); this module
//! maps it to concrete terminal colors.

use cardwall_core::ThemeMode;
use ratatui::style::Color;

// ============================================================================
// Dark palette
// ============================================================================

/// Dark page background
const DARK_BG: Color = Color::Rgb(16, 18, 24);

/// Dark card border
const DARK_BORDER: Color = Color::Rgb(70, 76, 94);

/// Dark card title text
const DARK_TITLE: Color = Color::Rgb(235, 238, 245);

/// Dark card body text
const DARK_BODY: Color = Color::Rgb(168, 176, 192);

/// Dark header accent
const DARK_ACCENT: Color = Color::Rgb(130, 170, 255);

/// Dark dim/system text
const DARK_DIM: Color = Color::Rgb(100, 100, 100);

/// Dark error marker
const DARK_ERROR: Color = Color::Rgb(255, 100, 100);

// ============================================================================
// Light palette
// ============================================================================

/// Light page background
const LIGHT_BG: Color = Color::Rgb(245, 245, 240);

/// Light card border
const LIGHT_BORDER: Color = Color::Rgb(170, 174, 186);

/// Light card title text
const LIGHT_TITLE: Color = Color::Rgb(28, 31, 40);

/// Light card body text
const LIGHT_BODY: Color = Color::Rgb(72, 78, 90);

/// Light header accent
const LIGHT_ACCENT: Color = Color::Rgb(50, 90, 200);

/// Light dim/system text
const LIGHT_DIM: Color = Color::Rgb(150, 150, 150);

/// Light error marker
const LIGHT_ERROR: Color = Color::Rgb(190, 55, 55);

/// Resolved colors for the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub border: Color,
    pub title: Color,
    pub body: Color,
    pub accent: Color,
    pub dim: Color,
    pub error: Color,
}

impl Theme {
    /// Palette for a mode.
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// The dark palette (default).
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: DARK_BG,
            border: DARK_BORDER,
            title: DARK_TITLE,
            body: DARK_BODY,
            accent: DARK_ACCENT,
            dim: DARK_DIM,
            error: DARK_ERROR,
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: LIGHT_BG,
            border: LIGHT_BORDER,
            title: LIGHT_TITLE,
            body: LIGHT_BODY,
            accent: LIGHT_ACCENT,
            dim: LIGHT_DIM,
            error: LIGHT_ERROR,
        }
    }

    /// The opposite palette, for the toggle key.
    pub fn toggled(&self) -> Self {
        Self::from_mode(self.mode.toggled())
    }

    /// Display name for the header.
    pub fn name(&self) -> &'static str {
        self.mode.name()
    }
}

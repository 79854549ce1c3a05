//! CardBlock Widget
//!
//! One bordered card: rounded frame, title line, wrapped body lines.
//! The widget renders into whatever height it is given, so a card
//! mid-animation simply gets a shorter rect and clips from the bottom.

use cardwall_core::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use textwrap::wrap;
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

/// A single rendered card.
pub struct CardBlock<'a> {
    card: &'a Card,
    theme: &'a Theme,
}

impl<'a> CardBlock<'a> {
    pub fn new(card: &'a Card, theme: &'a Theme) -> Self {
        Self { card, theme }
    }

    /// Draw the rounded border for the card frame.
    fn draw_border(&self, buf: &mut Buffer, area: Rect) {
        let border_style = Style::default().fg(self.theme.border);

        let top = format!("╭{}╮", "─".repeat(area.width.saturating_sub(2) as usize));
        buf.set_string(area.x, area.y, &top, border_style);

        if area.height < 2 {
            return;
        }

        for y in (area.y + 1)..(area.y + area.height - 1) {
            buf.set_string(area.x, y, "│", border_style);
            buf.set_string(area.x + area.width.saturating_sub(1), y, "│", border_style);
        }

        let bottom = format!("╰{}╯", "─".repeat(area.width.saturating_sub(2) as usize));
        buf.set_string(area.x, area.y + area.height - 1, &bottom, border_style);
    }
}

impl Widget for CardBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height == 0 {
            return;
        }

        // Opaque fill so cards occlude whatever sits beneath them while
        // the stack is mid-animation.
        let blank = " ".repeat(area.width as usize);
        let fill = Style::default().bg(self.theme.background);
        for y in area.y..area.y + area.height {
            buf.set_string(area.x, y, &blank, fill);
        }

        self.draw_border(buf, area);

        // Inner text region: one border column plus one padding column
        // each side, one border row top and bottom.
        let inner_width = area.width.saturating_sub(4) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_width == 0 || inner_height == 0 {
            return;
        }
        let text_x = area.x + 2;
        let mut y = area.y + 1;
        let y_end = area.y + area.height - 1;

        // Title line, truncated to the inner width.
        let title = truncate_to_width(self.card.title(), inner_width);
        buf.set_string(
            text_x,
            y,
            &title,
            Style::default()
                .fg(self.theme.title)
                .add_modifier(Modifier::BOLD),
        );
        y += 1;

        // Body: each remaining field wrapped to the inner width.
        let body_style = Style::default().fg(self.theme.body);
        'body: for field in self.card.body_lines() {
            for line in wrap(field, inner_width) {
                if y >= y_end {
                    break 'body;
                }
                buf.set_string(text_x, y, &line, body_style);
                y += 1;
            }
        }
    }
}

/// Cut a string to at most `width` terminal columns.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

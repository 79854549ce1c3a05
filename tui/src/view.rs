//! View Composition
//!
//! Maps display state to the terminal buffer: a one-line header
//! (animated ellipsis, refresh countdown, theme name, key hints, feed
//! error marker) above the animated card stack.
//!
//! Cards are positioned from their motion records: 20 layout units per
//! terminal row, so a settled card (200 units) is ten rows tall. Draw
//! order is back to front - the first card in deck order is drawn last
//! and therefore sits on top of any transient overlap.

use cardwall_core::Schedule;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::animator::CardMotion;
use crate::theme::Theme;
use crate::widgets::CardBlock;

/// Layout units per terminal row.
pub const UNITS_PER_ROW: f32 = 20.0;

/// Render the whole view into the buffer.
pub fn draw(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    schedule: &Schedule,
    feed_down: bool,
    motions: &[CardMotion],
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    buf.set_style(area, Style::default().bg(theme.background));

    draw_header(buf, area, theme, schedule, feed_down);

    let list = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    draw_stack(buf, list, theme, motions);
}

fn draw_header(buf: &mut Buffer, area: Rect, theme: &Theme, schedule: &Schedule, feed_down: bool) {
    let dots = ".".repeat(schedule.ellipsis_len());
    let countdown = format!(" {dots}Refresh in {}", schedule.until_refresh());
    buf.set_string(
        area.x,
        area.y,
        &countdown,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut used = area.x + countdown.chars().count() as u16;
    if feed_down {
        let marker = "  [feed unavailable]";
        buf.set_string(used, area.y, marker, Style::default().fg(theme.error));
        used += marker.len() as u16;
    }

    // Right-aligned hints, skipped when the terminal is too narrow to
    // fit them after the countdown.
    let hints = format!("{} · q quit · t theme · r refresh ", theme.name());
    let hints_x = area
        .x
        .saturating_add(area.width.saturating_sub(hints.chars().count() as u16));
    if hints_x > used {
        buf.set_string(hints_x, area.y, &hints, Style::default().fg(theme.dim));
    }
}

fn draw_stack(buf: &mut Buffer, list: Rect, theme: &Theme, motions: &[CardMotion]) {
    if list.width < 6 || list.height == 0 {
        return;
    }

    let bottom = i64::from(list.y) + i64::from(list.height);

    for motion in motions.iter().rev() {
        let rows = (motion.height / UNITS_PER_ROW).round() as i64;
        if rows <= 0 {
            continue;
        }

        let top = i64::from(list.y) + (motion.y / UNITS_PER_ROW).round() as i64;
        if top >= bottom {
            continue;
        }

        let visible = rows.min(bottom - top);
        if visible <= 0 {
            continue;
        }

        let rect = Rect::new(
            list.x + 1,
            top as u16,
            list.width.saturating_sub(2),
            visible as u16,
        );
        CardBlock::new(&motion.card, theme).render(rect, buf);
    }
}

//! Toast overlay rendering
//!
//! Renders the live toast stack anchored to a frame corner. Entrance and exit
//! are drawn as a horizontal slide toward the nearest edge; the exit phase is
//! additionally dimmed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

use super::toast_state::{Phase, ToastStack};
use crate::config::Corner;
use crate::widgets::overlay;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 2;
const MIN_VISIBLE_WIDTH: u16 = 5;

/// Render every live toast in `stack` as seen at `now`.
///
/// Call after the main UI so the toasts land on top. The newest toast takes
/// the corner slot; older ones stack away from it. Toasts that do not fit the
/// frame are skipped, not retired.
pub fn render_toasts(frame: &mut Frame, stack: &ToastStack, now: Instant, corner: Corner) {
    let frame_area = frame.area();

    for (slot, toast) in stack.iter().rev().enumerate() {
        let phase = toast.phase(now);
        if phase == Phase::Removed {
            continue;
        }

        let style = toast.severity().style();

        // Width: icon + space + message + padding (1 each side) + borders (2)
        let content_width = toast.message().chars().count() as u16 + 2;
        let width = content_width + 4;

        let Some(base) = overlay::corner_slot(
            frame_area,
            width,
            TOAST_HEIGHT,
            slot as u16,
            MARGIN,
            corner,
        ) else {
            continue;
        };

        // Slide toward the right edge during enter/exit
        let slide = (toast.offset_ratio(now) * f32::from(base.width + MARGIN)) as u16;
        let x = base.x.saturating_add(slide);
        let visible_width = base.width.min(frame_area.right().saturating_sub(x));
        if visible_width < MIN_VISIBLE_WIDTH {
            continue;
        }

        let area = Rect {
            x,
            y: base.y,
            width: visible_width,
            height: base.height,
        };

        let mut accent_style = Style::default().fg(style.accent).bg(style.bg);
        let mut body_style = Style::default().fg(style.fg).bg(style.bg);
        if phase == Phase::Fading {
            accent_style = accent_style.add_modifier(Modifier::DIM);
            body_style = body_style.add_modifier(Modifier::DIM);
        }

        // Clear background for floating effect
        overlay::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(accent_style)
            .style(Style::default().bg(style.bg));

        let text = Line::from(Span::styled(
            format!(" {} {} ", style.icon, toast.message()),
            body_style,
        ));

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;

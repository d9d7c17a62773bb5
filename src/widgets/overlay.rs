use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::config::Corner;

/// Compute the rect for the toast at `slot` positions away from the anchored
/// corner, keeping `margin` cells clear of the frame edges.
///
/// Slot 0 sits in the corner; higher slots stack away from it (upward for the
/// bottom corner, downward for the top corner). Returns `None` when the slot
/// does not fit in the frame.
pub fn corner_slot(
    frame_area: Rect,
    width: u16,
    height: u16,
    slot: u16,
    margin: u16,
    corner: Corner,
) -> Option<Rect> {
    let usable_width = frame_area.width.saturating_sub(margin * 2);
    let usable_height = frame_area.height.saturating_sub(margin * 2);
    if usable_width == 0 || usable_height < height {
        return None;
    }

    let width = width.min(usable_width);
    let x = frame_area.x + margin + (usable_width - width);

    let span = height.checked_mul(slot)?.checked_add(height)?;
    if span > usable_height {
        return None;
    }

    let y = match corner {
        Corner::BottomRight => frame_area.y + margin + (usable_height - span),
        Corner::TopRight => frame_area.y + margin + (span - height),
    };

    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

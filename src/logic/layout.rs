//! Layout constraint logic
//!
//! Pure functions for hit testing and for keeping the dropdown panel
//! inside the visible frame.

use ratatui::layout::Rect;

use crate::model::dropdown::Anchor;

/// Whether a screen coordinate falls inside a rect
pub fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Place a panel of the given size at an anchor, clamped into the frame.
/// The anchor may be negative or off-screen (the trigger can sit near an
/// edge); the panel is pulled back so it stays fully visible where the
/// frame allows.
pub fn clamp_panel_origin(
    anchor: Anchor,
    panel_width: u16,
    panel_height: u16,
    frame: Rect,
) -> (u16, u16) {
    let max_x = frame.width.saturating_sub(panel_width);
    let max_y = frame.height.saturating_sub(panel_height);

    let x = anchor.left.clamp(0, max_x as i32) as u16;
    let y = anchor.top.clamp(0, max_y as i32) as u16;

    (frame.x + x, frame.y + y)
}

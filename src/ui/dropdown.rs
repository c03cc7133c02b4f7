use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::icons::IconRenderer;
use super::measure::{ElementId, Geometry};
use crate::logic::animation::{self, FadeLevel};
use crate::logic::dropdown::{has_bottom_divider, item_position, ItemPosition};
use crate::logic::layout::clamp_panel_origin;
use crate::model::dropdown::{Anchor, DropdownState, MENU_ITEMS};

/// Panel width in cells
pub const PANEL_WIDTH: u16 = 26;

/// One row per item, a divider row between items, plus the border
pub fn panel_height() -> u16 {
    MENU_ITEMS.len() as u16 * 2 + 1
}

/// Render the open dropdown: a screen-covering transparent overlay
/// (nothing is drawn for it; handlers treat any tap outside the panel as
/// dismissal) containing the positioned menu panel.
///
/// The panel enters with a short translate/fade tween sampled from the
/// time the menu opened. The tween never gates interactivity.
pub fn render_dropdown(
    f: &mut Frame,
    frame_area: Rect,
    dropdown: &DropdownState,
    icons: &IconRenderer,
    geometry: &mut Geometry,
) {
    let elapsed = dropdown.open_elapsed_ms().unwrap_or(animation::ENTRANCE_MS);
    let sample = animation::entrance_sample(elapsed);
    let fade = animation::fade_level(sample.opacity);

    let offset_anchor = Anchor {
        top: dropdown.anchor.top + sample.translate_y.round() as i32,
        left: dropdown.anchor.left + sample.translate_x.round() as i32,
    };
    let (x, y) = clamp_panel_origin(offset_anchor, PANEL_WIDTH, panel_height(), frame_area);
    let panel_area = Rect {
        x,
        y,
        width: PANEL_WIDTH.min(frame_area.width),
        height: panel_height().min(frame_area.height),
    };

    geometry.record(ElementId::DropdownPanel, panel_area, frame_area);
    f.render_widget(Clear, panel_area);

    let text_color = match fade {
        FadeLevel::Faint => Color::DarkGray,
        FadeLevel::Dim => Color::Gray,
        FadeLevel::Full => Color::White,
    };

    // A held first or last item pulls the adjacent rounded corner row
    // into the pressed tint; middle items only highlight their own row.
    let pressed_position = dropdown
        .pressed_key
        .and_then(|key| MENU_ITEMS.iter().position(|item| item.key == key))
        .map(|i| item_position(i, MENU_ITEMS.len()));
    let border_color = match pressed_position {
        Some(ItemPosition::First) | Some(ItemPosition::Last) => Color::Gray,
        _ => text_color,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(panel_area);
    f.render_widget(block, panel_area);

    let mut row = inner.y;
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        if row >= inner.y + inner.height {
            break; // clamped into a frame too small for every row
        }

        let item_area = Rect {
            x: inner.x,
            y: row,
            width: inner.width,
            height: 1,
        };
        let pressed = dropdown.pressed_key == Some(item.key);
        let row_style = if pressed {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(text_color)
        };

        let icon = icons.glyph_str(item.icon);
        let pad = (inner.width as usize)
            .saturating_sub(UnicodeWidthStr::width(item.label) + UnicodeWidthStr::width(icon) + 2);
        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(item.label),
            Span::raw(" ".repeat(pad)),
            Span::raw(icon),
        ]);

        f.render_widget(Paragraph::new(line).style(row_style), item_area);
        geometry.record(ElementId::DropdownItem(i), item_area, panel_area);
        row += 1;

        let position = item_position(i, MENU_ITEMS.len());
        if has_bottom_divider(position) && row < inner.y + inner.height {
            let divider = Line::from(Span::styled(
                "─".repeat(inner.width as usize),
                Style::default().fg(Color::DarkGray),
            ));
            let divider_area = Rect {
                x: inner.x,
                y: row,
                width: inner.width,
                height: 1,
            };
            f.render_widget(Paragraph::new(divider), divider_area);
            row += 1;
        }
    }
}

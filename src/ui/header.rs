use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::IconRenderer;
use super::measure::{ElementId, Geometry};
use crate::model::navigation::{HeaderBackground, HeaderConfig};

/// Render the per-destination header chrome: optional back affordance on
/// the left, title in the middle, optional help affordance on the right.
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    chrome: &HeaderConfig,
    icons: &IconRenderer,
    geometry: &mut Geometry,
) {
    let background = match chrome.background {
        HeaderBackground::App => Style::default().bg(Color::DarkGray),
        HeaderBackground::None => Style::default(),
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(background);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let zones = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8), // Back affordance
            Constraint::Min(0),    // Title
            Constraint::Length(8), // Help affordance
        ])
        .split(inner);

    if chrome.show_back {
        let back_line = Line::from(vec![
            Span::raw(" "),
            icons.chrome_glyph("arrow-back"),
            Span::raw(" Back"),
        ]);
        f.render_widget(Paragraph::new(back_line), zones[0]);
        geometry.record(ElementId::HeaderBack, zones[0], area);
    }

    if !chrome.title.is_empty() {
        let title = Paragraph::new(Line::from(Span::styled(
            chrome.title,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, zones[1]);
    }

    if chrome.help_link {
        let help_line = Line::from(vec![icons.chrome_glyph("help-circle-outline"), Span::raw(" ")]);
        f.render_widget(
            Paragraph::new(help_line).alignment(Alignment::Right),
            zones[2],
        );
        geometry.record(ElementId::HeaderHelp, zones[2], area);
    }
}

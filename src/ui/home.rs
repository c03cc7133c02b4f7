use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::layout::calculate_home_layout;
use super::measure::ElementId;
use crate::{ActionKind, App};

/// Render the home screen: the balance block and the row of four action
/// buttons. All interactivity lives in the handlers; this function only
/// derives the view and records element geometry for them.
pub fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let layout = calculate_home_layout(area);

    let balance_line = Line::from(vec![
        Span::styled(
            app.model.account.display_balance(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.model.account.currency_glyph.clone(),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let balance = Paragraph::new(vec![balance_line, Line::from("")]).alignment(Alignment::Center);
    f.render_widget(balance, layout.balance_area);

    for (i, kind) in ActionKind::ALL.iter().enumerate() {
        let button_area = layout.actions[i];
        render_action_button(f, button_area, *kind, app);
        app.geometry
            .record(ElementId::Action(*kind), button_area, area);
    }
}

/// One round-button analogue: icon above label inside a rounded border
fn render_action_button(f: &mut Frame, area: Rect, kind: ActionKind, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(app.icon_renderer.glyph(kind.icon_id())),
        Line::from(Span::raw(kind.label())),
    ];

    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(button, area);
}

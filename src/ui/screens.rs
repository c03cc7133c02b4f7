use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the index (welcome) screen
pub fn render_index(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "banktui",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("A better way to bank, in your terminal."),
        Line::from(""),
        Line::from(vec![
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::raw(" log in    "),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::raw(" sign up"),
        ]),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Render the signup screen
pub fn render_signup(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Let's get started!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Account creation is not available in this build."),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Render the login screen
pub fn render_login(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Welcome back",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("enter", Style::default().fg(Color::Yellow)),
            Span::raw(" to continue to your account."),
        ]),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Render the help destination as a modal popup over the screen beneath
/// it (the destination table marks it `modal`).
pub fn render_help_modal(f: &mut Frame, area: Rect) {
    let popup_width = 46u16.min(area.width);
    let popup_height = 10u16.min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    let text = "Move between screens with the keys shown in the\n\
        legend at the bottom. On the home screen, the More\n\
        button opens a menu; click anywhere outside the\n\
        menu to dismiss it.\n\n\
        Press esc to close this window.";

    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Help")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

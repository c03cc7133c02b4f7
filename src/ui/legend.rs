use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::navigation::ScreenId;

/// Key hints for the active screen
fn hints(screen: ScreenId, dropdown_open: bool) -> &'static [(&'static str, &'static str)] {
    match screen {
        ScreenId::Index => &[("l", "log in"), ("s", "sign up"), ("q", "quit")],
        ScreenId::Signup => &[("esc", "back"), ("q", "quit")],
        ScreenId::Login => &[
            ("enter", "continue"),
            ("?", "help"),
            ("esc", "back"),
            ("q", "quit"),
        ],
        ScreenId::Help => &[("esc", "close"), ("q", "quit")],
        ScreenId::Home => {
            if dropdown_open {
                &[("m", "close menu"), ("q", "quit")]
            } else {
                &[
                    ("a", "add money"),
                    ("e", "exchange"),
                    ("d", "details"),
                    ("m", "more"),
                    ("q", "quit"),
                ]
            }
        }
    }
}

/// Render the one-line hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, screen: ScreenId, dropdown_open: bool) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints(screen, dropdown_open) {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}   ", action),
            Style::default().fg(Color::Gray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_hints_change_while_menu_open() {
        let closed = hints(ScreenId::Home, false);
        let open = hints(ScreenId::Home, true);
        assert!(closed.iter().any(|(k, _)| *k == "a"));
        assert!(open.iter().all(|(k, _)| *k != "a"));
        assert!(open.iter().any(|(_, a)| *a == "close menu"));
    }

    #[test]
    fn test_every_screen_can_quit() {
        for screen in [
            ScreenId::Index,
            ScreenId::Signup,
            ScreenId::Login,
            ScreenId::Help,
            ScreenId::Home,
        ] {
            assert!(hints(screen, false).iter().any(|(k, _)| *k == "q"));
        }
    }
}

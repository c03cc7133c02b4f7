//! Keyboard Input Handler
//!
//! Key presses are interpreted against the active screen. While the
//! dropdown is open it captures input: only its trigger key reaches it.
//! There is no escape path; dismissal is trigger re-activation or an
//! outside tap.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::navigation::{header_for, ScreenId};
use crate::{handlers::actions, ActionKind, App};

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Quit works everywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.should_quit = true;
        return;
    }
    if key.code == KeyCode::Char('q') {
        app.model.should_quit = true;
        return;
    }

    if app.model.dropdown_open() {
        // Trigger re-activation closes; everything else is swallowed
        if key.code == KeyCode::Char('m') {
            actions::activate(app, ActionKind::More);
        }
        return;
    }

    match app.model.current_screen() {
        ScreenId::Index => match key.code {
            KeyCode::Char('l') => actions::navigate_to(app, ScreenId::Login),
            KeyCode::Char('s') => actions::navigate_to(app, ScreenId::Signup),
            _ => {}
        },
        ScreenId::Signup => match key.code {
            KeyCode::Esc | KeyCode::Backspace => go_back(app),
            _ => {}
        },
        ScreenId::Login => match key.code {
            KeyCode::Char('?') => actions::navigate_to(app, ScreenId::Help),
            KeyCode::Enter => actions::navigate_to(app, ScreenId::Home),
            KeyCode::Esc | KeyCode::Backspace => go_back(app),
            _ => {}
        },
        ScreenId::Help => match key.code {
            // Modal dismissal
            KeyCode::Esc | KeyCode::Enter => actions::navigate_back(app),
            _ => {}
        },
        ScreenId::Home => match key.code {
            KeyCode::Char('a') => actions::activate(app, ActionKind::AddMoney),
            KeyCode::Char('e') => actions::activate(app, ActionKind::Exchange),
            KeyCode::Char('d') => actions::activate(app, ActionKind::Details),
            KeyCode::Char('m') => actions::activate(app, ActionKind::More),
            _ => {}
        },
    }
}

/// Back navigation, honored only where the header declares a back button
fn go_back(app: &mut App) {
    let chrome = header_for(app.model.current_screen());
    if chrome.show_back && app.model.navigation.can_go_back() {
        actions::navigate_back(app);
    }
}

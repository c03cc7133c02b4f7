//! Action dispatch
//!
//! Every action trigger routes through here, from both keyboard and
//! mouse. Only `More` has behavior (it toggles the dropdown); Add money,
//! Exchange, Details, and the menu items themselves are not wired to
//! anything yet. Their activations are logged and otherwise do nothing.
//! Keep the dispatch path in place for when they grow real behavior.

use crate::model::navigation::ScreenId;
use crate::ui::measure::ElementId;
use crate::{ActionKind, App};

/// Navigate forward to a destination
pub fn navigate_to(app: &mut App, screen: ScreenId) {
    app.model.push_screen(screen);
    crate::log_debug(&format!(
        "navigate to '{}' (stack depth {})",
        screen.as_str(),
        app.model.navigation.depth()
    ));
}

/// Navigate back one screen
pub fn navigate_back(app: &mut App) {
    crate::log_debug(&format!(
        "navigate back from '{}'",
        app.model.current_screen().as_str()
    ));
    app.model.pop_screen();
}

/// Activate an action row button
pub fn activate(app: &mut App, kind: ActionKind) {
    match kind {
        ActionKind::More => toggle_dropdown(app),
        other => {
            // Unwired: activation is a no-op beyond the log line
            crate::log_debug(&format!("action '{}' activated (unwired)", other.label()));
        }
    }
}

/// Activate a dropdown menu item. Unwired: a no-op beyond the log line.
pub fn activate_menu_item(key: &str) {
    crate::log_debug(&format!("menu item '{}' activated (unwired)", key));
}

/// Toggle the dropdown from its trigger. Opening measures the trigger's
/// geometry from the last layout pass; before the first layout the
/// measurement is absent and the anchor falls back to the origin.
fn toggle_dropdown(app: &mut App) {
    let trigger = app.geometry.measure(ElementId::Action(ActionKind::More));
    if let Some(m) = &trigger {
        crate::log_debug(&format!(
            "trigger measured at ({}, {}) {}x{}, page ({}, {})",
            m.x, m.y, m.width, m.height, m.page_x, m.page_y
        ));
    }
    if let Some(dd) = app.model.dropdown.as_mut() {
        dd.toggle(trigger);
    }
}

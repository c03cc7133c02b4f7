//! Mouse Input Handler
//!
//! Hit-tests pointer events against the geometry recorded by the last
//! render pass. While the dropdown is open the whole screen acts as its
//! overlay surface: presses land on menu rows, and anything else counts
//! as an outside tap.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::handlers::actions;
use crate::model::dropdown::MENU_ITEMS;
use crate::model::navigation::ScreenId;
use crate::ui::measure::ElementId;
use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => left_down(app, event.column, event.row),
        MouseEventKind::Up(MouseButton::Left) => left_up(app, event.column, event.row),
        MouseEventKind::Drag(MouseButton::Left) => drag(app, event.column, event.row),
        _ => {}
    }
}

fn left_down(app: &mut App, x: u16, y: u16) {
    if app.model.dropdown_open() {
        let hit = app.geometry.hit_test(x, y);
        if let Some(dd) = app.model.dropdown.as_mut() {
            match hit {
                Some(ElementId::DropdownItem(i)) => {
                    if let Some(item) = MENU_ITEMS.get(i) {
                        dd.press_start(item.key);
                    }
                }
                // The panel surface itself (borders, dividers) is neither
                // a press nor a dismissal
                Some(ElementId::DropdownPanel) => {}
                // The overlay covers the whole screen, trigger included
                _ => dd.outside_tap(),
            }
        }
        return;
    }

    match app.geometry.hit_test(x, y) {
        Some(ElementId::Action(kind)) => actions::activate(app, kind),
        Some(ElementId::HeaderBack) => actions::navigate_back(app),
        Some(ElementId::HeaderHelp) => actions::navigate_to(app, ScreenId::Help),
        _ => {}
    }
}

fn left_up(app: &mut App, x: u16, y: u16) {
    let hit = app.geometry.hit_test(x, y);
    if let Some(dd) = app.model.dropdown.as_mut() {
        if let Some(pressed) = dd.pressed_key {
            // Release over the pressed row activates it
            if let Some(ElementId::DropdownItem(i)) = hit {
                if MENU_ITEMS.get(i).map(|item| item.key) == Some(pressed) {
                    actions::activate_menu_item(pressed);
                }
            }
            dd.press_end();
        }
    }
}

fn drag(app: &mut App, x: u16, y: u16) {
    let hit = app.geometry.hit_test(x, y);
    if let Some(dd) = app.model.dropdown.as_mut() {
        if let Some(pressed) = dd.pressed_key {
            let still_on_item = matches!(
                hit,
                Some(ElementId::DropdownItem(i))
                    if MENU_ITEMS.get(i).map(|item| item.key) == Some(pressed)
            );
            if !still_on_item {
                // Dragging off the row cancels the press feedback
                dd.press_end();
            }
        }
    }
}

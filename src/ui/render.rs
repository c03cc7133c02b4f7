use ratatui::Frame;

use super::{dropdown, header, home, layout, legend, screens};
use crate::model::navigation::{header_for, ScreenId};
use crate::App;

/// Main render function - orchestrates all UI rendering
///
/// The whole view is re-derived from the model on every call; there is
/// no retained scene or dependency tracking. Geometry recorded here is
/// what the handlers measure and hit-test until the next frame.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.geometry.begin_frame();

    let current = app.model.current_screen();

    // Modal destinations draw as a popup over the screen beneath them,
    // which keeps its own header chrome.
    let is_modal = header_for(current).modal;
    let base_screen = if is_modal {
        app.model.navigation.previous().unwrap_or(current)
    } else {
        current
    };

    let chrome = header_for(base_screen);
    let layout_info = layout::calculate_layout(size, chrome.visible);

    if let Some(header_area) = layout_info.header_area {
        header::render_header(f, header_area, &chrome, &app.icon_renderer, &mut app.geometry);
    }

    match base_screen {
        ScreenId::Index => screens::render_index(f, layout_info.content_area),
        ScreenId::Signup => screens::render_signup(f, layout_info.content_area),
        ScreenId::Login => screens::render_login(f, layout_info.content_area),
        ScreenId::Home => home::render_home(f, layout_info.content_area, app),
        // Help only ever appears above another screen; as a base it has
        // nothing of its own to draw.
        ScreenId::Help => {}
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        current,
        app.model.dropdown_open(),
    );

    if is_modal {
        screens::render_help_modal(f, size);
    }

    // Overlay renders last so it sits above everything else
    if let Some(dd) = app.model.dropdown.as_ref() {
        if dd.is_open {
            dropdown::render_dropdown(f, size, dd, &app.icon_renderer, &mut app.geometry);
        }
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Header chrome area, when the active destination declares one
    pub header_area: Option<Rect>,
    /// Main screen content area
    pub content_area: Rect,
    /// Hotkey legend at the bottom
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, header_visible: bool) -> LayoutInfo {
    let header_height = if header_visible { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header chrome (0 when hidden)
            Constraint::Min(3),                // Screen content
            Constraint::Length(1),             // Hotkey legend
        ])
        .split(terminal_size);

    let header_area = if header_visible {
        Some(main_chunks[0])
    } else {
        None
    };

    LayoutInfo {
        header_area,
        content_area: main_chunks[1],
        legend_area: main_chunks[2],
    }
}

/// Layout of the home screen: balance block above a row of four
/// equal-width action buttons
pub struct HomeLayout {
    pub balance_area: Rect,
    pub action_row: Rect,
    pub actions: [Rect; 4],
}

pub fn calculate_home_layout(content: Rect) -> HomeLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Top margin
            Constraint::Length(2),      // Balance
            Constraint::Percentage(15), // Gap
            Constraint::Length(4),      // Action row
            Constraint::Min(0),
        ])
        .split(content);

    let balance_area = vertical[1];
    let action_row = vertical[3];

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(2)
        .spacing(2)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(action_row);

    HomeLayout {
        balance_area,
        action_row,
        actions: [buttons[0], buttons[1], buttons[2], buttons[3]],
    }
}

// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (header, content, legend, home areas)
// - measure: Records on-screen geometry of interactive elements so
//   handlers can measure and hit-test them
// - render: Main orchestration function that coordinates all rendering
// - header: Renders per-destination header chrome (back/help affordances)
// - home: Renders the home screen (balance, action row)
// - screens: Renders the static destinations (index, signup, login, help)
// - dropdown: Renders the dropdown overlay panel
// - legend: Renders the hotkey legend

pub mod dropdown;
pub mod header;
pub mod home;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod measure;
pub mod render;
pub mod screens;

// Re-export main render function for convenience
pub use render::render;

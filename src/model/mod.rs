//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **NavigationModel**: screen stack and per-destination header chrome
//! - **AccountModel**: the displayed balance
//! - **DropdownState**: the dropdown menu (only while home is mounted)
//!
//! Key principles:
//! - Clone + Debug: can snapshot state
//! - No services: terminal I/O lives in the runtime
//! - State transitions happen synchronously in input handlers; the view
//!   is re-derived from the model every frame

pub mod account;
pub mod dropdown;
pub mod navigation;

pub use account::AccountModel;
pub use dropdown::DropdownState;
pub use navigation::NavigationModel;

use navigation::ScreenId;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Screen stack and header chrome
    pub navigation: NavigationModel,

    /// Balance shown on the home screen
    pub account: AccountModel,

    /// Dropdown menu state; `Some` exactly while the home screen is the
    /// active destination. Reconstructed fresh on each mount.
    pub dropdown: Option<DropdownState>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create initial model at the index screen
    pub fn new() -> Self {
        Self {
            navigation: NavigationModel::new(),
            account: AccountModel::new(),
            dropdown: None,
            should_quit: false,
        }
    }

    /// Currently active screen
    pub fn current_screen(&self) -> ScreenId {
        self.navigation.current()
    }

    /// Navigate to a destination, mounting/unmounting screen-local state
    pub fn push_screen(&mut self, screen: ScreenId) {
        self.navigation.push(screen);
        self.sync_dropdown_mount();
    }

    /// Go back one screen
    pub fn pop_screen(&mut self) {
        self.navigation.pop();
        self.sync_dropdown_mount();
    }

    /// Whether the dropdown overlay is currently open
    pub fn dropdown_open(&self) -> bool {
        self.dropdown.as_ref().map(|d| d.is_open).unwrap_or(false)
    }

    /// The dropdown lives exactly as long as the home screen is active.
    /// Leaving home drops the instance; returning creates a fresh one.
    fn sync_dropdown_mount(&mut self) {
        let on_home = self.navigation.current() == ScreenId::Home;
        match (on_home, self.dropdown.is_some()) {
            (true, false) => self.dropdown = Some(DropdownState::new()),
            (false, true) => self.dropdown = None,
            _ => {}
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

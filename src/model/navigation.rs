//! Navigation Model
//!
//! Stack-based screen navigation plus the static header chrome declared
//! for each destination. Header configuration is pure data; rendering
//! decides how to draw it.

/// Named navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Index,
    Signup,
    Login,
    Help,
    Home,
}

impl ScreenId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Index => "index",
            ScreenId::Signup => "signup",
            ScreenId::Login => "login",
            ScreenId::Help => "help",
            ScreenId::Home => "home",
        }
    }
}

/// Header background token, mapped to a concrete color by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderBackground {
    None,
    App,
}

/// Static per-destination header chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub title: &'static str,
    /// Whether the header bar is drawn at all
    pub visible: bool,
    /// Back affordance on the left edge
    pub show_back: bool,
    /// Help affordance on the right edge (login only)
    pub help_link: bool,
    /// Destination is presented as a modal over its parent screen
    pub modal: bool,
    pub background: HeaderBackground,
}

/// The declarative destination table. One entry per screen; everything
/// here is fixed at compile time.
pub fn header_for(screen: ScreenId) -> HeaderConfig {
    match screen {
        ScreenId::Index => HeaderConfig {
            title: "",
            visible: false,
            show_back: false,
            help_link: false,
            modal: false,
            background: HeaderBackground::None,
        },
        ScreenId::Signup => HeaderConfig {
            title: "",
            visible: true,
            show_back: true,
            help_link: false,
            modal: false,
            background: HeaderBackground::App,
        },
        ScreenId::Login => HeaderConfig {
            title: "",
            visible: true,
            show_back: true,
            help_link: true,
            modal: false,
            background: HeaderBackground::App,
        },
        ScreenId::Help => HeaderConfig {
            title: "Help",
            visible: false,
            show_back: false,
            help_link: false,
            modal: true,
            background: HeaderBackground::None,
        },
        ScreenId::Home => HeaderConfig {
            title: "",
            visible: false,
            show_back: false,
            help_link: false,
            modal: false,
            background: HeaderBackground::None,
        },
    }
}

/// Navigation state (screen stack)
///
/// Invariant: the stack is never empty; `Index` is the root.
#[derive(Clone, Debug)]
pub struct NavigationModel {
    stack: Vec<ScreenId>,
}

impl NavigationModel {
    /// Create initial navigation model at the index screen
    pub fn new() -> Self {
        Self {
            stack: vec![ScreenId::Index],
        }
    }

    /// Currently active screen (top of stack)
    pub fn current(&self) -> ScreenId {
        *self.stack.last().unwrap_or(&ScreenId::Index)
    }

    /// Screen beneath the current one, if any. Used to render the
    /// backdrop of modally-presented destinations.
    pub fn previous(&self) -> Option<ScreenId> {
        if self.stack.len() >= 2 {
            self.stack.get(self.stack.len() - 2).copied()
        } else {
            None
        }
    }

    pub fn push(&mut self, screen: ScreenId) {
        self.stack.push(screen);
    }

    /// Go back one screen. No-op at the root.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_starts_at_index() {
        let nav = NavigationModel::new();
        assert_eq!(nav.current(), ScreenId::Index);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavigationModel::new();
        nav.push(ScreenId::Login);
        assert_eq!(nav.current(), ScreenId::Login);
        assert!(nav.can_go_back());

        nav.pop();
        assert_eq!(nav.current(), ScreenId::Index);
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut nav = NavigationModel::new();
        nav.pop();
        nav.pop();
        assert_eq!(nav.current(), ScreenId::Index);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_previous_screen() {
        let mut nav = NavigationModel::new();
        assert!(nav.previous().is_none());

        nav.push(ScreenId::Login);
        nav.push(ScreenId::Help);
        assert_eq!(nav.previous(), Some(ScreenId::Login));
    }

    #[test]
    fn test_index_header_hidden() {
        let chrome = header_for(ScreenId::Index);
        assert!(!chrome.visible);
        assert!(!chrome.show_back);
    }

    #[test]
    fn test_signup_header_has_back_button() {
        let chrome = header_for(ScreenId::Signup);
        assert!(chrome.visible);
        assert!(chrome.show_back);
        assert!(!chrome.help_link);
        assert_eq!(chrome.title, "");
        assert_eq!(chrome.background, HeaderBackground::App);
    }

    #[test]
    fn test_login_header_has_help_link() {
        let chrome = header_for(ScreenId::Login);
        assert!(chrome.visible);
        assert!(chrome.show_back);
        assert!(chrome.help_link);
    }

    #[test]
    fn test_help_is_modal() {
        let chrome = header_for(ScreenId::Help);
        assert!(chrome.modal);
        assert_eq!(chrome.title, "Help");
    }

    #[test]
    fn test_only_login_gets_help_link() {
        for screen in [
            ScreenId::Index,
            ScreenId::Signup,
            ScreenId::Help,
            ScreenId::Home,
        ] {
            assert!(!header_for(screen).help_link, "{:?}", screen);
        }
    }

    #[test]
    fn test_navigation_model_is_cloneable() {
        let nav = NavigationModel::new();
        let _cloned = nav.clone();
    }
}

//! Dropdown Menu Model
//!
//! The one stateful component: a toggleable overlay menu anchored below
//! its trigger button, with per-item pressed feedback and outside-tap
//! dismissal. Exactly one `DropdownState` exists per mounted menu; it is
//! created fresh when the home screen mounts and dropped when it unmounts.

use std::time::Instant;

/// On-screen geometry of a mounted element, as reported by the
/// measurement step. `x`/`y` are relative to the containing area,
/// `page_x`/`page_y` are absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub page_x: u16,
    pub page_y: u16,
}

/// Computed top-left coordinate for the dropdown panel. May be negative
/// when the trigger sits near the left screen edge; rendering clamps it
/// into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub top: i32,
    pub left: i32,
}

impl Anchor {
    pub const ORIGIN: Anchor = Anchor { top: 0, left: 0 };
}

/// A single entry in the dropdown menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The fixed, ordered menu. Order is display-significant: the first and
/// last entries get distinct corner treatment.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        key: "statement",
        label: "Statement",
        icon: "menu",
    },
    MenuItem {
        key: "converter",
        label: "Converter",
        icon: "refresh",
    },
    MenuItem {
        key: "background",
        label: "Background",
        icon: "image",
    },
    MenuItem {
        key: "account",
        label: "Add new account",
        icon: "add-circle",
    },
];

/// Dropdown open/close state machine plus per-item press feedback
///
/// Invariant: `pressed_key`, when set, is the key of a currently rendered
/// menu item. `anchor` is only meaningful while `is_open`; it is
/// recomputed on every closed-to-open transition from the trigger's
/// current geometry, never reused from a previous open.
#[derive(Clone, Debug)]
pub struct DropdownState {
    pub is_open: bool,
    pub anchor: Anchor,
    pub pressed_key: Option<&'static str>,
    /// When the menu last entered the open state; drives the entrance
    /// tween. Cleared on close.
    pub opened_at: Option<Instant>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            anchor: Anchor::ORIGIN,
            pressed_key: None,
            opened_at: None,
        }
    }

    /// Toggle on trigger activation. Opening measures the trigger and
    /// recomputes the anchor; a missing measurement (element not yet laid
    /// out) falls back to the origin rather than failing.
    pub fn toggle(&mut self, trigger: Option<Measurement>) {
        if self.is_open {
            self.close();
        } else {
            self.anchor = crate::logic::dropdown::compute_anchor(trigger.as_ref());
            self.opened_at = Some(Instant::now());
            self.is_open = true;
        }
    }

    /// Tap on the overlay surface outside the panel. Dismisses when open,
    /// no-op when closed.
    pub fn outside_tap(&mut self) {
        if self.is_open {
            self.close();
        }
    }

    /// Press-start on the item with `key`. Ignored while closed (there is
    /// nothing rendered to press).
    pub fn press_start(&mut self, key: &'static str) {
        if self.is_open {
            self.pressed_key = Some(key);
        }
    }

    /// Press-end or drag-off: clear the highlight
    pub fn press_end(&mut self) {
        self.pressed_key = None;
    }

    /// Milliseconds since the menu opened, while open
    pub fn open_elapsed_ms(&self) -> Option<u64> {
        self.opened_at.map(|at| at.elapsed().as_millis() as u64)
    }

    /// Whether the entrance tween is still running (drives the frame rate)
    pub fn is_animating(&self) -> bool {
        self.open_elapsed_ms()
            .map(crate::logic::animation::is_entrance_active)
            .unwrap_or(false)
    }

    fn close(&mut self) {
        // The overlay unmounts immediately; the exit tween is truncated.
        self.is_open = false;
        self.opened_at = None;
        self.pressed_key = None;
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_at(page_x: u16, page_y: u16) -> Measurement {
        Measurement {
            x: page_x,
            y: page_y,
            width: 50,
            height: 40,
            page_x,
            page_y,
        }
    }

    #[test]
    fn test_initial_state() {
        let dd = DropdownState::new();
        assert!(!dd.is_open);
        assert_eq!(dd.anchor, Anchor::ORIGIN);
        assert!(dd.pressed_key.is_none());
        assert!(dd.opened_at.is_none());
    }

    #[test]
    fn test_toggle_alternates_strictly() {
        let mut dd = DropdownState::new();
        for i in 0..6 {
            dd.toggle(Some(trigger_at(200, 100)));
            assert_eq!(dd.is_open, i % 2 == 0);
        }
    }

    #[test]
    fn test_open_computes_anchor_from_measurement() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));
        assert_eq!(dd.anchor, Anchor { top: 150, left: 30 });
    }

    #[test]
    fn test_open_without_measurement_falls_back_to_origin() {
        let mut dd = DropdownState::new();
        dd.toggle(None);
        assert!(dd.is_open);
        assert_eq!(dd.anchor, Anchor::ORIGIN);
    }

    #[test]
    fn test_reopen_recomputes_anchor() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));
        dd.toggle(None); // close; mid-animation close is the same path
        dd.toggle(Some(trigger_at(20, 4)));
        assert_eq!(
            dd.anchor,
            Anchor {
                top: 4 + 40 + 10,
                left: 20 - 170
            }
        );
    }

    #[test]
    fn test_outside_tap_dismisses_when_open() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));
        dd.outside_tap();
        assert!(!dd.is_open);
    }

    #[test]
    fn test_outside_tap_is_noop_when_closed() {
        let mut dd = DropdownState::new();
        dd.outside_tap();
        assert!(!dd.is_open);
        assert!(dd.opened_at.is_none());
    }

    #[test]
    fn test_press_lifecycle() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));

        dd.press_start("converter");
        assert_eq!(dd.pressed_key, Some("converter"));

        dd.press_end();
        assert!(dd.pressed_key.is_none());
    }

    #[test]
    fn test_press_ignored_while_closed() {
        let mut dd = DropdownState::new();
        dd.press_start("statement");
        assert!(dd.pressed_key.is_none());
    }

    #[test]
    fn test_close_clears_press_and_timer() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));
        dd.press_start("account");

        dd.toggle(None); // trigger re-activation while open
        assert!(!dd.is_open);
        assert!(dd.pressed_key.is_none());
        assert!(dd.opened_at.is_none());
    }

    #[test]
    fn test_menu_sequence_is_fixed() {
        let keys: Vec<_> = MENU_ITEMS.iter().map(|item| item.key).collect();
        assert_eq!(keys, ["statement", "converter", "background", "account"]);
        assert_eq!(MENU_ITEMS[3].label, "Add new account");
    }

    #[test]
    fn test_menu_keys_are_unique() {
        for (i, a) in MENU_ITEMS.iter().enumerate() {
            for b in MENU_ITEMS.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_opened_at_set_while_open() {
        let mut dd = DropdownState::new();
        dd.toggle(Some(trigger_at(200, 100)));
        assert!(dd.opened_at.is_some());
        assert!(dd.open_elapsed_ms().is_some());
    }
}

//! Tests for the dropdown menu state machine
//!
//! The dropdown is the one stateful component: visibility, anchor
//! position, and pressed-item highlighting. These tests pin down its
//! contract: strict open/close alternation, outside-tap dismissal,
//! press feedback lifecycle, and fresh anchor computation on every open.

use banktui::logic::dropdown::{compute_anchor, item_position, ItemPosition};
use banktui::model::dropdown::{Anchor, DropdownState, Measurement, MENU_ITEMS};

fn measurement(page_x: u16, page_y: u16, width: u16, height: u16) -> Measurement {
    Measurement {
        x: page_x,
        y: page_y,
        width,
        height,
        page_x,
        page_y,
    }
}

/// Test: toggling strictly alternates is_open, starting from closed
#[test]
fn test_toggle_sequence_alternates() {
    let mut dd = DropdownState::new();
    assert!(!dd.is_open);

    let mut expected = false;
    for _ in 0..10 {
        dd.toggle(Some(measurement(200, 100, 50, 40)));
        expected = !expected;
        assert_eq!(dd.is_open, expected);
    }
}

/// Test: the documented anchor arithmetic
/// trigger at (pageX=200, pageY=100, 50x40) opens at {top: 150, left: 30}
#[test]
fn test_anchor_arithmetic() {
    let m = measurement(200, 100, 50, 40);
    assert_eq!(compute_anchor(Some(&m)), Anchor { top: 150, left: 30 });

    let mut dd = DropdownState::new();
    dd.toggle(Some(m));
    assert_eq!(dd.anchor, Anchor { top: 150, left: 30 });
}

/// Test: unresolved measurement degrades to the origin without error
#[test]
fn test_missing_measurement_defaults_to_origin() {
    let mut dd = DropdownState::new();
    dd.toggle(None);
    assert!(dd.is_open);
    assert_eq!(dd.anchor, Anchor { top: 0, left: 0 });
}

/// Test: outside tap dismisses an open menu and does nothing to a closed one
#[test]
fn test_outside_tap() {
    let mut dd = DropdownState::new();

    dd.outside_tap();
    assert!(!dd.is_open, "outside tap while closed must be a no-op");

    dd.toggle(Some(measurement(200, 100, 50, 40)));
    dd.outside_tap();
    assert!(!dd.is_open, "outside tap while open must dismiss");
}

/// Test: pressed_key tracks press-start and clears on press-end
#[test]
fn test_press_feedback_lifecycle() {
    let mut dd = DropdownState::new();
    dd.toggle(Some(measurement(200, 100, 50, 40)));

    for item in MENU_ITEMS.iter() {
        dd.press_start(item.key);
        assert_eq!(dd.pressed_key, Some(item.key));

        dd.press_end();
        assert!(dd.pressed_key.is_none());
    }
}

/// Test: pressed_key only ever holds keys of rendered menu items
#[test]
fn test_pressed_key_is_a_menu_key() {
    let mut dd = DropdownState::new();
    dd.toggle(None);
    dd.press_start("converter");

    let key = dd.pressed_key.expect("press recorded");
    assert!(MENU_ITEMS.iter().any(|item| item.key == key));
}

/// Test: closing mid-animation works and the next open recomputes the
/// anchor from fresh geometry, not the stale one
#[test]
fn test_reopen_uses_fresh_anchor() {
    let mut dd = DropdownState::new();

    dd.toggle(Some(measurement(200, 100, 50, 40)));
    assert_eq!(dd.anchor, Anchor { top: 150, left: 30 });

    // Immediately re-activate the trigger (entrance tween still running)
    dd.toggle(Some(measurement(200, 100, 50, 40)));
    assert!(!dd.is_open);
    assert!(dd.opened_at.is_none());

    // The trigger has moved; the anchor must follow
    dd.toggle(Some(measurement(60, 10, 14, 4)));
    assert_eq!(
        dd.anchor,
        Anchor {
            top: 10 + 4 + 10,
            left: 60 - 170
        }
    );
}

/// Test: closing clears the press highlight with the overlay
#[test]
fn test_close_clears_pressed_key() {
    let mut dd = DropdownState::new();
    dd.toggle(None);
    dd.press_start("background");

    dd.outside_tap();
    assert!(dd.pressed_key.is_none());
}

/// Test: ordinal styling over the fixed four-item sequence
/// Only `statement` is first, only `account` is last
#[test]
fn test_ordinal_styling() {
    let len = MENU_ITEMS.len();

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let position = item_position(i, len);
        match item.key {
            "statement" => assert_eq!(position, ItemPosition::First),
            "account" => assert_eq!(position, ItemPosition::Last),
            _ => assert_eq!(position, ItemPosition::Middle),
        }
    }
}

/// Test: ordinal styling is independent of press state
#[test]
fn test_ordinal_styling_ignores_press_state() {
    let mut dd = DropdownState::new();
    dd.toggle(None);

    let len = MENU_ITEMS.len();
    let before: Vec<_> = (0..len).map(|i| item_position(i, len)).collect();

    dd.press_start("background");
    let during: Vec<_> = (0..len).map(|i| item_position(i, len)).collect();

    assert_eq!(before, during);
}

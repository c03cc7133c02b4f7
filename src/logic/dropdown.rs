//! Dropdown placement and styling logic
//!
//! Pure functions for the dropdown menu: where the panel goes when it
//! opens, and how each item is styled based on its position in the list.

use crate::model::dropdown::{Anchor, Measurement};

/// Vertical gap between the trigger's bottom edge and the panel
pub const ANCHOR_GAP: i32 = 10;

/// Leftward shift of the panel relative to the trigger's left edge. The
/// panel is wider than the trigger; shifting left keeps it under the
/// trigger instead of hanging off the right edge.
pub const ANCHOR_LEFT_SHIFT: i32 = 170;

/// Compute the panel anchor from the trigger's current geometry.
///
/// `top = page_y + height + ANCHOR_GAP`, `left = page_x - ANCHOR_LEFT_SHIFT`.
/// A missing measurement (trigger not yet laid out) yields the origin, a
/// degraded but non-crashing placement.
pub fn compute_anchor(trigger: Option<&Measurement>) -> Anchor {
    match trigger {
        Some(m) => Anchor {
            top: m.page_y as i32 + m.height as i32 + ANCHOR_GAP,
            left: m.page_x as i32 - ANCHOR_LEFT_SHIFT,
        },
        None => Anchor::ORIGIN,
    }
}

/// Ordinal position of an item in the menu. Drives corner rounding and
/// divider presence; keyed off position, not item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPosition {
    First,
    Middle,
    Last,
}

pub fn item_position(index: usize, len: usize) -> ItemPosition {
    if index == 0 {
        ItemPosition::First
    } else if index + 1 == len {
        ItemPosition::Last
    } else {
        ItemPosition::Middle
    }
}

/// The last item suppresses its bottom divider
pub fn has_bottom_divider(position: ItemPosition) -> bool {
    position != ItemPosition::Last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dropdown::MENU_ITEMS;

    #[test]
    fn test_anchor_from_measurement() {
        let m = Measurement {
            x: 200,
            y: 100,
            width: 50,
            height: 40,
            page_x: 200,
            page_y: 100,
        };
        let anchor = compute_anchor(Some(&m));
        assert_eq!(anchor, Anchor { top: 150, left: 30 });
    }

    #[test]
    fn test_anchor_can_go_negative() {
        let m = Measurement {
            x: 60,
            y: 4,
            width: 12,
            height: 3,
            page_x: 60,
            page_y: 4,
        };
        let anchor = compute_anchor(Some(&m));
        assert_eq!(anchor.top, 17);
        assert_eq!(anchor.left, -110);
    }

    #[test]
    fn test_anchor_defaults_to_origin_without_measurement() {
        assert_eq!(compute_anchor(None), Anchor::ORIGIN);
    }

    #[test]
    fn test_item_positions_for_four_items() {
        let len = MENU_ITEMS.len();
        assert_eq!(item_position(0, len), ItemPosition::First);
        assert_eq!(item_position(1, len), ItemPosition::Middle);
        assert_eq!(item_position(2, len), ItemPosition::Middle);
        assert_eq!(item_position(3, len), ItemPosition::Last);
    }

    #[test]
    fn test_only_first_and_last_get_corner_styling() {
        let len = MENU_ITEMS.len();
        let firsts: Vec<_> = (0..len)
            .filter(|&i| item_position(i, len) == ItemPosition::First)
            .collect();
        let lasts: Vec<_> = (0..len)
            .filter(|&i| item_position(i, len) == ItemPosition::Last)
            .collect();
        assert_eq!(firsts, vec![0]); // statement
        assert_eq!(lasts, vec![3]); // account
    }

    #[test]
    fn test_divider_suppressed_on_last() {
        assert!(has_bottom_divider(ItemPosition::First));
        assert!(has_bottom_divider(ItemPosition::Middle));
        assert!(!has_bottom_divider(ItemPosition::Last));
    }

    #[test]
    fn test_two_item_list_has_no_middle() {
        assert_eq!(item_position(0, 2), ItemPosition::First);
        assert_eq!(item_position(1, 2), ItemPosition::Last);
    }
}

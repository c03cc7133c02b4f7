//! Element geometry registry
//!
//! The render pass records the on-screen rect of every interactive
//! element; handlers read the registry back to measure elements (for
//! dropdown anchoring) and to hit-test mouse events. Measurements always
//! reflect the last completed layout pass; an element that has not been
//! laid out yet measures as `None`.

use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::logic::layout::point_in_rect;
use crate::model::dropdown::{Measurement, MENU_ITEMS};
use crate::ActionKind;

/// Identity of an interactive on-screen element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// An action row button (the `More` button is the dropdown trigger)
    Action(ActionKind),
    /// Header back affordance
    HeaderBack,
    /// Header help affordance (login)
    HeaderHelp,
    /// The dropdown panel surface
    DropdownPanel,
    /// A dropdown menu row, by ordinal position
    DropdownItem(usize),
}

/// Recorded geometry for one frame: element area plus its containing area
#[derive(Debug, Default)]
pub struct Geometry {
    rects: HashMap<ElementId, (Rect, Rect)>,
}

impl Geometry {
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
        }
    }

    /// Clear at the start of a render pass; elements re-record as they
    /// draw, so anything not currently rendered stops hit-testing.
    pub fn begin_frame(&mut self) {
        self.rects.clear();
    }

    pub fn record(&mut self, id: ElementId, area: Rect, within: Rect) {
        self.rects.insert(id, (area, within));
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).map(|(area, _)| *area)
    }

    /// Measure current on-screen geometry of an element. `x`/`y` are
    /// relative to the containing area, `page_x`/`page_y` absolute.
    pub fn measure(&self, id: ElementId) -> Option<Measurement> {
        self.rects.get(&id).map(|(area, within)| Measurement {
            x: area.x.saturating_sub(within.x),
            y: area.y.saturating_sub(within.y),
            width: area.width,
            height: area.height,
            page_x: area.x,
            page_y: area.y,
        })
    }

    /// Find the element under a screen coordinate, most specific first:
    /// dropdown rows, then the panel surface, then header affordances,
    /// then action buttons.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ElementId> {
        let mut order: Vec<ElementId> = Vec::with_capacity(MENU_ITEMS.len() + 7);
        for i in 0..MENU_ITEMS.len() {
            order.push(ElementId::DropdownItem(i));
        }
        order.push(ElementId::DropdownPanel);
        order.push(ElementId::HeaderBack);
        order.push(ElementId::HeaderHelp);
        for kind in ActionKind::ALL {
            order.push(ElementId::Action(kind));
        }

        order.into_iter().find(|id| {
            self.rect(*id)
                .map(|r| point_in_rect(x, y, r))
                .unwrap_or(false)
        })
    }
}

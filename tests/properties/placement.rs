//! Property tests for overlay placement.

use proptest::prelude::*;

use choosy::domain::services::{place_overlay, PlacementRules};
use choosy::domain::value_objects::{Rect, Size};

/// Viewport plus a one-row trigger inside it
fn scene() -> impl Strategy<Value = (Rect, Rect)> {
    (1u16..200, 2u16..100).prop_flat_map(|(w, h)| {
        (0..w, 0..h).prop_flat_map(move |(x, y)| {
            (1..=w - x).prop_map(move |tw| (Rect::new(0, 0, w, h), Rect::new(x, y, tw, 1)))
        })
    })
}

fn rules() -> impl Strategy<Value = PlacementRules> {
    (0u16..3, 0u16..3, 0u16..50).prop_map(|(gap, edge_margin, min_width)| PlacementRules {
        gap,
        edge_margin,
        min_width,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the overlay never leaves the viewport and never covers the trigger row.
    #[test]
    fn property_overlay_stays_in_viewport(
        (viewport, trigger) in scene(),
        content_w in 0u16..300,
        content_h in 0u16..100,
        rules in rules(),
    ) {
        let placement = place_overlay(trigger, Size::new(content_w, content_h), viewport, rules);
        let area = placement.area;

        prop_assert!(area.x >= viewport.x);
        prop_assert!(area.right() <= viewport.right());
        prop_assert!(area.width <= viewport.width);
        if area.height > 0 {
            prop_assert!(area.y >= viewport.y);
            prop_assert!(area.bottom() <= viewport.bottom());
            prop_assert!(area.bottom() <= trigger.y || area.y >= trigger.bottom());
        }
        prop_assert!(area.height <= content_h);
    }
}

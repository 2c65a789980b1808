//! Overlay placement
//!
//! Positions the overlay next to its trigger inside the viewport. Pure and
//! idempotent: the controller recomputes it on every layout change.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Rect, Size};

/// Which side of the trigger the overlay sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Below,
    Above,
}

/// Computed overlay area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub area: Rect,
    pub side: Side,
}

/// Distances and limits used by [`place_overlay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    /// Rows between trigger and overlay
    pub gap: u16,
    /// Space the overlay keeps from the viewport edge before flipping
    pub edge_margin: u16,
    /// Lower bound for the overlay width
    pub min_width: u16,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            gap: 0,
            edge_margin: 1,
            min_width: 24,
        }
    }
}

/// Place an overlay of `content` size next to `trigger`.
///
/// Below is preferred. The overlay flips above when it does not fit below
/// with `edge_margin` to spare; when it fits on neither side it takes the
/// side with more room and its height is clamped.
pub fn place_overlay(trigger: Rect, content: Size, viewport: Rect, rules: PlacementRules) -> Placement {
    let width = content
        .width
        .max(trigger.width)
        .max(rules.min_width)
        .min(viewport.width);

    let mut x = trigger.x;
    if u32::from(x) + u32::from(width) + u32::from(rules.edge_margin) > u32::from(viewport.right()) {
        x = trigger.right().saturating_sub(width);
    }
    let x = x
        .min(viewport.right().saturating_sub(width))
        .max(viewport.x);

    let below_y = trigger.bottom().saturating_add(rules.gap);
    let room_below = viewport.bottom().saturating_sub(below_y);
    let room_above = trigger
        .y
        .saturating_sub(viewport.y)
        .saturating_sub(rules.gap);
    let wanted = content.height.saturating_add(rules.edge_margin);

    let (side, height) = if wanted <= room_below {
        (Side::Below, content.height)
    } else if wanted <= room_above {
        (Side::Above, content.height)
    } else if room_below >= room_above {
        (Side::Below, content.height.min(room_below))
    } else {
        (Side::Above, content.height.min(room_above))
    };

    let y = match side {
        Side::Below => below_y,
        Side::Above => trigger.y.saturating_sub(rules.gap).saturating_sub(height),
    };

    Placement {
        area: Rect::new(x, y, width, height),
        side,
    }
}

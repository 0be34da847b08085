//! Shared Data Contracts for Maktkart
//!
//! Types crossing the boundary between the dataset, the layout engine and the
//! HTTP API. These are DATA CONTRACTS only - no layout behaviour, no I/O.
//!
//! ## Design Principles
//!
//! 1. **Percent coordinates** - canvas positions are `(x%, y%)` of the canvas
//!    width/height, never pixels
//! 2. **String IDs** - entities and clusters are addressed by their dataset ids
//! 3. **Derive-heavy** - Serialize, Deserialize, Clone, Debug for all types

pub mod cluster;
pub mod entity;
pub mod revolving_door;

use serde::{Deserialize, Serialize};

pub use cluster::{Cluster, ClusterTable};
pub use entity::{Entity, EntityKind, Financials};
pub use revolving_door::{CareerSide, RevolvingDoorEntry};

// ============================================================================
// CANVAS COORDINATES
// ============================================================================

/// A point on the canvas, in percent of canvas width (`x`) and height (`y`).
///
/// The axes are independent: a radius of 8 means 8% of the width horizontally
/// and 8% of the height vertically, so circles on a non-square canvas render
/// as ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Midpoint of the canvas. Anchor of last resort for unregistered clusters.
pub const CANVAS_CENTER: CanvasPoint = CanvasPoint { x: 50.0, y: 50.0 };

impl CanvasPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians and `radius` percent from `self`.
    pub fn polar_offset(self, angle: f64, radius: f64) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when both coordinates lie in `0.0..=100.0`.
    pub fn within_canvas(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

impl Default for CanvasPoint {
    fn default() -> Self {
        CANVAS_CENTER
    }
}

// charge.rs
// Defines the point charge struct (charge, position, label) that acts as the
// source term for every field and potential evaluation.

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

/// A single point charge on the evaluation plane. Scenarios construct fresh
/// instances on every rebuild; nothing mutates a charge in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge in coulombs. Zero, positive and negative are all valid.
    pub q: f64,
    /// Position in meters.
    pub pos: DVec2,
    /// Display label for markers. Ignored by the physics.
    #[serde(default)]
    pub label: String,
}

impl Charge {
    pub fn new(q: f64, x: f64, y: f64) -> Self {
        Self {
            q,
            pos: DVec2::new(x, y),
            label: String::new(),
        }
    }

    pub fn with_label(q: f64, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            q,
            pos: DVec2::new(x, y),
            label: label.into(),
        }
    }

    /// Whether the renderer should draw this as a positive marker.
    pub fn is_positive(&self) -> bool {
        self.q > 0.0
    }
}

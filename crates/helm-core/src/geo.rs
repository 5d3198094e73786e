//! Planar coordinates and heading conventions.
//!
//! Headings use the compass convention: 0° points along +y ("north") and
//! angles grow clockwise.  Trigonometry happens in the standard mathematical
//! convention (0 rad along +x, counter-clockwise), so every conversion goes
//! through [`compass_to_radians`].

/// Degrees in a full circle.
pub const CIRCLE_DEGREES: f64 = 360.0;

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The position reached by travelling `distance` along compass `heading`.
    pub fn advanced(self, heading: f64, distance: f64) -> Position {
        let theta = compass_to_radians(heading);
        Position {
            x: self.x + theta.cos() * distance,
            y: self.y + theta.sin() * distance,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Convert a compass heading in degrees to a mathematical angle in radians.
#[inline]
pub fn compass_to_radians(heading: f64) -> f64 {
    (90.0 - heading).to_radians()
}

/// Wrap `degrees` into `[0, 360)`.
///
/// Negative inputs get one full circle added before the modulo, which is
/// exact for anything a single step can produce (`|turn| <= 360`).  Inputs
/// further below zero fall back to `rem_euclid`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut d = degrees;
    if d < 0.0 {
        d += CIRCLE_DEGREES;
    }
    d %= CIRCLE_DEGREES;
    if d < 0.0 {
        d = d.rem_euclid(CIRCLE_DEGREES);
    }
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if d >= CIRCLE_DEGREES { 0.0 } else { d }
}

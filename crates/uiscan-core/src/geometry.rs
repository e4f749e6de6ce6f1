//! Geometry types for pixel coordinates and regions.

use serde::{Deserialize, Serialize};

/// A pixel position, origin at the top-left of the image.
///
/// Serializes as a two-element JSON array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    /// Horizontal coordinate (0-based, grows rightward)
    pub x: i32,
    /// Vertical coordinate (0-based, grows downward)
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from(value: [i32; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Point> for [i32; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

/// Axis-aligned bounding box in pixel space.
///
/// Half-open convention: `x2` and `y2` are exclusive, so a valid box always
/// has `x1 < x2` and `y1 < y2`. Serializes as a four-element JSON array
/// `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct BoundingBox {
    /// Left edge (inclusive)
    pub x1: i32,
    /// Top edge (inclusive)
    pub y1: i32,
    /// Right edge (exclusive)
    pub x2: i32,
    /// Bottom edge (exclusive)
    pub y2: i32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Area in pixels.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Midpoint of the box (integer division).
    ///
    /// For a valid box the midpoint always lies within the half-open bounds.
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Check if a point is contained within this box.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x1 && point.x < self.x2 && point.y >= self.y1 && point.y < self.y2
    }

    /// Check if this box intersects another box.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.x2 <= other.x1 || other.x2 <= self.x1 || self.y2 <= other.y1 || other.y2 <= self.y1)
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from(value: [i32; 4]) -> Self {
        Self {
            x1: value[0],
            y1: value[1],
            x2: value[2],
            y2: value[3],
        }
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(value: BoundingBox) -> Self {
        [value.x1, value.y1, value.x2, value.y2]
    }
}

pub use kurbo::{Affine, Point, Vec2};

/// Angle-step index of a frame within a full turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u32);

/// Integer pixel rectangle: `min` corner inclusive, `min + size` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, width: u32, height: u32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn max_x(self) -> i32 {
        self.min_x.saturating_add_unsigned(self.width)
    }

    pub fn max_y(self) -> i32 {
        self.min_y.saturating_add_unsigned(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Center in continuous pixel space (`min + size / 2`).
    pub fn center(self) -> Point {
        Point::new(
            f64::from(self.min_x) + f64::from(self.width) / 2.0,
            f64::from(self.min_y) + f64::from(self.height) / 2.0,
        )
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x() && self.min_y <= y && y < self.max_y()
    }

    /// Overlap of two rectangles; empty (zero-sized at `self.min`) when disjoint.
    pub fn intersect(self, other: Bounds) -> Bounds {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if max_x <= min_x || max_y <= min_y {
            return Bounds::new(self.min_x, self.min_y, 0, 0);
        }
        Bounds::new(
            min_x,
            min_y,
            max_x.abs_diff(min_x),
            max_y.abs_diff(min_y),
        )
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        use crate::foundation::math::mul_div255_u8;

        Self {
            r: mul_div255_u8(u16::from(r), u16::from(a)),
            g: mul_div255_u8(u16::from(g), u16::from(a)),
            b: mul_div255_u8(u16::from(b), u16::from(a)),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use crate::geometry::geo_traits::CollidesWith;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle, stored as its lower-left corner and its size
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "invalid rectangle, width: {width}, height: {height} (both must be positive)"
        );
        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    #[inline(always)]
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    #[inline(always)]
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn centroid(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if `other` lies entirely inside `self`, shared boundaries included.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x_max() >= other.x_max()
            && self.y_max() >= other.y_max()
    }

    /// [`Rect::contains`] with a tolerance for floating point precision.
    /// In edge cases, this method will lean towards containment.
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x) <= FPA(other.x)
            && FPA(self.y) <= FPA(other.y)
            && FPA(self.x_max()) >= FPA(other.x_max())
            && FPA(self.y_max()) >= FPA(other.y_max())
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`, if any.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x, b.x);
        let y_min = f64::max(a.y, b.y);
        let x_max = f64::min(a.x_max(), b.x_max());
        let y_max = f64::min(a.y_max(), b.y_max());
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x: x_min,
                y: y_min,
                width: x_max - x_min,
                height: y_max - y_min,
            })
        } else {
            None
        }
    }
}

/// Strict overlap test: the projections must intersect on both axes with strict
/// inequality. Rectangles that merely touch along an edge do not collide.
impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x < other.x_max()
            && self.x_max() > other.x
            && self.y < other.y_max()
            && self.y_max() > other.y
    }
}

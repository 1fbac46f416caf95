//! Geometric primitives: points, segments, rectangles, affine transforms.
//!
//! All coordinates are f64 page units. Rectangles are axis-aligned and
//! stored as a minimum corner plus non-negative dimensions.

/// Distance below which two coordinates are considered equal.
///
/// Governs point deduplication, row bucketing, and ruling classification.
pub const TOLERANCE: f64 = 3.0;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Affine transform — six values `[a, b, c, d, e, f]` corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// Point transformation: `(x', y') = (a*x + c*y + e, b*x + d*y + f)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// Create a new matrix with the given values.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Identity matrix (no transformation).
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Transform a point through this matrix.
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Concatenate with another matrix: applying the result is equivalent
    /// to applying `self`, then `other`.
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Intersection point of two segments.
    ///
    /// Present only when both segments have non-zero length, are not
    /// parallel, and the intersection parameter lies in `[0, 1]` on both.
    pub fn intersect(&self, other: &Segment) -> Option<Point> {
        if self.length() == 0.0 || other.length() == 0.0 {
            return None;
        }

        let d1x = self.end.x - self.start.x;
        let d1y = self.end.y - self.start.y;
        let d2x = other.end.x - other.start.x;
        let d2y = other.end.y - other.start.y;

        let denom = d1x * d2y - d1y * d2x;
        if denom == 0.0 {
            return None;
        }

        let sx = other.start.x - self.start.x;
        let sy = other.start.y - self.start.y;
        let t = (sx * d2y - sy * d2x) / denom;
        let u = (sx * d1y - sy * d1x) / denom;

        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        Some(Point {
            x: self.start.x + t * d1x,
            y: self.start.y + t * d1y,
        })
    }
}

/// An axis-aligned rectangle: minimum corner plus non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero rectangle, used to represent an empty intersection.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Far edge coordinate on the y axis.
    pub fn far_y(&self) -> f64 {
        self.y + self.height
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Intersection with another rectangle, or the zero rectangle when
    /// the two are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.far_y().min(other.far_y());

        if x1 <= x0 || y1 <= y0 {
            return Rect::zero();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Percentage of the x-projection shared with another rectangle:
    /// `100 * intersection_width / union_width`. Zero if either width is
    /// zero or the projections are disjoint.
    pub fn horizontal_overlap_percent(&self, other: &Rect) -> f64 {
        if self.width == 0.0 || other.width == 0.0 {
            return 0.0;
        }
        let overlap = self.right().min(other.right()) - self.x.max(other.x);
        if overlap <= 0.0 {
            return 0.0;
        }
        let union = self.right().max(other.right()) - self.x.min(other.x);
        100.0 * overlap / union
    }

    /// Percentage of this rectangle's area contained in `other`.
    /// Zero if this rectangle has zero area.
    pub fn percent_inside(&self, other: &Rect) -> f64 {
        let own = self.area();
        if own == 0.0 {
            return 0.0;
        }
        100.0 * self.intersect(other).area() / own
    }

    /// Rotate 90° clockwise about the origin:
    /// `(x, y, w, h) -> (-(y + h), x, h, w)`.
    pub fn rotate90_clockwise(&self) -> Rect {
        Rect::new(-(self.y + self.height), self.x, self.height, self.width)
    }
}

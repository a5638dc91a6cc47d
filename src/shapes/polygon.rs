// Generic polygons and quadrilaterals, plus the point transforms the other
// polygon-family shapes reuse.

use super::collide::{bounds, point_in_polygon, polygon_collides_with_circle, polygons_overlap};
use super::{Circle, Geometry, Point, Rect};
use crate::error::Error;

/// Rotate `p` around `pivot` by `angle_degrees`.
///
/// Standard 2D rotation matrix applied in screen coordinates:
/// ```text
/// x' = cos θ · (x - px) - sin θ · (y - py) + px
/// y' = sin θ · (x - px) + cos θ · (y - py) + py
/// ```
pub fn rotate_point(p: Point, pivot: Point, angle_degrees: f32) -> Point {
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
    let (dx, dy) = (p.0 - pivot.0, p.1 - pivot.1);
    (cos_a * dx - sin_a * dy + pivot.0, sin_a * dx + cos_a * dy + pivot.1)
}

/// Arithmetic mean of a non-empty point list.
pub fn mean_point(points: &[Point]) -> Point {
    let n = points.len() as f32;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
    (sx / n, sy / n)
}

/// Rejects point lists of the wrong size or with NaN/infinite coordinates.
pub(crate) fn validate_points(points: &[Point], kind: &str, expected: VertexCount) -> Result<(), Error> {
    let ok = match expected {
        VertexCount::Exactly(n) => points.len() == n,
        VertexCount::AtLeast(n) => points.len() >= n,
    };
    if !ok {
        return Err(Error::InvalidShape(format!(
            "{kind} needs {expected} points, got {}",
            points.len()
        )));
    }
    if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
        return Err(Error::InvalidShape(format!("{kind} has a non-finite coordinate")));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum VertexCount {
    Exactly(usize),
    AtLeast(usize),
}

impl std::fmt::Display for VertexCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexCount::Exactly(n) => write!(f, "exactly {n}"),
            VertexCount::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A closed polygon; vertex order is the winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from at least 3 vertices.
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        validate_points(&points, "polygon", VertexCount::AtLeast(3))?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mean of the vertices; default pivot for [`Polygon::rotate`].
    pub fn center(&self) -> Point {
        mean_point(&self.points)
    }

    /// New polygon rotated by `angle_degrees` around `pivot` (vertex mean when `None`).
    pub fn rotate(&self, angle_degrees: f32, pivot: Option<Point>) -> Polygon {
        let pivot = pivot.unwrap_or_else(|| self.center());
        Polygon {
            points: self.points.iter().map(|&p| rotate_point(p, pivot, angle_degrees)).collect(),
        }
    }

    /// New polygon moved by (dx, dy).
    pub fn translate(&self, dx: f32, dy: f32) -> Polygon {
        Polygon { points: self.points.iter().map(|&(x, y)| (x + dx, y + dy)).collect() }
    }
}

impl Geometry for Polygon {
    fn contains_point(&self, p: Point) -> bool {
        point_in_polygon(&self.points, p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        polygons_overlap(&self.points, &rect.corners())
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        polygon_collides_with_circle(&self.points, circle.center(), circle.radius())
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_bounds(bounds(&self.points))
    }

    fn name(&self) -> &str {
        "Polygon"
    }
}

/// Exactly four vertices, in winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadrilateral {
    points: [Point; 4],
}

impl Quadrilateral {
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Result<Self, Error> {
        Self::from_slice(&[p1, p2, p3, p4])
    }

    /// Same as [`Quadrilateral::new`] but from a slice, which must hold 4 points.
    pub fn from_slice(points: &[Point]) -> Result<Self, Error> {
        validate_points(points, "quadrilateral", VertexCount::Exactly(4))?;
        Ok(Self { points: [points[0], points[1], points[2], points[3]] })
    }

    // Callers already hold four finite points.
    pub(crate) fn from_array(points: [Point; 4]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Quadrilateral {
        Quadrilateral { points: self.points.map(|(x, y)| (x + dx, y + dy)) }
    }

    /// Rotated copy around `pivot` (vertex mean when `None`).
    pub fn rotate(&self, angle_degrees: f32, pivot: Option<Point>) -> Quadrilateral {
        let pivot = pivot.unwrap_or_else(|| mean_point(&self.points));
        Quadrilateral { points: self.points.map(|p| rotate_point(p, pivot, angle_degrees)) }
    }
}

impl Geometry for Quadrilateral {
    fn contains_point(&self, p: Point) -> bool {
        point_in_polygon(&self.points, p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        polygons_overlap(&self.points, &rect.corners())
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        polygon_collides_with_circle(&self.points, circle.center(), circle.radius())
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_bounds(bounds(&self.points))
    }

    fn name(&self) -> &str {
        "Quadrilateral"
    }
}

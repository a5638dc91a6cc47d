// Triangles: immutable values whose every transform returns a new triangle.
// Visual: rotating a triangle in `update()` and drawing the result each frame
// spins it around its centroid.

use super::collide::{bounds, point_in_polygon, polygon_collides_with_circle, polygons_overlap};
use super::polygon::{mean_point, rotate_point, validate_points, VertexCount};
use super::{Circle, Geometry, Point, Rect};
use crate::error::Error;

/// Three vertices plus their centroid (the default rotation pivot).
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    points: [Point; 3],
    centroid: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Result<Self, Error> {
        Self::from_slice(&[p1, p2, p3])
    }

    /// Build from a slice that must hold exactly 3 points.
    pub fn from_slice(points: &[Point]) -> Result<Self, Error> {
        validate_points(points, "triangle", VertexCount::Exactly(3))?;
        Ok(Self::from_array([points[0], points[1], points[2]]))
    }

    // Unchecked: transforms pass their arguments straight through, so a
    // non-finite angle or offset gives non-finite vertices.
    fn from_array(points: [Point; 3]) -> Self {
        Self { points, centroid: mean_point(&points) }
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Rotate every vertex by `angle_degrees` around `pivot`, or the centroid when `None`.
    pub fn rotate(&self, angle_degrees: f32, pivot: Option<Point>) -> Triangle {
        let pivot = pivot.unwrap_or(self.centroid);
        Self::from_array(self.points.map(|p| rotate_point(p, pivot, angle_degrees)))
    }

    /// Y grows downward, so moving down adds to y.
    pub fn move_down(&self, amount: f32) -> Triangle {
        Self::from_array(self.points.map(|(x, y)| (x, y + amount)))
    }

    pub fn move_up(&self, amount: f32) -> Triangle {
        self.move_down(-amount)
    }

    pub fn move_right(&self, amount: f32) -> Triangle {
        Self::from_array(self.points.map(|(x, y)| (x + amount, y)))
    }

    pub fn move_left(&self, amount: f32) -> Triangle {
        self.move_right(-amount)
    }
}

impl Geometry for Triangle {
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
        "Triangle"
    }
}

/// Which side of the anchor edge the apex sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Apex above the anchor edge (smaller y).
    #[default]
    Up,
    /// Apex below the anchor edge (larger y).
    Down,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

// Anchor edge left to right, then the apex h = √3/2·L off the edge.
fn points_for((x, y): Point, length: f32, direction: Direction) -> [Point; 3] {
    let h = (3.0_f32.sqrt() / 2.0) * length;
    let apex_y = match direction {
        Direction::Up => y - h,
        Direction::Down => y + h,
    };
    [(x, y), (x + length, y), (x + length / 2.0, apex_y)]
}

/// Equilateral triangle anchored at the left end of its horizontal edge.
///
/// The anchor is the bottom-left corner for [`Direction::Up`] and the
/// top-left corner for [`Direction::Down`]. Transforms return a plain
/// [`Triangle`].
#[derive(Clone, Debug, PartialEq)]
pub struct EquilateralTriangle {
    anchor: Point,
    length: f32,
    direction: Direction,
    triangle: Triangle,
}

impl EquilateralTriangle {
    pub fn new(anchor: Point, length: f32, direction: Direction) -> Result<Self, Error> {
        if !(length > 0.0 && length.is_finite()) {
            return Err(Error::InvalidShape(format!(
                "equilateral triangle side must be positive, got {length}"
            )));
        }
        let triangle = Triangle::from_slice(&points_for(anchor, length, direction))?;
        Ok(Self { anchor, length, direction, triangle })
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The apex opposite the anchor edge.
    pub fn apex(&self) -> Point {
        self.triangle.points[2]
    }

    pub fn as_triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Same anchor and length, apex on the other side.
    pub fn change_direction(&self) -> EquilateralTriangle {
        let direction = self.direction.flipped();
        EquilateralTriangle {
            anchor: self.anchor,
            length: self.length,
            direction,
            triangle: Triangle::from_array(points_for(self.anchor, self.length, direction)),
        }
    }

    pub fn rotate(&self, angle_degrees: f32, pivot: Option<Point>) -> Triangle {
        self.triangle.rotate(angle_degrees, pivot)
    }

    pub fn move_up(&self, amount: f32) -> Triangle {
        self.triangle.move_up(amount)
    }

    pub fn move_down(&self, amount: f32) -> Triangle {
        self.triangle.move_down(amount)
    }

    pub fn move_left(&self, amount: f32) -> Triangle {
        self.triangle.move_left(amount)
    }

    pub fn move_right(&self, amount: f32) -> Triangle {
        self.triangle.move_right(amount)
    }
}

impl Geometry for EquilateralTriangle {
    fn contains_point(&self, p: Point) -> bool {
        self.triangle.contains_point(p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        self.triangle.collide_rect(rect)
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        self.triangle.collide_circle(circle)
    }

    fn bounding_rect(&self) -> Rect {
        self.triangle.bounding_rect()
    }

    fn name(&self) -> &str {
        "EquilateralTriangle"
    }
}

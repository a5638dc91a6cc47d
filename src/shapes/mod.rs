//! Shapes module - extra shape primitives with collision and transforms
//!
//! This module provides:
//! - `Geometry` trait shared by every shape (point, rect and circle tests)
//! - Polygon-family shapes: Polygon, Quadrilateral, Triangle, EquilateralTriangle
//! - Round shapes: Ellipse, Circle
//! - Axis-aligned Rect and integer Square
//! - `Shape`, a closed enum over all of the above
//!
//! Coordinates are screen pixels: x grows to the right, y grows downward.
//! Every shape is an immutable value; transforms return new shapes.

mod collide;
mod ellipse;
mod polygon;
mod rect;
mod traits;
mod triangle;

pub use collide::{circle_collides_with_circle, rect_collides_with_circle};
pub use ellipse::{Circle, Ellipse};
pub use polygon::{rotate_point, Polygon, Quadrilateral};
pub use rect::{Rect, Square};
pub use traits::Geometry;
pub use triangle::{Direction, EquilateralTriangle, Triangle};

/// A 2D point (x, y) in screen coordinates.
pub type Point = (f32, f32);

/// Any of the supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Ellipse(Ellipse),
    Quadrilateral(Quadrilateral),
    Triangle(Triangle),
    EquilateralTriangle(EquilateralTriangle),
    Circle(Circle),
    Rect(Rect),
    Square(Square),
}

impl Shape {
    fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Polygon(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Quadrilateral(s) => s,
            Shape::Triangle(s) => s,
            Shape::EquilateralTriangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Rect(s) => s,
            Shape::Square(s) => s,
        }
    }

    /// Outline vertices for polygon-family shapes, `None` for round ones.
    pub fn vertices(&self) -> Option<Vec<Point>> {
        match self {
            Shape::Polygon(s) => Some(s.points().to_vec()),
            Shape::Quadrilateral(s) => Some(s.points().to_vec()),
            Shape::Triangle(s) => Some(s.points().to_vec()),
            Shape::EquilateralTriangle(s) => Some(s.as_triangle().points().to_vec()),
            Shape::Rect(s) => Some(s.corners().to_vec()),
            Shape::Square(s) => Some(s.corners().to_vec()),
            Shape::Ellipse(_) | Shape::Circle(_) => None,
        }
    }

    /// Whether this shape and `other` overlap. Exact for every pair, touching included.
    pub fn collide(&self, other: &Shape) -> bool {
        match (self, other) {
            (_, Shape::Rect(r)) => self.collide_rect(r),
            (_, Shape::Square(s)) => self.collide_rect(&s.rect()),
            (_, Shape::Circle(c)) => self.collide_circle(c),
            (Shape::Rect(_) | Shape::Square(_) | Shape::Circle(_), _) => other.collide(self),
            (Shape::Ellipse(a), Shape::Ellipse(b)) => a.collide_ellipse(b),
            (Shape::Ellipse(e), poly) | (poly, Shape::Ellipse(e)) => {
                e.collide_polygon(&poly.vertices().unwrap_or_default())
            }
            _ => {
                let a = self.vertices().unwrap_or_default();
                let b = other.vertices().unwrap_or_default();
                collide::polygons_overlap(&a, &b)
            }
        }
    }
}

impl Geometry for Shape {
    fn contains_point(&self, p: Point) -> bool {
        self.as_geometry().contains_point(p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        self.as_geometry().collide_rect(rect)
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        self.as_geometry().collide_circle(circle)
    }

    fn bounding_rect(&self) -> Rect {
        self.as_geometry().bounding_rect()
    }

    fn name(&self) -> &str {
        self.as_geometry().name()
    }
}

macro_rules! shape_from {
    ($($variant:ident),*) => {
        $(impl From<$variant> for Shape {
            fn from(s: $variant) -> Self {
                Shape::$variant(s)
            }
        })*
    };
}

shape_from!(Polygon, Ellipse, Quadrilateral, Triangle, EquilateralTriangle, Circle, Rect, Square);

// Round shapes: ellipses inside a bounding rect, and circles.

use super::collide::{
    circle_collides_with_circle, ellipse_outline_distance, polygon_collides_with_circle, polygons_overlap,
    rect_collides_with_circle,
};
use super::{Geometry, Point, Rect};
use crate::error::Error;
use std::f32::consts::TAU;

/// Axis-aligned ellipse filling its bounding rect.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    rect: Rect,
}

impl Ellipse {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Build from the bounding box edges.
    pub fn from_bounds(top: f32, left: f32, width: f32, height: f32) -> Result<Self, Error> {
        Ok(Self { rect: Rect::new(left, top, width, height)? })
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Semi-axes (horizontal, vertical).
    pub fn radii(&self) -> (f32, f32) {
        (self.rect.width() / 2.0, self.rect.height() / 2.0)
    }

    // A zero-width or zero-height ellipse is just its bounding segment.
    fn is_degenerate(&self) -> bool {
        let (a, b) = self.radii();
        a == 0.0 || b == 0.0
    }

    // Disc of radius `r` at `center` against this (non-degenerate) ellipse.
    fn meets_disc(&self, center: Point, r: f32) -> bool {
        self.contains_point(center) || ellipse_outline_distance(self.center(), self.radii(), center) <= r
    }

    /// Exact overlap with a polygon given by its vertices.
    ///
    /// Scaling by (1/a, 1/b) about the center maps the ellipse onto the unit
    /// circle and the polygon onto another polygon, so the test becomes
    /// polygon vs circle.
    pub fn collide_polygon(&self, points: &[Point]) -> bool {
        if self.is_degenerate() {
            return polygons_overlap(points, &self.rect.corners());
        }
        let (cx, cy) = self.center();
        let (a, b) = self.radii();
        let scaled: Vec<Point> = points.iter().map(|&(x, y)| ((x - cx) / a, (y - cy) / b)).collect();
        polygon_collides_with_circle(&scaled, (0.0, 0.0), 1.0)
    }

    /// Exact overlap with another ellipse.
    pub fn collide_ellipse(&self, other: &Ellipse) -> bool {
        if self.is_degenerate() {
            return other.collide_rect(&self.rect);
        }
        if other.is_degenerate() {
            return self.collide_rect(&other.rect);
        }
        // In the space where `self` is the unit circle, `other` is still an
        // axis-aligned ellipse.
        let (cx, cy) = self.center();
        let (a, b) = self.radii();
        let (ox, oy) = other.center();
        let (oa, ob) = other.radii();
        let mapped = Ellipse::new(Rect::from_bounds((
            (ox - oa - cx) / a,
            (oy - ob - cy) / b,
            (ox + oa - cx) / a,
            (oy + ob - cy) / b,
        )));
        mapped.meets_disc((0.0, 0.0), 1.0)
    }

    /// Points evenly spaced around the outline.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        let (cx, cy) = self.center();
        let (a, b) = self.radii();
        (0..segments)
            .map(|i| {
                let t = i as f32 / segments as f32 * TAU;
                (cx + a * t.cos(), cy + b * t.sin())
            })
            .collect()
    }
}

impl Geometry for Ellipse {
    fn contains_point(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return self.rect.contains_point(p);
        }
        let (cx, cy) = self.center();
        let (a, b) = self.radii();
        let (nx, ny) = ((p.0 - cx) / a, (p.1 - cy) / b);
        nx * nx + ny * ny <= 1.0
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        if self.is_degenerate() {
            return self.rect.collide_rect(rect);
        }
        // Scaling by (1/a, 1/b) turns the ellipse into the unit circle and
        // keeps the rect axis-aligned.
        let (cx, cy) = self.center();
        let (a, b) = self.radii();
        let scaled = ((rect.left() - cx) / a, (rect.top() - cy) / b, rect.width() / a, rect.height() / b);
        rect_collides_with_circle(scaled, (0.0, 0.0), 1.0)
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        if self.is_degenerate() {
            return circle.collide_rect(&self.rect);
        }
        self.meets_disc(circle.center(), circle.radius())
    }

    fn bounding_rect(&self) -> Rect {
        self.rect.clone()
    }

    fn name(&self) -> &str {
        "Ellipse"
    }
}

/// Circle with a center and a non-negative radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Result<Self, Error> {
        if !(radius >= 0.0 && radius.is_finite()) || !center.0.is_finite() || !center.1.is_finite() {
            return Err(Error::InvalidShape(format!(
                "circle at {center:?} needs a finite radius >= 0, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Inclusive: a point exactly on the circle collides.
    pub fn collide_point(&self, p: Point) -> bool {
        let (dx, dy) = (p.0 - self.center.0, p.1 - self.center.1);
        dx * dx + dy * dy <= self.radius * self.radius
    }

    pub fn collide_rect(&self, rect: &Rect) -> bool {
        rect_collides_with_circle(rect.ltwh(), self.center, self.radius)
    }

    pub fn collide_circle(&self, other: &Circle) -> bool {
        circle_collides_with_circle(self.center, self.radius, other.center, other.radius)
    }

    /// True if any rect in the list collides (false for an empty list).
    pub fn collide_rects_any(&self, rects: &[Rect]) -> bool {
        rects.iter().any(|r| self.collide_rect(r))
    }

    /// True if every rect in the list collides (true for an empty list).
    pub fn collide_rects_all(&self, rects: &[Rect]) -> bool {
        rects.iter().all(|r| self.collide_rect(r))
    }

    /// New circle moved by (dx, dy).
    pub fn translate(&self, dx: f32, dy: f32) -> Circle {
        Circle { center: (self.center.0 + dx, self.center.1 + dy), radius: self.radius }
    }
}

impl Geometry for Circle {
    fn contains_point(&self, p: Point) -> bool {
        self.collide_point(p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        Circle::collide_rect(self, rect)
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        Circle::collide_circle(self, circle)
    }

    fn bounding_rect(&self) -> Rect {
        Rect::from_bounds((
            self.center.0 - self.radius,
            self.center.1 - self.radius,
            self.center.0 + self.radius,
            self.center.1 + self.radius,
        ))
    }

    fn name(&self) -> &str {
        "Circle"
    }
}

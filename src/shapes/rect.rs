// Axis-aligned rects and integer squares.
// Both expose their corners as a quadrilateral instead of inheriting from one.

use super::collide::rect_collides_with_circle;
use super::{Circle, Geometry, Point, Quadrilateral};
use crate::error::Error;

/// Axis-aligned rect (left, top, width, height); y grows downward.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, Error> {
        let finite = [left, top, width, height].iter().all(|v| v.is_finite());
        if !finite || width < 0.0 || height < 0.0 {
            return Err(Error::InvalidShape(format!(
                "rect needs finite values and non-negative size, got ({left}, {top}, {width}, {height})"
            )));
        }
        Ok(Self { left, top, width, height })
    }

    /// From (left, top, right, bottom); callers guarantee right >= left and bottom >= top.
    pub fn from_bounds((left, top, right, bottom): (f32, f32, f32, f32)) -> Self {
        Self { left, top, width: right - left, height: bottom - top }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// (left, top, width, height) tuple for the collision helpers.
    pub fn ltwh(&self) -> (f32, f32, f32, f32) {
        (self.left, self.top, self.width, self.height)
    }

    /// Corners in order: bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            (self.left, self.bottom()),
            (self.right(), self.bottom()),
            (self.right(), self.top),
            (self.left, self.top),
        ]
    }

    pub fn to_quadrilateral(&self) -> Quadrilateral {
        Quadrilateral::from_array(self.corners())
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect { left: self.left + dx, top: self.top + dy, ..self.clone() }
    }
}

impl Geometry for Rect {
    fn contains_point(&self, p: Point) -> bool {
        p.0 >= self.left && p.0 <= self.right() && p.1 >= self.top && p.1 <= self.bottom()
    }

    fn collide_rect(&self, other: &Rect) -> bool {
        self.left <= other.right()
            && other.left <= self.right()
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        rect_collides_with_circle(self.ltwh(), circle.center(), circle.radius())
    }

    fn bounding_rect(&self) -> Rect {
        self.clone()
    }

    fn name(&self) -> &str {
        "Rect"
    }
}

/// Square on the integer grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    left: i32,
    top: i32,
    length: u32,
}

impl Square {
    /// The far edges `left + length` and `top + length` must fit in an `i32`,
    /// so every lattice point is representable.
    pub fn new(topleft: (i32, i32), length: u32) -> Result<Self, Error> {
        let (left, top) = topleft;
        let fits = i32::try_from(length)
            .ok()
            .and_then(|n| left.checked_add(n).zip(top.checked_add(n)))
            .is_some();
        if !fits {
            return Err(Error::InvalidShape(format!(
                "square at {topleft:?} with length {length} runs past the i32 grid"
            )));
        }
        Ok(Self { left, top, length })
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn rect(&self) -> Rect {
        let len = self.length as f32;
        Rect { left: self.left as f32, top: self.top as f32, width: len, height: len }
    }

    /// Corners in order: bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Point; 4] {
        self.rect().corners()
    }

    /// Every integer point inside the square, edges included, sorted by x then y.
    ///
    /// A square of length `n` yields `(n + 1)²` points.
    pub fn integer_points(&self) -> Vec<(i32, i32)> {
        let n = self.length as i32;
        let mut points: Vec<(i32, i32)> = (0..=n)
            .flat_map(|dx| (0..=n).map(move |dy| (self.left + dx, self.top + dy)))
            .collect();
        points.sort_unstable();
        points
    }

    /// [`Square::integer_points`] split into rows of `length + 1` points.
    pub fn integer_points_2d(&self) -> Vec<Vec<(i32, i32)>> {
        self.integer_points()
            .chunks(self.length as usize + 1)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Geometry for Square {
    fn contains_point(&self, p: Point) -> bool {
        self.rect().contains_point(p)
    }

    fn collide_rect(&self, rect: &Rect) -> bool {
        self.rect().collide_rect(rect)
    }

    fn collide_circle(&self, circle: &Circle) -> bool {
        self.rect().collide_circle(circle)
    }

    fn bounding_rect(&self) -> Rect {
        self.rect()
    }

    fn name(&self) -> &str {
        "Square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_invalid() {
        assert!(matches!(Rect::new(0.0, 0.0, -1.0, 2.0), Err(Error::InvalidShape(_))));
        assert!(Rect::new(0.0, 0.0, f32::INFINITY, 2.0).is_err());
    }

    #[test]
    fn edges_and_corners() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!((r.right(), r.bottom()), (4.0, 6.0));
        assert_eq!(r.center(), (2.5, 4.0));
        assert_eq!(r.corners(), [(1.0, 6.0), (4.0, 6.0), (4.0, 2.0), (1.0, 2.0)]);
        assert_eq!(r.to_quadrilateral().points()[2], (4.0, 2.0));
    }

    #[test]
    fn touching_rects_collide() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0).unwrap();
        assert!(a.collide_rect(&Rect::new(2.0, 0.0, 1.0, 1.0).unwrap()));
        assert!(!a.collide_rect(&Rect::new(2.1, 0.0, 1.0, 1.0).unwrap()));
    }

    #[test]
    fn rect_collides_circle_like_circle_collides_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let c = Circle::new((12.0, 5.0), 2.0).unwrap();
        assert_eq!(r.collide_circle(&c), c.collide_rect(&r));
        assert!(r.collide_circle(&c));
    }

    #[test]
    fn unit_square_integer_points() {
        let sq = Square::new((0, 0), 1).unwrap();
        assert_eq!(sq.integer_points(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(sq.integer_points_2d(), vec![vec![(0, 0), (0, 1)], vec![(1, 0), (1, 1)]]);
    }

    #[test]
    fn offset_square_integer_points() {
        let sq = Square::new((-1, 5), 2).unwrap();
        let pts = sq.integer_points();
        assert_eq!(pts.len(), 9);
        assert_eq!(pts.first(), Some(&(-1, 5)));
        assert_eq!(pts.last(), Some(&(1, 7)));
        let grid = sq.integer_points_2d();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec![(0, 5), (0, 6), (0, 7)]);
    }

    #[test]
    fn zero_length_square_is_one_point() {
        assert_eq!(Square::new((3, 4), 0).unwrap().integer_points_2d(), vec![vec![(3, 4)]]);
    }

    #[test]
    fn square_corners_follow_rect_order() {
        let sq = Square::new((0, 0), 2).unwrap();
        assert_eq!(sq.corners(), [(0.0, 2.0), (2.0, 2.0), (2.0, 0.0), (0.0, 0.0)]);
        assert!(sq.contains_point((2.0, 2.0)));
    }

    #[test]
    fn square_must_fit_the_integer_grid() {
        assert!(matches!(Square::new((i32::MAX, 0), 1), Err(Error::InvalidShape(_))));
        assert!(matches!(Square::new((0, i32::MAX - 1), 2), Err(Error::InvalidShape(_))));
        assert!(matches!(Square::new((0, 0), u32::MAX), Err(Error::InvalidShape(_))));
        assert!(Square::new((0, 0), i32::MAX as u32 + 1).is_err());

        let edge = Square::new((i32::MAX - 1, i32::MIN), 1).unwrap();
        assert_eq!(edge.integer_points().last(), Some(&(i32::MAX, i32::MIN + 1)));
    }
}

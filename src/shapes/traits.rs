// The capability every shape shares: point tests, overlap tests, bounds.

use super::{Circle, Point, Rect};

/// Collision interface implemented by every shape variant.
///
/// All tests are inclusive: a point on the outline is inside, and two shapes
/// that only touch are colliding.
pub trait Geometry {
    /// Whether `p` lies inside or on the outline.
    fn contains_point(&self, p: Point) -> bool;

    /// Whether the shape overlaps (or touches) an axis-aligned rect.
    fn collide_rect(&self, rect: &Rect) -> bool;

    /// Whether the shape overlaps (or touches) a circle.
    fn collide_circle(&self, circle: &Circle) -> bool;

    /// Smallest axis-aligned rect that contains the shape.
    fn bounding_rect(&self) -> Rect;

    /// Short name for logs and debug output.
    fn name(&self) -> &str;
}

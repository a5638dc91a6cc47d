// Low-level collision predicates shared by the shape types.
// Everything works on plain points and is inclusive on boundaries.

use super::Point;

/// Distance² from `p` to `q`.
#[inline]
pub fn distance_sq(p: Point, q: Point) -> f32 {
    let dx = p.0 - q.0;
    let dy = p.1 - q.1;
    dx * dx + dy * dy
}

/// Circle vs axis-aligned rect given as (left, top, width, height).
///
/// Clamps the circle center onto the rect to find the closest point, then
/// compares the distance against the radius.
pub fn rect_collides_with_circle(
    (left, top, width, height): (f32, f32, f32, f32),
    center: Point,
    radius: f32,
) -> bool {
    let closest = (
        center.0.clamp(left, left + width),
        center.1.clamp(top, top + height),
    );
    distance_sq(closest, center) <= radius * radius
}

/// Two circles touch when their centers are at most r1 + r2 apart.
pub fn circle_collides_with_circle(c1: Point, r1: f32, c2: Point, r2: f32) -> bool {
    let reach = r1 + r2;
    distance_sq(c1, c2) <= reach * reach
}

/// Twice the signed area of (a, b, c); > 0 when the turn a→b→c is counter-clockwise
/// in math axes.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// `p` is collinear with `a`-`b` and inside their bounding box.
#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0.0
        && p.0 >= a.0.min(b.0)
        && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1)
        && p.1 <= a.1.max(b.1)
}

/// Segment a1-a2 intersects b1-b2 (touching and collinear overlap included).
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    on_segment(b1, b2, a1) || on_segment(b1, b2, a2) || on_segment(a1, a2, b1) || on_segment(a1, a2, b2)
}

/// Squared distance from `p` to the segment a-b.
pub fn segment_distance_sq(a: Point, b: Point, p: Point) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance_sq(a, p);
    }
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0);
    distance_sq((a.0 + t * dx, a.1 + t * dy), p)
}

/// Consecutive vertex pairs, closing back to the first vertex.
pub fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Even-odd point test. Points on an edge count as inside.
pub fn point_in_polygon(points: &[Point], p: Point) -> bool {
    if edges(points).any(|(a, b)| on_segment(a, b, p)) {
        return true;
    }

    let mut inside = false;
    for (a, b) in edges(points) {
        // Half-open rule on y so a vertex shared by two edges is counted once.
        if (a.1 > p.1) != (b.1 > p.1) {
            let x_at = a.0 + (p.1 - a.1) * (b.0 - a.0) / (b.1 - a.1);
            if p.0 < x_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// Overlap test for arbitrary (not necessarily convex) polygons.
pub fn polygons_overlap(a: &[Point], b: &[Point]) -> bool {
    for (a1, a2) in edges(a) {
        for (b1, b2) in edges(b) {
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    // No crossing edges: either disjoint or one is nested inside the other.
    a.first().is_some_and(|&p| point_in_polygon(b, p)) || b.first().is_some_and(|&p| point_in_polygon(a, p))
}

/// Polygon vs circle: the center is inside, or some edge comes within the radius.
pub fn polygon_collides_with_circle(points: &[Point], center: Point, radius: f32) -> bool {
    point_in_polygon(points, center)
        || edges(points).any(|(a, b)| segment_distance_sq(a, b, center) <= radius * radius)
}

/// Distance from `p` to the outline of the axis-aligned ellipse with the given
/// center and semi-axes (both > 0). Zero for points on the outline.
///
/// Closest point by bisection on the Lagrange parameter (Eberly), folded into
/// the first quadrant and run in f64.
pub fn ellipse_outline_distance(center: Point, (a, b): (f32, f32), p: Point) -> f32 {
    let y0 = (p.0 as f64 - center.0 as f64).abs();
    let y1 = (p.1 as f64 - center.1 as f64).abs();
    let (e0, e1) = (a as f64, b as f64);
    // The solver wants the major axis first.
    let d = if e0 >= e1 { quadrant_distance(e0, e1, y0, y1) } else { quadrant_distance(e1, e0, y1, y0) };
    d as f32
}

// e0 >= e1 > 0, y0 >= 0, y1 >= 0.
fn quadrant_distance(e0: f64, e1: f64, y0: f64, y1: f64) -> f64 {
    if y1 > 0.0 {
        if y0 > 0.0 {
            let (z0, z1) = (y0 / e0, y1 / e1);
            let g = z0 * z0 + z1 * z1 - 1.0;
            if g == 0.0 {
                return 0.0;
            }
            let r0 = (e0 / e1) * (e0 / e1);
            let s = bisect_root(r0, z0, z1, g);
            let x0 = r0 * y0 / (s + r0);
            let x1 = y1 / (s + 1.0);
            ((x0 - y0).powi(2) + (x1 - y1).powi(2)).sqrt()
        } else {
            (y1 - e1).abs()
        }
    } else {
        let numer = e0 * y0;
        let denom = e0 * e0 - e1 * e1;
        if numer < denom {
            let xde0 = numer / denom;
            let x0 = e0 * xde0;
            let x1 = e1 * (1.0 - xde0 * xde0).sqrt();
            ((x0 - y0).powi(2) + x1 * x1).sqrt()
        } else {
            (y0 - e0).abs()
        }
    }
}

fn bisect_root(r0: f64, z0: f64, z1: f64, g: f64) -> f64 {
    let n0 = r0 * z0;
    let mut s0 = z1 - 1.0;
    let mut s1 = if g < 0.0 { 0.0 } else { (n0 * n0 + z1 * z1).sqrt() - 1.0 };
    let mut s = s0;
    // f64 bisection converges well before this.
    for _ in 0..1100 {
        s = (s0 + s1) / 2.0;
        if s == s0 || s == s1 {
            break;
        }
        let (ratio0, ratio1) = (n0 / (s + r0), z1 / (s + 1.0));
        let g = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if g > 0.0 {
            s0 = s;
        } else if g < 0.0 {
            s1 = s;
        } else {
            break;
        }
    }
    s
}

/// Axis-aligned bounds of a point list as (left, top, right, bottom).
pub fn bounds(points: &[Point]) -> (f32, f32, f32, f32) {
    points.iter().fold(
        (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        |(l, t, r, b), &(x, y)| (l.min(x), t.min(y), r.max(x), b.max(y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [Point; 4] = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];

    #[test]
    fn rect_circle_touching_edge_collides() {
        assert!(rect_collides_with_circle((0.0, 0.0, 10.0, 10.0), (15.0, 5.0), 5.0));
        assert!(!rect_collides_with_circle((0.0, 0.0, 10.0, 10.0), (15.1, 5.0), 5.0));
    }

    #[test]
    fn rect_circle_corner_uses_euclidean_distance() {
        // (13, 14) is 5 away from the corner (10, 10).
        assert!(rect_collides_with_circle((0.0, 0.0, 10.0, 10.0), (13.0, 14.0), 5.0));
        assert!(!rect_collides_with_circle((0.0, 0.0, 10.0, 10.0), (13.0, 14.0), 4.9));
    }

    #[test]
    fn circles_touching_collide() {
        assert!(circle_collides_with_circle((0.0, 0.0), 2.0, (5.0, 0.0), 3.0));
        assert!(!circle_collides_with_circle((0.0, 0.0), 2.0, (5.1, 0.0), 3.0));
    }

    #[test]
    fn crossing_and_touching_segments() {
        assert!(segments_intersect((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)));
        assert!(segments_intersect((0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (3.0, 5.0)));
        assert!(segments_intersect((0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (6.0, 0.0)));
        assert!(!segments_intersect((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)));
        assert!(!segments_intersect((0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.4, 0.9)));
    }

    #[test]
    fn point_in_polygon_counts_boundary() {
        assert!(point_in_polygon(&SQUARE, (2.0, 2.0)));
        assert!(point_in_polygon(&SQUARE, (4.0, 2.0)));
        assert!(point_in_polygon(&SQUARE, (0.0, 0.0)));
        assert!(!point_in_polygon(&SQUARE, (4.5, 2.0)));
    }

    #[test]
    fn point_in_concave_polygon() {
        // U shape opening upward.
        let u = [(0.0, 0.0), (1.0, 0.0), (1.0, 2.0), (2.0, 2.0), (2.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)];
        assert!(point_in_polygon(&u, (0.5, 1.0)));
        assert!(!point_in_polygon(&u, (1.5, 1.0)));
        assert!(point_in_polygon(&u, (1.5, 2.5)));
    }

    #[test]
    fn nested_polygons_overlap() {
        let inner = [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)];
        assert!(polygons_overlap(&SQUARE, &inner));
        assert!(polygons_overlap(&inner, &SQUARE));
        let far = [(10.0, 10.0), (11.0, 10.0), (11.0, 11.0)];
        assert!(!polygons_overlap(&SQUARE, &far));
    }

    #[test]
    fn polygon_circle_near_edge() {
        assert!(polygon_collides_with_circle(&SQUARE, (6.0, 2.0), 2.0));
        assert!(!polygon_collides_with_circle(&SQUARE, (6.0, 2.0), 1.5));
        assert!(polygon_collides_with_circle(&SQUARE, (2.0, 2.0), 0.1));
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(bounds(&[(1.0, 5.0), (-2.0, 3.0), (4.0, -1.0)]), (-2.0, -1.0, 4.0, 5.0));
    }

    #[test]
    fn ellipse_distance_on_axes_and_off() {
        let (c, radii) = ((10.0, 10.0), (5.0, 2.0));
        assert!(ellipse_outline_distance(c, radii, (15.0, 10.0)).abs() < 1e-5);
        assert!((ellipse_outline_distance(c, radii, (10.0, 15.0)) - 3.0).abs() < 1e-5);
        assert!((ellipse_outline_distance(c, radii, (10.0, 10.0)) - 2.0).abs() < 1e-5);
        assert!((ellipse_outline_distance(c, radii, (3.0, 10.0)) - 2.0).abs() < 1e-5);
        // Tall ellipse takes the swapped branch.
        assert!((ellipse_outline_distance((0.0, 0.0), (2.0, 5.0), (0.0, -7.0)) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn ellipse_distance_along_the_normal() {
        let (a, b) = (50.0f32, 20.0f32);
        let t = 0.3f32;
        let (px, py) = (a * t.cos(), b * t.sin());
        let (gx, gy) = (px / (a * a), py / (b * b));
        let len = (gx * gx + gy * gy).sqrt();
        let q = (px + 1.5 * gx / len, py + 1.5 * gy / len);
        assert!((ellipse_outline_distance((0.0, 0.0), (a, b), q) - 1.5).abs() < 1e-3);
    }
}

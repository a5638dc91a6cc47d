// Host window plus the software surface games draw on.
// Visual: the window shows whatever the `Screen` holds after the draw hook
// (shape outlines and fills, lines, the camera blit).

use crate::error::Error;
use crate::shapes::{Circle, Geometry, Point, Polygon, Rect};
use crate::types::{pack_rgb, Color, FrameBuffer, BLACK};
use image::Rgb;
use minifb::{Key, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Open a window exactly the size of the screen surface.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Show `framebuffer` in the window; also pumps window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Escape held down ends the loop.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in screen pixels, clamped to the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window.get_mouse_pos(MouseMode::Clamp)
    }

    pub fn mouse_down(&self, button: minifb::MouseButton) -> bool {
        self.window.get_mouse_down(button)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

/* ---------- Raster helpers on a FrameBuffer ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i64, y: i64, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill the inclusive pixel box (x0,y0)-(x1,y1), clipped to the buffer.
fn fill_box(fb: &mut FrameBuffer, x0: i64, y0: i64, x1: i64, y1: i64, color: u32) {
    let xs = x0.max(0)..=x1.min(fb.width as i64 - 1);
    for y in y0.max(0)..=y1.min(fb.height as i64 - 1) {
        let row = y as usize * fb.width;
        for x in xs.clone() {
            fb.pixels[row + x as usize] = color;
        }
    }
}

/// Square brush of side `thickness` centered on (x,y).
#[inline]
fn stamp(fb: &mut FrameBuffer, x: i64, y: i64, thickness: i64, color: u32) {
    if thickness <= 1 {
        put_pixel(fb, x, y, color);
    } else {
        let lo = (thickness - 1) / 2;
        let hi = thickness / 2;
        fill_box(fb, x - lo, y - lo, x + hi, y + hi, color);
    }
}

/// Draw a line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight line `thickness` pixels wide appears on the screen.
/// Walks every step, so callers clip long segments first.
fn draw_line(fb: &mut FrameBuffer, x0: i64, y0: i64, x1: i64, y1: i64, thickness: i64, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(fb, x0, y0, thickness, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Pixel coordinates stay within +-2^32 so edge arithmetic cannot overflow.
const COORD_LIMIT: f64 = (1u64 << 32) as f64;

#[inline]
fn px(p: Point) -> (i64, i64) {
    let snap = |v: f32| (v as f64).round().clamp(-COORD_LIMIT, COORD_LIMIT) as i64;
    (snap(p.0), snap(p.1))
}

#[inline]
fn rounded(p: Point) -> (f64, f64) {
    ((p.0 as f64).round(), (p.1 as f64).round())
}

type Segment = ((f64, f64), (f64, f64));

/// The buffer grown by `pad` pixels on every side, as (xmin, ymin, xmax, ymax).
fn padded_bounds(fb: &FrameBuffer, pad: f64) -> (f64, f64, f64, f64) {
    (-pad, -pad, fb.width as f64 - 1.0 + pad, fb.height as f64 - 1.0 + pad)
}

/// Liang-Barsky: the parameter range of `a -> b` inside `bounds`, or `None`
/// when the segment misses it or has a non-finite coordinate.
fn clip_segment((a, b): Segment, (xmin, ymin, xmax, ymax): (f64, f64, f64, f64)) -> Option<(f64, f64)> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.0 - xmin), (dx, xmax - a.0), (-dy, a.1 - ymin), (dy, ymax - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

#[inline]
fn lerp_point((a, b): Segment, t: f64) -> (f64, f64) {
    ((a.0 + (b.0 - a.0) * t).round(), (a.1 + (b.1 - a.1) * t).round())
}

/// Bresenham between the rounded endpoints, limited to the part that can
/// reach the buffer.
fn stroke(fb: &mut FrameBuffer, start: Point, end: Point, thickness: i32, color: u32) {
    let seg = (rounded(start), rounded(end));
    let Some((t0, t1)) = clip_segment(seg, padded_bounds(fb, thickness as f64 + 1.0)) else {
        return;
    };
    let (a, b) = (lerp_point(seg, t0), lerp_point(seg, t1));
    draw_line(fb, a.0 as i64, a.1 as i64, b.0 as i64, b.1 as i64, thickness as i64, color);
}

fn check_thickness(thickness: i32) -> Result<(), Error> {
    if thickness <= 0 {
        return Err(Error::InvalidThickness(thickness));
    }
    Ok(())
}

/// Linear blend between two colors, `t` clamped to [0, 1].
pub fn lerp_color(c1: Color, c2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb([mix(c1[0], c2[0]), mix(c1[1], c2[1]), mix(c1[2], c2[2])])
}

/// The surface a game draws on each tick.
///
/// A new `Screen` has no surface; every drawing call fails with
/// [`Error::NotInitialized`] until [`Screen::init`] gives it one.
#[derive(Debug, Default)]
pub struct Screen {
    surface: Option<FrameBuffer>,
    draw_fps: Option<u32>,
    update_fps: Option<u32>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a black surface of the given size.
    pub fn init(&mut self, width: usize, height: usize) {
        self.surface = Some(FrameBuffer::filled(width, height, BLACK));
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Result<&FrameBuffer, Error> {
        self.surface.as_ref().ok_or(Error::NotInitialized("surface"))
    }

    fn surface_mut(&mut self, op: &'static str) -> Result<&mut FrameBuffer, Error> {
        self.surface.as_mut().ok_or(Error::NotInitialized(op))
    }

    pub fn width(&self) -> Result<usize, Error> {
        self.surface.as_ref().map(|s| s.width).ok_or(Error::NotInitialized("width"))
    }

    pub fn height(&self) -> Result<usize, Error> {
        self.surface.as_ref().map(|s| s.height).ok_or(Error::NotInitialized("height"))
    }

    pub fn fill(&mut self, color: Color) -> Result<(), Error> {
        let packed = pack_rgb(color);
        self.surface_mut("fill")?.pixels.fill(packed);
        Ok(())
    }

    /// Same as filling with black.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.surface_mut("clear")?.pixels.fill(0);
        Ok(())
    }

    /// Copy `image` onto the surface with its top-left at `pos`; parts outside are clipped.
    pub fn blit(&mut self, image: &FrameBuffer, pos: (i32, i32)) -> Result<(), Error> {
        let fb = self.surface_mut("blit")?;
        let (ox, oy) = (pos.0 as i64, pos.1 as i64);
        // Clip the source columns once, then copy each visible row in one go.
        let sx0 = (-ox).clamp(0, image.width as i64) as usize;
        let sx1 = (fb.width as i64 - ox).clamp(0, image.width as i64) as usize;
        if sx0 >= sx1 {
            return Ok(());
        }
        for sy in 0..image.height {
            let y = oy + sy as i64;
            if y < 0 || y >= fb.height as i64 {
                continue;
            }
            let dst = y as usize * fb.width + (ox + sx0 as i64) as usize;
            let src = sy * image.width;
            fb.pixels[dst..dst + (sx1 - sx0)].copy_from_slice(&image.pixels[src + sx0..src + sx1]);
        }
        Ok(())
    }

    /// Outline of `rect`, `thickness` pixels wide, growing inward.
    pub fn rect(&mut self, rect: &Rect, color: Color, thickness: i32) -> Result<(), Error> {
        let fb = self.surface_mut("rect")?;
        check_thickness(thickness)?;
        let (l, t) = px((rect.left(), rect.top()));
        let (r, b) = px((rect.right(), rect.bottom()));
        let packed = pack_rgb(color);
        for y in t.max(0)..b.min(fb.height as i64) {
            for x in l.max(0)..r.min(fb.width as i64) {
                let edge = (x - l).min(r - 1 - x).min(y - t).min(b - 1 - y);
                if edge < thickness as i64 {
                    fb.pixels[y as usize * fb.width + x as usize] = packed;
                }
            }
        }
        Ok(())
    }

    pub fn filled_rect(&mut self, rect: &Rect, color: Color) -> Result<(), Error> {
        let fb = self.surface_mut("filled_rect")?;
        let (l, t) = px((rect.left(), rect.top()));
        let (r, b) = px((rect.right(), rect.bottom()));
        fill_box(fb, l, t, r - 1, b - 1, pack_rgb(color));
        Ok(())
    }

    /// Ring of `thickness` pixels just inside the circle's edge.
    pub fn circle(&mut self, circle: &Circle, color: Color, thickness: i32) -> Result<(), Error> {
        let fb = self.surface_mut("circle")?;
        check_thickness(thickness)?;
        let inner = (circle.radius() - thickness as f32).max(0.0);
        fill_ring(fb, circle, Some(inner), pack_rgb(color));
        Ok(())
    }

    pub fn filled_circle(&mut self, circle: &Circle, color: Color) -> Result<(), Error> {
        let fb = self.surface_mut("filled_circle")?;
        fill_ring(fb, circle, None, pack_rgb(color));
        Ok(())
    }

    pub fn line(&mut self, start: Point, end: Point, color: Color, thickness: i32) -> Result<(), Error> {
        let fb = self.surface_mut("line")?;
        check_thickness(thickness)?;
        stroke(fb, start, end, thickness, pack_rgb(color));
        Ok(())
    }

    /// Closed outline through `points`.
    pub fn polygon(&mut self, points: &[Point], color: Color, thickness: i32) -> Result<(), Error> {
        let fb = self.surface_mut("polygon")?;
        check_thickness(thickness)?;
        let packed = pack_rgb(color);
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            stroke(fb, a, b, thickness, packed);
        }
        Ok(())
    }

    /// Every pixel whose center lies inside the polygon.
    pub fn filled_polygon(&mut self, points: &[Point], color: Color) -> Result<(), Error> {
        let fb = self.surface_mut("filled_polygon")?;
        let poly = Polygon::new(points.to_vec())?;
        let bounds = poly.bounding_rect();
        let packed = pack_rgb(color);
        let (l, t) = px((bounds.left(), bounds.top()));
        let (r, b) = px((bounds.right(), bounds.bottom()));
        for y in t.max(0)..=b.min(fb.height as i64 - 1) {
            for x in l.max(0)..=r.min(fb.width as i64 - 1) {
                if poly.contains_point((x as f32, y as f32)) {
                    fb.pixels[y as usize * fb.width + x as usize] = packed;
                }
            }
        }
        Ok(())
    }

    /// Line whose color fades from `start_color` to `end_color`.
    pub fn gradient_line(
        &mut self,
        start: Point,
        end: Point,
        start_color: Color,
        end_color: Color,
        thickness: i32,
    ) -> Result<(), Error> {
        let fb = self.surface_mut("gradient_line")?;
        check_thickness(thickness)?;
        let seg = (rounded(start), rounded(end));
        let ((x0, y0), (x1, y1)) = seg;
        if (x1 - x0).abs().max((y1 - y0).abs()) == 0.0 {
            return Ok(());
        }
        let Some((t0, t1)) = clip_segment(seg, padded_bounds(fb, thickness as f64 + 1.0)) else {
            return Ok(());
        };
        // Step across the visible part; colors keep the whole line's parameter.
        let (a, b) = (lerp_point(seg, t0), lerp_point(seg, t1));
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let steps = dx.abs().max(dy.abs()) as i64;
        let side = thickness as i64 - 1;
        for i in 0..=steps {
            let s = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            let x = a.0 as i64 + (dx * s) as i64;
            let y = a.1 as i64 + (dy * s) as i64;
            let t = (t0 + (t1 - t0) * s) as f32;
            fill_box(fb, x, y, x + side, y + side, pack_rgb(lerp_color(start_color, end_color, t)));
        }
        Ok(())
    }

    /// Throttle the draw hook to `fps` calls per second.
    pub fn set_draw_fps(&mut self, fps: i32) -> Result<(), Error> {
        self.surface_mut("set_draw_fps")?;
        self.draw_fps = Some(positive_fps(fps)?);
        Ok(())
    }

    /// Throttle the update hook to `fps` calls per second.
    pub fn set_update_fps(&mut self, fps: i32) -> Result<(), Error> {
        self.surface_mut("set_update_fps")?;
        self.update_fps = Some(positive_fps(fps)?);
        Ok(())
    }

    /// `None` when the draw hook is not throttled.
    pub fn draw_fps(&self) -> Option<u32> {
        self.draw_fps
    }

    pub fn update_fps(&self) -> Option<u32> {
        self.update_fps
    }
}

fn positive_fps(fps: i32) -> Result<u32, Error> {
    u32::try_from(fps).ok().filter(|&f| f > 0).ok_or(Error::InvalidFps(fps))
}

// Pixels with center distance <= radius, and > inner when given.
fn fill_ring(fb: &mut FrameBuffer, circle: &Circle, inner: Option<f32>, color: u32) {
    let (cx, cy) = circle.center();
    let r = circle.radius();
    let r2 = r * r;
    let inner2 = inner.map(|i| i * i);
    let (x0, y0) = ((cx - r).floor() as i32, (cy - r).floor() as i32);
    let (x1, y1) = ((cx + r).ceil() as i32, (cy + r).ceil() as i32);
    for y in y0.max(0)..=y1.min(fb.height as i32 - 1) {
        for x in x0.max(0)..=x1.min(fb.width as i32 - 1) {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            let d2 = dx * dx + dy * dy;
            if d2 <= r2 && inner2.is_none_or(|i2| d2 > i2) {
                fb.pixels[y as usize * fb.width + x as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WHITE;

    fn screen(w: usize, h: usize) -> Screen {
        let mut s = Screen::new();
        s.init(w, h);
        s
    }

    fn at(s: &Screen, x: usize, y: usize) -> u32 {
        s.surface().unwrap().get(x, y).unwrap()
    }

    #[test]
    fn drawing_before_init_fails() {
        let mut s = Screen::new();
        let r = Rect::new(0.0, 0.0, 2.0, 2.0).unwrap();
        assert!(!s.is_initialized());
        assert!(matches!(s.fill(WHITE), Err(Error::NotInitialized("fill"))));
        assert!(matches!(s.rect(&r, WHITE, 1), Err(Error::NotInitialized(_))));
        assert!(matches!(s.width(), Err(Error::NotInitialized(_))));
        assert!(matches!(s.set_draw_fps(30), Err(Error::NotInitialized(_))));
        s.init(2, 2);
        assert!(s.is_initialized());
        assert_eq!((s.width().unwrap(), s.height().unwrap()), (2, 2));
    }

    #[test]
    fn non_positive_thickness_is_rejected() {
        let mut s = screen(10, 10);
        let r = Rect::new(1.0, 1.0, 5.0, 5.0).unwrap();
        let c = Circle::new((5.0, 5.0), 3.0).unwrap();
        assert!(matches!(s.rect(&r, WHITE, 0), Err(Error::InvalidThickness(0))));
        assert!(matches!(s.rect(&r, WHITE, -3), Err(Error::InvalidThickness(-3))));
        assert!(matches!(s.circle(&c, WHITE, 0), Err(Error::InvalidThickness(0))));
        assert!(matches!(s.circle(&c, WHITE, -1), Err(Error::InvalidThickness(-1))));
        assert!(s.surface().unwrap().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn rect_outline_leaves_inside_untouched() {
        let mut s = screen(10, 10);
        s.rect(&Rect::new(1.0, 1.0, 6.0, 6.0).unwrap(), WHITE, 1).unwrap();
        assert_eq!(at(&s, 1, 1), 0x00FF_FFFF);
        assert_eq!(at(&s, 6, 3), 0x00FF_FFFF);
        assert_eq!(at(&s, 3, 3), 0);
        assert_eq!(at(&s, 7, 3), 0);
    }

    #[test]
    fn thick_rect_outline_grows_inward() {
        let mut s = screen(10, 10);
        s.rect(&Rect::new(0.0, 0.0, 8.0, 8.0).unwrap(), WHITE, 2).unwrap();
        assert_eq!(at(&s, 1, 4), 0x00FF_FFFF);
        assert_eq!(at(&s, 2, 4), 0);
    }

    #[test]
    fn circle_ring_and_fill() {
        let mut s = screen(11, 11);
        let c = Circle::new((5.0, 5.0), 4.0).unwrap();
        s.circle(&c, WHITE, 1).unwrap();
        assert_eq!(at(&s, 9, 5), 0x00FF_FFFF);
        assert_eq!(at(&s, 5, 5), 0);
        s.filled_circle(&c, WHITE).unwrap();
        assert_eq!(at(&s, 5, 5), 0x00FF_FFFF);
        assert_eq!(at(&s, 0, 0), 0);
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut s = screen(4, 4);
        let img = FrameBuffer::filled(3, 3, WHITE);
        s.blit(&img, (2, -1)).unwrap();
        assert_eq!(at(&s, 2, 0), 0x00FF_FFFF);
        assert_eq!(at(&s, 3, 1), 0x00FF_FFFF);
        assert_eq!(at(&s, 3, 2), 0);
        assert_eq!(at(&s, 1, 0), 0);
        s.blit(&img, (10, 10)).unwrap();
        s.blit(&img, (-5, 0)).unwrap();
    }

    #[test]
    fn line_and_polygon() {
        let mut s = screen(8, 8);
        s.line((0.0, 0.0), (7.0, 7.0), WHITE, 1).unwrap();
        assert_eq!(at(&s, 4, 4), 0x00FF_FFFF);
        assert!(matches!(s.line((0.0, 0.0), (1.0, 1.0), WHITE, 0), Err(Error::InvalidThickness(0))));
        s.clear().unwrap();
        s.filled_polygon(&[(1.0, 1.0), (6.0, 1.0), (6.0, 6.0), (1.0, 6.0)], WHITE).unwrap();
        assert_eq!(at(&s, 3, 3), 0x00FF_FFFF);
        assert_eq!(at(&s, 7, 7), 0);
        assert!(s.filled_polygon(&[(0.0, 0.0), (1.0, 1.0)], WHITE).is_err());
    }

    #[test]
    fn gradient_line_runs_between_colors() {
        let mut s = screen(5, 1);
        s.gradient_line((0.0, 0.0), (4.0, 0.0), BLACK, WHITE, 1).unwrap();
        assert_eq!(at(&s, 0, 0), 0);
        assert_eq!(at(&s, 4, 0), 0x00FF_FFFF);
        assert_eq!(lerp_color(BLACK, WHITE, 0.5), Rgb([128, 128, 128]));
    }

    #[test]
    fn far_away_endpoints_are_clipped() {
        let mut s = screen(10, 10);
        s.line((-3e9, 5.0), (3e9, 5.0), WHITE, 1).unwrap();
        assert!((0..10).all(|x| at(&s, x, 5) == 0x00FF_FFFF));
        assert!((0..10).all(|x| at(&s, x, 4) == 0));

        s.clear().unwrap();
        s.polygon(&[(5.0, 5.0), (3e9, 5.0), (5.0, 3e9)], WHITE, 3).unwrap();
        assert_eq!(at(&s, 9, 5), 0x00FF_FFFF);
        assert_eq!(at(&s, 5, 9), 0x00FF_FFFF);
        assert_eq!(at(&s, 8, 8), 0);

        s.clear().unwrap();
        s.line((f32::MAX, -50.0), (f32::MIN, -40.0), WHITE, 1).unwrap();
        s.line((f32::NAN, 0.0), (5.0, 5.0), WHITE, 1).unwrap();
        s.line((f32::INFINITY, 0.0), (5.0, 5.0), WHITE, 1).unwrap();
        assert!(s.surface().unwrap().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn gradient_color_follows_the_whole_line() {
        let mut s = screen(10, 10);
        s.gradient_line((-3e9, 5.0), (3e9, 5.0), BLACK, WHITE, 1).unwrap();
        let mid = at(&s, 5, 5);
        assert!(mid != 0 && mid != 0x00FF_FFFF, "{mid:#08x}");
        assert!((0..10).all(|x| at(&s, x, 5) == mid));
        assert_eq!(at(&s, 5, 4), 0);

        s.clear().unwrap();
        s.gradient_line((0.0, 0.0), (3.0, 3.0), BLACK, WHITE, i32::MAX).unwrap();
        assert_eq!(at(&s, 3, 3), 0x00FF_FFFF);
        assert_eq!(at(&s, 0, 0), 0);
    }

    #[test]
    fn huge_rects_keep_their_visible_edges() {
        let mut s = screen(10, 10);
        s.rect(&Rect::new(-3e9, 2.0, 6e9, 4.0).unwrap(), WHITE, 1).unwrap();
        assert!((0..10).all(|x| at(&s, x, 2) == 0x00FF_FFFF && at(&s, x, 5) == 0x00FF_FFFF));
        assert!((0..10).all(|x| at(&s, x, 3) == 0));

        s.clear().unwrap();
        s.filled_rect(&Rect::new(-1e30, -1e30, f32::MAX, f32::MAX).unwrap(), WHITE).unwrap();
        assert_eq!(at(&s, 9, 9), 0x00FF_FFFF);

        s.clear().unwrap();
        let img = FrameBuffer::filled(2, 2, WHITE);
        s.blit(&img, (i32::MAX, i32::MAX)).unwrap();
        s.blit(&img, (i32::MIN, i32::MIN)).unwrap();
        assert!(s.surface().unwrap().pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn fps_must_be_positive() {
        let mut s = screen(1, 1);
        assert!(matches!(s.set_update_fps(0), Err(Error::InvalidFps(0))));
        assert!(matches!(s.set_draw_fps(-5), Err(Error::InvalidFps(-5))));
        s.set_draw_fps(30).unwrap();
        assert_eq!(s.draw_fps(), Some(30));
        assert_eq!(s.update_fps(), None);
    }
}

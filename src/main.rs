// What you SEE:
// • Left panel: a few shapes. The cursor carries a small circle; anything it
//   touches lights up.
// • Left click flips the equilateral triangle; right click spins the triangle.
// • Right of the panel: the live camera (zoom / background color from the CLI).
// • ESC quits.

use clap::Parser;
use image::Rgb;
use shapecam::config::Args;
use shapecam::shapes::{
    Circle, Direction, Ellipse, EquilateralTriangle, Geometry, Point, Rect, Shape, Square, Triangle,
};
use shapecam::types::Color;
use shapecam::{CameraSession, Error, Game, MouseButton, Runner, Screen};

const PANEL_W: usize = 320;
const PANEL_H: usize = 480;
const CURSOR_RADIUS: f32 = 12.0;

const IDLE: Color = Rgb([90, 110, 140]);
const HIT: Color = Rgb([255, 204, 51]);
const CURSOR: Color = Rgb([240, 240, 240]);
const BACKDROP: Color = Rgb([20, 22, 28]);

struct Demo {
    shapes: Vec<Shape>,
    cursor: Circle,
    spin: f32,
    trail_start: Point,
}

impl Demo {
    fn new() -> Result<Self, Error> {
        let shapes = vec![
            EquilateralTriangle::new((40.0, 140.0), 90.0, Direction::Up)?.into(),
            Triangle::new((180.0, 60.0), (280.0, 90.0), (210.0, 150.0))?.into(),
            Rect::new(30.0, 200.0, 120.0, 70.0)?.into(),
            Square::new((190, 200), 80)?.into(),
            Ellipse::from_bounds(320.0, 40.0, 140.0, 80.0)?.into(),
            Circle::new((240.0, 370.0), 40.0)?.into(),
        ];
        Ok(Self {
            shapes,
            cursor: Circle::new((-100.0, -100.0), CURSOR_RADIUS)?,
            spin: 0.0,
            trail_start: (PANEL_W as f32 / 2.0, PANEL_H as f32 - 10.0),
        })
    }
}

fn draw_shape(screen: &mut Screen, shape: &Shape, color: Color) -> Result<(), Error> {
    match shape {
        Shape::Circle(c) => screen.circle(c, color, 3),
        Shape::Rect(r) => screen.rect(r, color, 3),
        Shape::Ellipse(e) => screen.polygon(&e.outline(48), color, 2),
        other => match other.vertices() {
            Some(points) => screen.polygon(&points, color, 2),
            None => Ok(()),
        },
    }
}

impl Game for Demo {
    fn update(&mut self) -> Result<(), Error> {
        self.spin = (self.spin + 1.0) % 360.0;
        Ok(())
    }

    fn draw(&mut self, screen: &mut Screen) -> Result<(), Error> {
        screen.fill(BACKDROP)?;
        let cursor: Shape = self.cursor.clone().into();
        for shape in &self.shapes {
            let color = if shape.collide(&cursor) { HIT } else { IDLE };
            draw_shape(screen, shape, color)?;
        }

        // A spinning marker so throttling is visible.
        let hub = (PANEL_W as f32 / 2.0, 440.0);
        let tip = shapecam::shapes::rotate_point((hub.0 + 24.0, hub.1), hub, self.spin);
        screen.line(hub, tip, IDLE, 2)?;

        screen.gradient_line(self.trail_start, self.cursor.center(), IDLE, CURSOR, 1)?;
        screen.filled_circle(&self.cursor, CURSOR)
    }

    fn on_mouse_move(&mut self, pos: Point) -> Result<(), Error> {
        self.cursor = Circle::new(pos, CURSOR_RADIUS)?;
        Ok(())
    }

    fn on_mouse_down(&mut self, pos: Point, button: MouseButton) -> Result<(), Error> {
        for shape in &mut self.shapes {
            if !shape.contains_point(pos) {
                continue;
            }
            let replaced: Option<Shape> = match (button, &*shape) {
                (MouseButton::Left, Shape::EquilateralTriangle(t)) => Some(t.change_direction().into()),
                (MouseButton::Right, Shape::Triangle(t)) => Some(t.rotate(30.0, None).into()),
                _ => None,
            };
            if let Some(next) = replaced {
                *shape = next;
            }
        }
        Ok(())
    }

    fn on_quit(&mut self) -> Result<(), Error> {
        log::info!("demo closed");
        Ok(())
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    let mut camera = CameraSession::new();
    let (cam_w, cam_h) = match camera.load_camera(args.camera) {
        Ok(()) => {
            camera.set_zoom_factor(args.zoom);
            camera.set_mirror(args.mirror);
            if let Some(color) = args.remove_bg {
                camera.remove_background(color);
            }
            (camera.width()? as usize, camera.height()? as usize)
        }
        Err(e) => {
            log::warn!("running without camera: {e}");
            (0, 0)
        }
    };

    let mut runner = Runner::new(Demo::new()?, PANEL_W + cam_w, PANEL_H.max(cam_h));
    if let Some(fps) = args.draw_fps {
        runner.screen_mut().set_draw_fps(fps)?;
    }
    if let Some(fps) = args.update_fps {
        runner.screen_mut().set_update_fps(fps)?;
    }
    if camera.is_camera_loaded() {
        runner = runner.with_camera(camera, (PANEL_W as i32, 0));
    }

    runner.run("shapecam")
}

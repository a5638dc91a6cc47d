// Game loop glue: calls the user's hooks, keeps the camera overlay in step
// with them, and shows the screen in a window.
// Visual expectation: one window; each tick the game draws, the camera frame
// lands on top, and the FPS shows up in the title bar.

use crate::draw::{Drawer, Screen};
use crate::error::Error;
use crate::session::CameraSession;
use crate::shapes::Point;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    fn to_minifb(self) -> minifb::MouseButton {
        match self {
            MouseButton::Left => minifb::MouseButton::Left,
            MouseButton::Right => minifb::MouseButton::Right,
            MouseButton::Middle => minifb::MouseButton::Middle,
        }
    }
}

/// User callbacks. Every hook defaults to doing nothing.
pub trait Game {
    fn update(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn draw(&mut self, _screen: &mut Screen) -> Result<(), Error> {
        Ok(())
    }

    fn on_mouse_down(&mut self, _pos: Point, _button: MouseButton) -> Result<(), Error> {
        Ok(())
    }

    fn on_mouse_move(&mut self, _pos: Point) -> Result<(), Error> {
        Ok(())
    }

    fn on_mouse_up(&mut self, _pos: Point, _button: MouseButton) -> Result<(), Error> {
        Ok(())
    }

    fn on_quit(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseEvent {
    Down(Point, MouseButton),
    Move(Point),
    Up(Point, MouseButton),
}

/// Turns polled mouse state into edge events.
#[derive(Debug, Default)]
pub struct MouseTracker {
    last_pos: Option<Point>,
    pressed: [bool; 3],
}

impl MouseTracker {
    /// Compare with the previous poll. `down` is indexed like [`MouseButton::ALL`].
    /// Moves come first, then presses, then releases.
    pub fn observe(&mut self, pos: Option<Point>, down: [bool; 3]) -> Vec<MouseEvent> {
        let mut events = Vec::new();
        let Some(p) = pos else {
            return events;
        };
        if self.last_pos != Some(p) {
            if self.last_pos.is_some() {
                events.push(MouseEvent::Move(p));
            }
            self.last_pos = Some(p);
        }
        for (i, button) in MouseButton::ALL.into_iter().enumerate() {
            match (self.pressed[i], down[i]) {
                (false, true) => events.push(MouseEvent::Down(p, button)),
                (true, false) => events.push(MouseEvent::Up(p, button)),
                _ => {}
            }
            self.pressed[i] = down[i];
        }
        events
    }
}

/// Counts ticks and reports the rate about once per second.
#[derive(Debug)]
pub struct FpsCounter {
    since: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { since: now, frames: 0 }
    }

    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

fn throttle(fps: Option<u32>) {
    if let Some(fps) = fps {
        thread::sleep(Duration::from_secs_f32(1.0 / fps as f32));
    }
}

pub struct Runner<G: Game> {
    game: G,
    screen: Screen,
    camera: Option<CameraSession>,
    camera_origin: (i32, i32),
}

impl<G: Game> Runner<G> {
    /// A runner with a black `width` x `height` screen and no camera.
    pub fn new(game: G, width: usize, height: usize) -> Self {
        let mut screen = Screen::new();
        screen.init(width, height);
        Self { game, screen, camera: None, camera_origin: (0, 0) }
    }

    /// Draw `camera` on top of the game with its top-left at `origin`.
    pub fn with_camera(mut self, camera: CameraSession, origin: (i32, i32)) -> Self {
        self.camera = Some(camera);
        self.camera_origin = origin;
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn camera_mut(&mut self) -> Option<&mut CameraSession> {
        self.camera.as_mut()
    }

    fn loaded_camera(&mut self) -> Option<&mut CameraSession> {
        self.camera.as_mut().filter(|c| c.is_camera_loaded())
    }

    /// User update, update throttle, then a camera capture.
    pub fn tick_update(&mut self) -> Result<(), Error> {
        self.game.update()?;
        throttle(self.screen.update_fps());
        if let Some(camera) = self.loaded_camera() {
            camera.update()?;
        }
        Ok(())
    }

    /// User draw, camera overlay, then the draw throttle.
    pub fn tick_draw(&mut self) -> Result<(), Error> {
        self.game.draw(&mut self.screen)?;
        if let Some(camera) = self.camera.as_ref().filter(|c| c.is_camera_loaded()) {
            camera.draw(&mut self.screen, self.camera_origin)?;
        }
        throttle(self.screen.draw_fps());
        Ok(())
    }

    /// User quit hook, then release the camera.
    pub fn quit(&mut self) -> Result<(), Error> {
        self.game.on_quit()?;
        if let Some(camera) = self.loaded_camera() {
            camera.release()?;
        }
        Ok(())
    }

    pub fn dispatch(&mut self, event: MouseEvent) -> Result<(), Error> {
        match event {
            MouseEvent::Down(p, b) => self.game.on_mouse_down(p, b),
            MouseEvent::Move(p) => self.game.on_mouse_move(p),
            MouseEvent::Up(p, b) => self.game.on_mouse_up(p, b),
        }
    }

    /// Open a window and loop until it is closed or Escape is pressed.
    /// The quit hook runs on the way out, even when a tick failed.
    pub fn run(mut self, title: &str) -> Result<(), Error> {
        let mut drawer = Drawer::new(title, self.screen.width()?, self.screen.height()?)?;
        let outcome = self.event_loop(&mut drawer, title);
        let released = self.quit();
        outcome.and(released)
    }

    fn event_loop(&mut self, drawer: &mut Drawer, title: &str) -> Result<(), Error> {
        let mut mouse = MouseTracker::default();
        let mut fps = FpsCounter::new(Instant::now());

        while drawer.is_open() && !drawer.esc_pressed() {
            let down = MouseButton::ALL.map(|b| drawer.mouse_down(b.to_minifb()));
            for event in mouse.observe(drawer.mouse_pos(), down) {
                self.dispatch(event)?;
            }

            self.tick_update()?;
            self.tick_draw()?;
            drawer.present(self.screen.surface()?)?;

            if let Some(rate) = fps.tick(Instant::now()) {
                log::debug!("FPS: {rate:.1}");
                drawer.set_title(&format!("{title} | FPS: {rate:.1}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FrameSource;
    use crate::types::WHITE;
    use image::RgbImage;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        last_down: Option<(Point, MouseButton)>,
    }

    impl Game for Recorder {
        fn update(&mut self) -> Result<(), Error> {
            self.calls.push("update");
            Ok(())
        }
        fn draw(&mut self, screen: &mut Screen) -> Result<(), Error> {
            self.calls.push("draw");
            screen.clear()
        }
        fn on_mouse_down(&mut self, pos: Point, button: MouseButton) -> Result<(), Error> {
            self.last_down = Some((pos, button));
            Ok(())
        }
        fn on_quit(&mut self) -> Result<(), Error> {
            self.calls.push("quit");
            Ok(())
        }
    }

    struct White;

    impl FrameSource for White {
        fn grab(&mut self) -> Result<Option<RgbImage>, Error> {
            Ok(Some(RgbImage::from_pixel(2, 2, WHITE)))
        }
        fn resolution(&self) -> (u32, u32) {
            (2, 2)
        }
        fn release(&mut self) -> Result<(), Error> {
            Ok(())
        }
    }

    fn with_camera() -> Runner<Recorder> {
        let mut camera = CameraSession::new();
        camera.load(Box::new(White)).unwrap();
        Runner::new(Recorder::default(), 4, 4).with_camera(camera, (1, 1))
    }

    #[test]
    fn tick_draws_camera_over_game() {
        let mut runner = with_camera();
        runner.tick_update().unwrap();
        runner.tick_draw().unwrap();
        let surface = runner.screen().surface().unwrap();
        assert_eq!(surface.get(0, 0), Some(0));
        assert_eq!(surface.get(1, 1), Some(0x00FF_FFFF));
        assert_eq!(surface.get(2, 2), Some(0x00FF_FFFF));
        assert_eq!(runner.game().calls, ["update", "draw"]);
    }

    #[test]
    fn quit_releases_camera() {
        let mut runner = with_camera();
        runner.quit().unwrap();
        assert_eq!(runner.game().calls, ["quit"]);
        assert!(!runner.camera_mut().unwrap().is_camera_loaded());
        // A released camera is skipped, not an error.
        runner.tick_update().unwrap();
        runner.quit().unwrap();
    }

    #[test]
    fn runs_without_camera() {
        let mut runner = Runner::new(Recorder::default(), 2, 2);
        runner.tick_update().unwrap();
        runner.tick_draw().unwrap();
        runner.quit().unwrap();
    }

    #[test]
    fn mouse_tracker_reports_edges_only() {
        let mut t = MouseTracker::default();
        assert!(t.observe(Some((1.0, 1.0)), [false; 3]).is_empty());
        assert_eq!(
            t.observe(Some((1.0, 1.0)), [true, false, false]),
            [MouseEvent::Down((1.0, 1.0), MouseButton::Left)]
        );
        assert!(t.observe(Some((1.0, 1.0)), [true, false, false]).is_empty());
        assert_eq!(
            t.observe(Some((3.0, 2.0)), [false, false, false]),
            [MouseEvent::Move((3.0, 2.0)), MouseEvent::Up((3.0, 2.0), MouseButton::Left)]
        );
        assert!(t.observe(None, [true; 3]).is_empty());
    }

    #[test]
    fn mouse_events_reach_the_game() {
        let mut runner = Runner::new(Recorder::default(), 2, 2);
        runner.dispatch(MouseEvent::Down((1.0, 0.0), MouseButton::Right)).unwrap();
        assert_eq!(runner.game().last_down, Some(((1.0, 0.0), MouseButton::Right)));
        runner.game_mut().last_down = None;
        runner.dispatch(MouseEvent::Up((1.0, 0.0), MouseButton::Right)).unwrap();
        assert_eq!(runner.game().last_down, None);
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);
        assert_eq!(fps.tick(start + Duration::from_millis(500)), None);
        let rate = fps.tick(start + Duration::from_secs(1)).unwrap();
        assert!((rate - 2.0).abs() < 1e-3);
        assert_eq!(fps.tick(start + Duration::from_millis(1500)), None);
    }
}

// Live camera overlay state.
// Visual expectation: after `load_camera()`, every `update()` grabs the newest
// camera image, zooms it, optionally swaps the room behind you for a flat
// color, and `draw()` puts that image on the screen.

use crate::camera::{CameraCapture, FrameSource};
use crate::draw::Screen;
use crate::error::Error;
use crate::pipeline::{process_frame, OverlaySettings};
use crate::segment::{BackgroundModel, Segmenter};
use crate::types::{Color, FrameBuffer};

/// Resolution asked of a real camera; the device may pick the closest it has.
pub const DEFAULT_CAPTURE_SIZE: (u32, u32) = (640, 480);

enum State {
    Unloaded,
    Loaded(Box<dyn FrameSource>),
    Released,
}

/// One camera feed drawn on top of the game.
///
/// Every operation except loading fails with [`Error::CameraNotLoaded`]
/// until a camera is loaded, and again after [`CameraSession::release`].
pub struct CameraSession {
    state: State,
    settings: OverlaySettings,
    segmenter: Box<dyn Segmenter>,
    frame: Option<FrameBuffer>,
}

impl Default for CameraSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraSession {
    pub fn new() -> Self {
        Self {
            state: State::Unloaded,
            settings: OverlaySettings {
                width: 0,
                height: 0,
                zoom: 1.0,
                background: None,
                mirror: false,
            },
            segmenter: Box::new(BackgroundModel::default()),
            frame: None,
        }
    }

    /// Replace the segmenter used for background removal.
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Open camera `index` on this machine and start streaming.
    pub fn load_camera(&mut self, index: u32) -> Result<(), Error> {
        let (w, h) = DEFAULT_CAPTURE_SIZE;
        let capture = CameraCapture::new(index, w, h)?;
        self.load(Box::new(capture))
    }

    /// Start streaming from any frame source.
    /// Loading over a live source releases the old one first.
    pub fn load(&mut self, source: Box<dyn FrameSource>) -> Result<(), Error> {
        if let State::Loaded(old) = &mut self.state {
            old.release()?;
        }
        let (width, height) = source.resolution();
        self.settings.width = width;
        self.settings.height = height;
        self.frame = None;
        self.state = State::Loaded(source);
        log::info!("camera session loaded at {width}x{height}");
        Ok(())
    }

    pub fn is_camera_loaded(&self) -> bool {
        matches!(self.state, State::Loaded(_))
    }

    fn source(&mut self, operation: &'static str) -> Result<&mut Box<dyn FrameSource>, Error> {
        match &mut self.state {
            State::Loaded(source) => Ok(source),
            _ => Err(Error::CameraNotLoaded { operation }),
        }
    }

    fn ensure_loaded(&self, operation: &'static str) -> Result<(), Error> {
        if self.is_camera_loaded() {
            Ok(())
        } else {
            Err(Error::CameraNotLoaded { operation })
        }
    }

    /// Width of the frames `draw()` produces.
    pub fn width(&self) -> Result<u32, Error> {
        self.ensure_loaded("width")?;
        Ok(self.settings.width)
    }

    /// Height of the frames `draw()` produces.
    pub fn height(&self) -> Result<u32, Error> {
        self.ensure_loaded("height")?;
        Ok(self.settings.height)
    }

    /// Digital zoom. Stored as given; 1.0 or less shows the whole frame.
    pub fn set_zoom_factor(&mut self, zoom: f32) {
        log::debug!("camera zoom set to {zoom}");
        self.settings.zoom = zoom;
    }

    pub fn zoom_factor(&self) -> f32 {
        self.settings.zoom
    }

    /// Replace everything behind you with `color`.
    pub fn remove_background(&mut self, color: Color) {
        log::debug!("background removal on, color {:?}", color.0);
        self.settings.background = Some(color);
    }

    pub fn disable_background_removal(&mut self) {
        log::debug!("background removal off");
        self.settings.background = None;
    }

    /// Replacement color while background removal is on.
    pub fn background_color(&self) -> Option<Color> {
        self.settings.background
    }

    /// Flip the feed horizontally (selfie view).
    pub fn set_mirror(&mut self, mirror: bool) {
        self.settings.mirror = mirror;
    }

    /// Grab and process one frame. An empty capture keeps the previous frame.
    pub fn update(&mut self) -> Result<(), Error> {
        let Some(raw) = self.source("update")?.grab()? else {
            log::trace!("empty capture, keeping previous frame");
            return Ok(());
        };
        let frame = process_frame(raw, &self.settings, self.segmenter.as_mut())?;
        self.frame = Some(frame);
        Ok(())
    }

    /// The last processed frame, if any has arrived yet.
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    /// Blit the latest frame onto `screen` with its top-left at `position`.
    /// Visual: nothing appears until the first frame has been captured.
    pub fn draw(&self, screen: &mut Screen, position: (i32, i32)) -> Result<(), Error> {
        self.ensure_loaded("draw")?;
        match &self.frame {
            Some(frame) => screen.blit(frame, position),
            None => Ok(()),
        }
    }

    /// Stop the camera. Calling it again after a successful release does nothing.
    pub fn release(&mut self) -> Result<(), Error> {
        match &mut self.state {
            State::Unloaded => Err(Error::CameraNotLoaded { operation: "release" }),
            State::Released => Ok(()),
            State::Loaded(source) => {
                source.release()?;
                self.state = State::Released;
                self.frame = None;
                log::info!("camera session released");
                Ok(())
            }
        }
    }
}

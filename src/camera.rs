// Opens a camera and hands out decoded RGB frames.
// Visual expectation: each `grab()` returns the image the camera sees right
// now, upright and in RGB order, ready for the overlay pipeline.

use crate::error::Error;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::RgbImage;

/// Anything that can feed frames to a camera session.
///
/// The session only talks to this trait, so tests can script frames and the
/// real device stays behind `CameraCapture`.
pub trait FrameSource {
    /// Block until the next frame is available.
    /// `Ok(None)` means the device delivered nothing usable this time.
    fn grab(&mut self) -> Result<Option<RgbImage>, Error>;

    /// Resolution the source is delivering (width, height).
    fn resolution(&self) -> (u32, u32);

    /// Stop streaming. Called once by the session.
    fn release(&mut self) -> Result<(), Error>;
}

// A small wrapper around nokhwa::Camera so the session stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open camera `index` at a target resolution (falls back if not exact).
    /// On success, nothing is shown on screen yet; it only holds an open stream.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames close to the requested format.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera {index}: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        log::info!(
            "camera {index} streaming at {}x{} (asked for {width}x{height})",
            actual.width(),
            actual.height()
        );

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }
}

impl FrameSource for CameraCapture {
    /// Grab one frame and decode it to RGB.
    /// A failed fetch or decode is reported as "no frame", not as an error:
    /// the overlay simply keeps showing the previous frame.
    fn grab(&mut self) -> Result<Option<RgbImage>, Error> {
        // Blocks until a new frame is ready.
        let frame = match self.cam.frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::trace!("camera frame fetch failed: {e}");
                return Ok(None);
            }
        };
        if frame.buffer().is_empty() {
            log::trace!("camera delivered an empty buffer");
            return Ok(None);
        }

        // Decoding handles the raw formats (YUYV, MJPEG, ...) and yields RGB order.
        match frame.decode_image::<RgbFormat>() {
            Ok(img) => Ok(Some(img)),
            Err(e) => {
                log::trace!("camera frame decode failed: {e}");
                Ok(None)
            }
        }
    }

    /// Report the actual resolution the camera is delivering.
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn release(&mut self) -> Result<(), Error> {
        self.cam
            .stop_stream()
            .map_err(|e| Error::CameraFrame(format!("Stop stream: {e}")))?;
        log::info!("camera released");
        Ok(())
    }
}

// One error type for the whole crate.
// Every variant states *where* things went wrong; all of them are caller
// mistakes or device failures and are returned at the offending call.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Drawing on a `Screen` before `init()` gave it a surface.
    #[error("screen is not initialized (called {0} before init)")]
    NotInitialized(&'static str),

    /// Outline thickness must be at least 1 pixel.
    #[error("cannot draw with thickness {0}, it must be greater than 0")]
    InvalidThickness(i32),

    /// Wrong vertex count or impossible extents.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Camera operation before `load_camera()` (or after release).
    #[error("camera is not loaded (called {operation}); load it with load_camera()")]
    CameraNotLoaded { operation: &'static str },

    /// Frames per second must be positive.
    #[error("frames per second must be greater than 0, got {0}")]
    InvalidFps(i32),

    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
}

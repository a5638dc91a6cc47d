//! Shape primitives with collision tests, a software drawing surface, and a
//! live camera overlay for small 2D game loops.
//!
//! - [`shapes`]: triangles, polygons, ellipses, rects and squares
//! - [`Screen`]: the surface games draw on
//! - [`CameraSession`]: camera capture with zoom and background replacement
//! - [`Runner`]: drives a [`Game`] in a window

pub mod camera;
pub mod config;
pub mod draw;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod segment;
pub mod session;
pub mod shapes;
pub mod types;

pub use camera::{CameraCapture, FrameSource};
pub use draw::{lerp_color, Screen};
pub use error::Error;
pub use runner::{Game, MouseButton, Runner};
pub use segment::{BackgroundModel, Segmenter};
pub use session::CameraSession;
pub use types::{Color, FrameBuffer, Mask};

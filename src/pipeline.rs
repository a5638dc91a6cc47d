// Per-tick frame processing for the camera overlay.
// Steps, in order: zoom (center crop + resize), background replacement,
// orientation, packing into a FrameBuffer for the screen.

use crate::error::Error;
use crate::segment::{is_foreground, Segmenter};
use crate::types::{Color, FrameBuffer, Mask};
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Region of the frame kept by a digital zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Centered crop for `zoom`, or `None` when there is nothing to crop (zoom <= 1).
///
/// The window is `(width / zoom, height / zoom)` centered on the frame and
/// clamped to its bounds. 640x480 at zoom 2 keeps x 160..480, y 120..360.
pub fn crop_window(width: u32, height: u32, zoom: f32) -> Option<CropWindow> {
    if !(zoom > 1.0) || width == 0 || height == 0 {
        return None;
    }
    let (cx, cy) = (width / 2, height / 2);
    let nw = (width as f32 / zoom) as u32;
    let nh = (height as f32 / zoom) as u32;

    let x1 = cx.saturating_sub(nw / 2);
    let y1 = cy.saturating_sub(nh / 2);
    let x2 = (cx + nw / 2).min(width);
    let y2 = (cy + nh / 2).min(height);

    // Extreme zoom still keeps one pixel to scale up.
    Some(CropWindow {
        x: x1.min(width - 1),
        y: y1.min(height - 1),
        width: (x2 - x1).max(1),
        height: (y2 - y1).max(1),
    })
}

/// Crop to the zoom window and scale back up to (out_w, out_h).
/// Bilinear resampling, so the same input always gives the same output.
pub fn zoom_frame(frame: RgbImage, out_w: u32, out_h: u32, zoom: f32) -> RgbImage {
    let (w, h) = frame.dimensions();
    let cropped = match crop_window(w, h, zoom) {
        Some(win) => imageops::crop_imm(&frame, win.x, win.y, win.width, win.height).to_image(),
        None => frame,
    };
    if cropped.dimensions() == (out_w, out_h) {
        cropped
    } else {
        imageops::resize(&cropped, out_w, out_h, FilterType::Triangle)
    }
}

/// Replace every background pixel (confidence <= 0.5) with `color`.
/// Visual: you stay on screen, the room behind you turns into a flat color.
pub fn composite_background(frame: &mut RgbImage, mask: &Mask, color: Color) -> Result<(), Error> {
    let (w, h) = frame.dimensions();
    if mask.width != w as usize || mask.height != h as usize {
        return Err(Error::CameraFrame(format!(
            "composite: mask is {}x{} but frame is {w}x{h}",
            mask.width, mask.height
        )));
    }
    for (px, &confidence) in frame.pixels_mut().zip(&mask.alpha) {
        if !is_foreground(confidence) {
            *px = color;
        }
    }
    Ok(())
}

/// Frames arrive row-major and upright, same as the screen, so the only
/// orientation change is the optional selfie mirror.
pub fn orient(frame: &mut RgbImage, mirror: bool) {
    if mirror {
        imageops::flip_horizontal_in_place(frame);
    }
}

/// Everything the pipeline needs to know about the current session.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySettings {
    pub width: u32,
    pub height: u32,
    pub zoom: f32,
    /// `Some(color)` when background removal is on.
    pub background: Option<Color>,
    pub mirror: bool,
}

/// Run one captured frame through the whole pipeline.
pub fn process_frame(
    frame: RgbImage,
    settings: &OverlaySettings,
    segmenter: &mut dyn Segmenter,
) -> Result<FrameBuffer, Error> {
    let mut frame = zoom_frame(frame, settings.width, settings.height, settings.zoom);

    if let Some(color) = settings.background {
        let mask = segmenter.segment(&frame)?;
        composite_background(&mut frame, &mask, color)?;
    }

    orient(&mut frame, settings.mirror);
    Ok(FrameBuffer::from_rgb(&frame))
}

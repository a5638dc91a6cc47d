// Core pixel types shared by the screen and the camera pipeline.

use image::{Rgb, RgbImage};

/// Colors are plain RGB triplets (the `image` crate's pixel type).
pub type Color = Rgb<u8>;

pub const BLACK: Color = Rgb([0, 0, 0]);
pub const WHITE: Color = Rgb([255, 255, 255]);

/// Pack an RGB triplet as 0x00RRGGBB, the layout minifb expects.
#[inline]
pub fn pack_rgb(c: Color) -> u32 {
    ((c[0] as u32) << 16) | ((c[1] as u32) << 8) | c[2] as u32
}

/// Inverse of [`pack_rgb`].
#[inline]
pub fn unpack_rgb(px: u32) -> Color {
    Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of the given size filled with one color.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self { width, height, pixels: vec![pack_rgb(color); width * height] }
    }

    /// Row-major copy of an RGB image.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img.pixels().map(|p| pack_rgb(*p)).collect();
        Self { width: w as usize, height: h as usize, pixels }
    }

    /// Pixel at (x, y), `None` when outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Per-pixel foreground confidence in [0,1]; 1 = keep the camera pixel.
#[derive(Clone, Debug)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<f32>,   // length = width * height, values clamped to [0.0, 1.0]
}

impl Mask {
    /// Everything is foreground.
    pub fn full(width: usize, height: usize) -> Self {
        Self { width, height, alpha: vec![1.0; width * height] }
    }
}

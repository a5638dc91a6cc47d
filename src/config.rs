// Command-line options for the demo binary.

use crate::types::Color;
use clap::Parser;
use image::Rgb;

/// Shapes that react to the mouse, with a live camera overlay.
#[derive(Debug, Clone, Parser)]
#[command(name = "shapecam", version)]
pub struct Args {
    /// Camera index to open
    #[arg(long, default_value_t = 0)]
    pub camera: u32,

    /// Digital zoom; 1.0 or less shows the full frame
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f32,

    /// Replace the background with this color (hex RRGGBB, white if omitted)
    #[arg(
        long = "remove-bg",
        value_name = "RRGGBB",
        num_args = 0..=1,
        default_missing_value = "ffffff",
        value_parser = parse_hex_color
    )]
    pub remove_bg: Option<Color>,

    /// Flip the camera horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Cap draw calls per second
    #[arg(long)]
    pub draw_fps: Option<i32>,

    /// Cap update calls per second
    #[arg(long)]
    pub update_fps: Option<i32>,
}

/// `RRGGBB` or `#RRGGBB`.
pub fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected 6 hex digits (RRGGBB), got {s:?}"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("bad hex color {s:?}: {e}"))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

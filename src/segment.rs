// Foreground/background segmentation for the camera overlay.
// Visual expectation: after the background model has watched the empty scene
// for a moment, pixels that differ from it (you, your hands) get confidence
// near 1 and everything else near 0.
use crate::error::Error;
use crate::types::Mask;
use image::{Rgb, RgbImage};

pub const BG_CAPTURE_COUNT: usize = 35; // ~1–2 seconds of frames at 30 FPS

/// Confidence above this is foreground.
pub const FOREGROUND_THRESHOLD: f32 = 0.5;

/// Produces a per-pixel foreground confidence mask for a frame.
pub trait Segmenter {
    /// The mask must have the frame's width and height.
    fn segment(&mut self, frame: &RgbImage) -> Result<Mask, Error>;
}

#[inline]
pub fn is_foreground(confidence: f32) -> bool {
    confidence > FOREGROUND_THRESHOLD
}

/// Compute per-pixel median across the provided frames (all same size).
/// What you *see* afterward: a clean background image with moving objects removed.
pub fn median_background(frames: &[RgbImage]) -> Result<RgbImage, Error> {
    let first = frames
        .first()
        .ok_or_else(|| Error::CameraFrame("median_background: no frames".into()))?;
    let (w, h) = first.dimensions();
    if frames.iter().any(|f| f.dimensions() != (w, h)) {
        return Err(Error::CameraFrame(
            "median_background: frames must share identical dimensions".into(),
        ));
    }

    // One scratch buffer per channel, reused for every pixel.
    let k = frames.len();
    let mut channels = [vec![0u8; k], vec![0u8; k], vec![0u8; k]];
    let mut out = RgbImage::new(w, h);

    for (x, y, px) in out.enumerate_pixels_mut() {
        for (i, f) in frames.iter().enumerate() {
            let p = f.get_pixel(x, y);
            for c in 0..3 {
                channels[c][i] = p[c];
            }
        }
        let mid = k / 2;
        let mut median = [0u8; 3];
        for c in 0..3 {
            channels[c].sort_unstable();
            median[c] = channels[c][mid];
        }
        *px = Rgb(median);
    }

    Ok(out)
}

/// Two-pass sliding-window box blur over a mask, edges extended.
/// Visual: softens speckle so isolated noisy pixels don't flip to foreground.
pub fn box_blur_mask(mask: &Mask, radius: usize) -> Mask {
    if radius == 0 || mask.width == 0 || mask.height == 0 {
        return mask.clone();
    }
    let (w, h) = (mask.width, mask.height);
    let r = radius as isize;
    let win = (2 * radius + 1) as f32;
    let clamp = |v: isize, max: usize| v.clamp(0, max as isize - 1) as usize;

    // Pass 1: horizontal.
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = &mask.alpha[y * w..(y + 1) * w];
        let mut sum: f32 = (-r..=r).map(|dx| row[clamp(dx, w)]).sum();
        for x in 0..w {
            tmp[y * w + x] = sum / win;
            let xi = x as isize;
            sum += row[clamp(xi + r + 1, w)] - row[clamp(xi - r, w)];
        }
    }

    // Pass 2: vertical.
    let mut alpha = vec![0.0f32; w * h];
    for x in 0..w {
        let at = |y: usize| tmp[y * w + x];
        let mut sum: f32 = (-r..=r).map(|dy| at(clamp(dy, h))).sum();
        for y in 0..h {
            alpha[y * w + x] = (sum / win).clamp(0.0, 1.0);
            let yi = y as isize;
            sum += at(clamp(yi + r + 1, h)) - at(clamp(yi - r, h));
        }
    }

    Mask { width: w, height: h, alpha }
}

/// Background-difference segmenter.
///
/// Learns the empty scene as the per-pixel median of the first
/// [`BG_CAPTURE_COUNT`] frames, then scores each pixel by its RGB distance
/// from that background. Until the model is ready every pixel is foreground,
/// so the raw camera image shows through.
pub struct BackgroundModel {
    samples: Vec<RgbImage>,
    background: Option<RgbImage>,
    capture_count: usize,
    /// RGB distance that maps to full confidence.
    distance_scale: f32,
    blur_radius: usize,
}

impl Default for BackgroundModel {
    fn default() -> Self {
        Self::new(BG_CAPTURE_COUNT)
    }
}

impl BackgroundModel {
    pub fn new(capture_count: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capture_count),
            background: None,
            capture_count: capture_count.max(1),
            distance_scale: 60.0,
            blur_radius: 2,
        }
    }

    pub fn with_distance_scale(mut self, scale: f32) -> Self {
        self.distance_scale = scale.max(f32::EPSILON);
        self
    }

    pub fn with_blur_radius(mut self, radius: usize) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.background.is_some()
    }

    pub fn background(&self) -> Option<&RgbImage> {
        self.background.as_ref()
    }

    /// Forget the learned background and start collecting again.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.background = None;
    }

    fn learn(&mut self, frame: &RgbImage) -> Result<(), Error> {
        if self.samples.first().is_some_and(|s| s.dimensions() != frame.dimensions()) {
            self.samples.clear();
        }
        self.samples.push(frame.clone());
        if self.samples.len() >= self.capture_count {
            self.background = Some(median_background(&self.samples)?);
            self.samples.clear();
            log::info!("background model ready after {} frames", self.capture_count);
        }
        Ok(())
    }
}

impl Segmenter for BackgroundModel {
    fn segment(&mut self, frame: &RgbImage) -> Result<Mask, Error> {
        let (w, h) = frame.dimensions();

        if self.background.as_ref().is_some_and(|bg| bg.dimensions() != (w, h)) {
            log::warn!("frame size changed to {w}x{h}, relearning background");
            self.reset();
        }
        let Some(bg) = &self.background else {
            self.learn(frame)?;
            return Ok(Mask::full(w as usize, h as usize));
        };

        let alpha = frame
            .pixels()
            .zip(bg.pixels())
            .map(|(p, b)| {
                let d2: f32 = (0..3).map(|c| (p[c] as f32 - b[c] as f32).powi(2)).sum();
                (d2.sqrt() / self.distance_scale).clamp(0.0, 1.0)
            })
            .collect();
        let raw = Mask { width: w as usize, height: h as usize, alpha };
        Ok(box_blur_mask(&raw, self.blur_radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, c: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(c))
    }

    #[test]
    fn median_ignores_outliers() {
        let frames = vec![solid(2, 1, [10, 10, 10]), solid(2, 1, [250, 0, 0]), solid(2, 1, [12, 10, 10])];
        let bg = median_background(&frames).unwrap();
        assert_eq!(bg.get_pixel(0, 0), &Rgb([12, 10, 10]));
    }

    #[test]
    fn median_rejects_mixed_sizes() {
        let frames = vec![solid(2, 1, [0; 3]), solid(1, 2, [0; 3])];
        assert!(median_background(&frames).is_err());
        assert!(median_background(&[]).is_err());
    }

    #[test]
    fn blur_spreads_a_single_pixel() {
        let mut m = Mask { width: 5, height: 5, alpha: vec![0.0; 25] };
        m.alpha[12] = 1.0;
        let b = box_blur_mask(&m, 1);
        assert!((b.alpha[12] - 1.0 / 9.0).abs() < 1e-6);
        assert!((b.alpha[6] - 1.0 / 9.0).abs() < 1e-6);
        assert_eq!(b.alpha[0], 0.0);
        let total: f32 = b.alpha.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn blur_keeps_uniform_mask() {
        let m = Mask::full(4, 3);
        let b = box_blur_mask(&m, 2);
        assert!(b.alpha.iter().all(|a| (a - 1.0).abs() < 1e-6));
    }

    #[test]
    fn model_reports_foreground_while_learning() {
        let mut model = BackgroundModel::new(3);
        let frame = solid(4, 4, [50, 50, 50]);
        for _ in 0..2 {
            let mask = model.segment(&frame).unwrap();
            assert!(mask.alpha.iter().all(|&a| a == 1.0));
        }
        assert!(!model.is_ready());
        model.segment(&frame).unwrap();
        assert!(model.is_ready());
    }

    #[test]
    fn model_separates_changed_pixels() {
        let mut model = BackgroundModel::new(1).with_blur_radius(0);
        model.segment(&solid(3, 1, [50, 50, 50])).unwrap();

        let mut frame = solid(3, 1, [50, 50, 50]);
        frame.put_pixel(2, 0, Rgb([250, 250, 250]));
        let mask = model.segment(&frame).unwrap();
        assert!(!is_foreground(mask.alpha[0]));
        assert!(is_foreground(mask.alpha[2]));
    }

    #[test]
    fn size_change_restarts_learning() {
        let mut model = BackgroundModel::new(1);
        model.segment(&solid(2, 2, [0; 3])).unwrap();
        assert!(model.is_ready());
        let mask = model.segment(&solid(3, 3, [200; 3])).unwrap();
        assert_eq!((mask.width, mask.height), (3, 3));
        assert!(mask.alpha.iter().all(|&a| a == 1.0));
        // Capture count of one: the new frame became the background right away.
        assert_eq!(model.background().map(|b| b.dimensions()), Some((3, 3)));
    }

    #[test]
    fn distance_scale_sets_full_confidence_distance() {
        let mut model = BackgroundModel::new(1).with_blur_radius(0).with_distance_scale(500.0);
        model.segment(&solid(2, 1, [50, 50, 50])).unwrap();

        let mut frame = solid(2, 1, [250, 50, 50]);
        frame.put_pixel(1, 0, Rgb([250, 250, 250]));
        let mask = model.segment(&frame).unwrap();
        // 200 / 500 and ~346 / 500.
        assert!((mask.alpha[0] - 0.4).abs() < 1e-4);
        assert!(!is_foreground(mask.alpha[0]));
        assert!(is_foreground(mask.alpha[1]));
    }
}

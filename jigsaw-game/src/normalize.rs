//! Cover-fit normalization of arbitrary source images onto the fixed puzzle canvas.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage, RgbImage};

use crate::constants::{CANVAS_HEIGHT, CANVAS_JPEG_QUALITY, CANVAS_WIDTH, debug_log_enabled};
use crate::error::PuzzleError;

/// Placement of a scaled source image on the canvas.
///
/// Offsets are negative on the axis that overflows; the canvas bounds crop
/// whatever falls outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: i64,
    pub offset_y: i64,
}

impl CoverFit {
    /// Compute the uniform scale that covers the canvas and the centering offset.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ImageDecode`] when either source dimension is zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(src_width: u32, src_height: u32) -> Result<Self, PuzzleError> {
        if src_width == 0 || src_height == 0 {
            return Err(PuzzleError::ImageDecode(format!(
                "image has no pixels ({src_width}x{src_height})"
            )));
        }
        let width = f64::from(src_width);
        let height = f64::from(src_height);
        let scale = (f64::from(CANVAS_WIDTH) / width).max(f64::from(CANVAS_HEIGHT) / height);
        let scaled_width = ((width * scale).round() as u32).max(1);
        let scaled_height = ((height * scale).round() as u32).max(1);
        Ok(Self {
            scale,
            scaled_width,
            scaled_height,
            offset_x: (i64::from(CANVAS_WIDTH) - i64::from(scaled_width)) / 2,
            offset_y: (i64::from(CANVAS_HEIGHT) - i64::from(scaled_height)) / 2,
        })
    }

    /// Source rectangle `(x, y, width, height)` that lands on the canvas.
    ///
    /// Cropping to it before scaling keeps thin strips from being blown up
    /// to their full cover size.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn visible_region(&self, src_width: u32, src_height: u32) -> (u32, u32, u32, u32) {
        let span = |canvas: u32, src: u32| {
            ((f64::from(canvas) / self.scale - 1e-9).ceil() as u32).clamp(1, src.max(1))
        };
        let width = span(CANVAS_WIDTH, src_width);
        let height = span(CANVAS_HEIGHT, src_height);
        ((src_width - width) / 2, (src_height - height) / 2, width, height)
    }
}

/// A source image drawn onto the 800x600 puzzle canvas.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub canvas: RgbImage,
    pub fit: CoverFit,
}

impl NormalizedImage {
    /// Encode the canvas as JPEG, the format the board renders from.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::ImageDecode`] if the encoder rejects the buffer.
    pub fn to_jpeg(&self) -> Result<Vec<u8>, PuzzleError> {
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, CANVAS_JPEG_QUALITY).encode_image(&self.canvas)?;
        Ok(bytes)
    }
}

/// Decode encoded image bytes and normalize them onto the puzzle canvas.
///
/// # Errors
///
/// Returns [`PuzzleError::ImageDecode`] when the bytes are not a supported
/// image or the image has no pixels.
pub fn normalize_image(bytes: &[u8]) -> Result<NormalizedImage, PuzzleError> {
    let source = image::load_from_memory(bytes)?;
    normalize(&source)
}

/// Normalize an already decoded image.
///
/// # Errors
///
/// Returns [`PuzzleError::ImageDecode`] when the image has no pixels.
pub fn normalize(source: &DynamicImage) -> Result<NormalizedImage, PuzzleError> {
    let fit = CoverFit::compute(source.width(), source.height())?;
    let (x, y, width, height) = fit.visible_region(source.width(), source.height());
    let scaled = source
        .crop_imm(x, y, width, height)
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
        .to_rgba8();

    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, &scaled, 0, 0);

    if debug_log_enabled() {
        println!(
            "normalize: {}x{} -> {}x{} at ({}, {}) scale {:.3}",
            source.width(),
            source.height(),
            fit.scaled_width,
            fit.scaled_height,
            fit.offset_x,
            fit.offset_y,
            fit.scale
        );
    }

    Ok(NormalizedImage {
        canvas: DynamicImage::ImageRgba8(canvas).to_rgb8(),
        fit,
    })
}

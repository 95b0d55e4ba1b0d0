//! Image loading and binarization before OCR.

use deck_core::{Error, Result};
use image::{DynamicImage, GrayImage, ImageFormat};
use imageproc::contrast::adaptive_threshold;
use std::path::Path;
use tempfile::NamedTempFile;

/// Radius of the adaptive-threshold window (a 35x35 pixel block).
pub const BLOCK_RADIUS: u32 = 17;

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| Error::ImageError(format!("{}: {}", path.display(), e)))
}

/// Convert to grayscale and binarize with a local-mean adaptive threshold.
///
/// Evens out uneven lighting and colored backgrounds in photos of slides.
pub fn preprocess(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    adaptive_threshold(&gray, BLOCK_RADIUS)
}

/// Write a preprocessed image to a temporary PNG for an external engine.
///
/// The file is removed when the returned handle is dropped.
pub fn write_temp_png(image: &GrayImage) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix("deck-ocr-")
        .suffix(".png")
        .tempfile()?;
    image
        .save_with_format(file.path(), ImageFormat::Png)
        .map_err(|e| Error::ImageError(format!("Failed to write temporary image: {}", e)))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    /// Dark text-like stripes on a light gradient background.
    fn sample_image() -> DynamicImage {
        let img = RgbImage::from_fn(80, 60, |x, y| {
            if y % 12 < 3 && x > 10 && x < 70 {
                Rgb([20, 20, 20])
            } else {
                let v = 150 + (x as u8 / 2);
                Rgb([v, v, v.saturating_sub(10)])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_preprocess_is_binary_and_keeps_size() {
        let out = preprocess(&sample_image());

        assert_eq!(out.dimensions(), (80, 60));
        assert!(out.pixels().all(|Luma([v])| *v == 0 || *v == 255));
    }

    #[test]
    fn test_preprocess_marks_dark_strokes_black() {
        let out = preprocess(&sample_image());

        assert_eq!(out.get_pixel(40, 1), &Luma([0]));
        assert_eq!(out.get_pixel(40, 7), &Luma([255]));
    }

    #[test]
    fn test_load_image_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slide.png");
        sample_image().save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.width(), 80);
        assert_eq!(loaded.height(), 60);
    }

    #[test]
    fn test_load_image_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(load_image(&path), Err(Error::ImageError(_))));
    }

    #[test]
    fn test_write_temp_png() {
        let gray = preprocess(&sample_image());
        let file = write_temp_png(&gray).unwrap();

        assert_eq!(file.path().extension().unwrap(), "png");
        let reloaded = load_image(file.path()).unwrap().to_luma8();
        assert_eq!(reloaded, gray);
    }
}

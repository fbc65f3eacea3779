use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, ImageOutputFormat};
use imageproc::contrast::stretch_contrast;
use imageproc::stats::percentile;
use log::debug;

use crate::utils::ReaderError;

/// Largest accepted card image.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Accept only non-empty JPEG or PNG buffers within the size limit.
    pub fn validate_upload(image_data: &[u8]) -> Result<ImageFormat, ReaderError> {
        if image_data.is_empty() {
            return Err(ReaderError::InvalidUpload("Image is empty".to_string()));
        }
        if image_data.len() > MAX_UPLOAD_BYTES {
            return Err(ReaderError::InvalidUpload(format!(
                "Image is {} bytes, limit is {} bytes",
                image_data.len(),
                MAX_UPLOAD_BYTES
            )));
        }

        match image::guess_format(image_data) {
            Ok(format @ (ImageFormat::Jpeg | ImageFormat::Png)) => Ok(format),
            Ok(other) => Err(ReaderError::InvalidUpload(format!(
                "Invalid file type {:?}. Only JPEG and PNG are allowed.",
                other
            ))),
            Err(_) => Err(ReaderError::InvalidUpload(
                "Invalid file type. Only JPEG and PNG are allowed.".to_string(),
            )),
        }
    }

    /// Grayscale and contrast-stretch the image, returning PNG bytes for the OCR engine.
    pub fn preprocess(image_data: &[u8]) -> Result<Vec<u8>, ReaderError> {
        let img = image::load_from_memory(image_data)
            .map_err(|e| ReaderError::Engine(format!("Failed to decode image: {}", e)))?;

        let enhanced = Self::enhance_contrast(&img.to_luma8());

        let mut encoded = Vec::new();
        DynamicImage::ImageLuma8(enhanced)
            .write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Png)
            .map_err(|e| ReaderError::Engine(format!("Failed to encode image: {}", e)))?;

        Ok(encoded)
    }

    // Stretch the 2nd..98th percentile band over the full range so faded
    // scans and photos taken in poor light come out with crisp glyphs.
    fn enhance_contrast(gray: &GrayImage) -> GrayImage {
        let lower = percentile(gray, 2);
        let upper = percentile(gray, 98);
        if upper <= lower {
            debug!("flat image histogram, skipping contrast stretch");
            return gray.clone();
        }
        stretch_contrast(gray, lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma};

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let img: GrayImage = ImageBuffer::from_fn(width, height, |x, _| Luma([(60 + x * 10) as u8]));
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_accepts_png() {
        let png = gradient_png(8, 4);
        assert_eq!(ImageProcessor::validate_upload(&png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_rejects_other_formats() {
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
        assert!(matches!(
            ImageProcessor::validate_upload(gif),
            Err(ReaderError::InvalidUpload(_))
        ));
        assert!(matches!(
            ImageProcessor::validate_upload(b"plain text, not an image"),
            Err(ReaderError::InvalidUpload(_))
        ));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(matches!(
            ImageProcessor::validate_upload(&[]),
            Err(ReaderError::InvalidUpload(_))
        ));
        let oversized = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = ImageProcessor::validate_upload(&oversized).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn test_preprocess_keeps_dimensions() {
        let png = gradient_png(16, 3);
        let processed = ImageProcessor::preprocess(&png).unwrap();

        assert_eq!(image::guess_format(&processed).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&processed).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 3));
    }

    #[test]
    fn test_preprocess_flat_image() {
        let img: GrayImage = ImageBuffer::from_pixel(4, 4, Luma([128u8]));
        let mut png = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
            .unwrap();

        let processed = ImageProcessor::preprocess(&png).unwrap();
        let decoded = image::load_from_memory(&processed).unwrap().to_luma8();
        assert!(decoded.pixels().all(|p| p[0] == 128));
    }
}

//! Transport encoding for captured photos.
//!
//! The caller owns camera/gallery capture and file decoding; this module only
//! turns an in-memory bitmap into the base64 JPEG payload the classifier
//! endpoint expects.

use std::io::Cursor;

use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use thiserror::Error;

/// JPEG quality used for upload. Matches the capture pipeline: the remote
/// model was trained on uncompressed-quality photos.
const JPEG_QUALITY: u8 = 100;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JPEG encoding failed: {0}")]
    Jpeg(#[from] image::ImageError),
}

/// Encode a decoded bitmap as base64 JPEG for inclusion in an HTTP body.
pub fn encode_jpeg_base64(image: &DynamicImage) -> Result<String, EncodeError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    image.write_with_encoder(encoder)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(buf.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(8, 8, |x, y| {
            image::Rgb([(x * 32) as u8, (y * 32) as u8, 128])
        }))
    }

    #[test]
    fn encodes_to_valid_base64_jpeg() {
        let encoded = encode_jpeg_base64(&test_image()).unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn output_is_single_line_payload() {
        let encoded = encode_jpeg_base64(&test_image()).unwrap();
        assert!(!encoded.contains('\n'));
        assert!(!encoded.is_empty());
    }
}

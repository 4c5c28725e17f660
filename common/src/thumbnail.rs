//! 履歴表示用サムネイル（JPEG data URL）

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

/// サムネイルの最大辺
pub const THUMBNAIL_SIZE: u32 = 96;

const JPEG_QUALITY: u8 = 70;

/// 縦横比を保って `max_side` 以内に縮小し、`data:image/jpeg;base64,...` にする
pub fn make_thumbnail(image: &DynamicImage, max_side: u32) -> Result<String, image::ImageError> {
    let rgb = image.thumbnail(max_side, max_side).to_rgb8();

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode_image(&rgb)?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&buf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn test_thumbnail_is_jpeg_data_url() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(400, 200, Rgb([10u8, 120, 200])));
        let url = make_thumbnail(&img, THUMBNAIL_SIZE).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));

        let encoded = url.trim_start_matches("data:image/jpeg;base64,");
        let bytes = STANDARD.decode(encoded).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.width() <= THUMBNAIL_SIZE);
        assert!(decoded.height() <= THUMBNAIL_SIZE);
    }
}

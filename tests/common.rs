use image::{ImageEncoder, RgbImage};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a real, decodable PNG with a simple gradient pattern.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write a real, decodable JPEG.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    let file = File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new_with_quality(writer, 90)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write bytes that no image decoder will accept.
pub fn write_corrupt_image(path: &Path) {
    let mut file = File::create(path).unwrap();
    file.write_all(b"definitely not pixel data").unwrap();
}

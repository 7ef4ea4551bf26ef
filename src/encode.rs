/// Target-format encoding
///
/// Takes a decoded image plus the run configuration and writes the encoded
/// result. All pixel work is delegated: JPEG and AVIF go through the `image`
/// crate's encoders, PNG output is optimized with oxipng, and WebP uses
/// libwebp via the `webp` crate so the lossless/near-lossless/effort knobs
/// are available.
use crate::config::Config;
use crate::constants::{LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, ZOPFLI_ITERATIONS};
use crate::error::{ConvertError, Result};
use crate::formats::OutputFormat;
use image::DynamicImage;
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs;
use std::io::BufWriter;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// Encode `img` to `output` in the configured format, creating parent
/// directories as needed.
pub fn encode_image(img: &DynamicImage, output: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| ConvertError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    match config.format {
        OutputFormat::Png => encode_png(img, output, config.quality),
        OutputFormat::Jpg => encode_jpeg(img, output, config.quality),
        OutputFormat::Webp => encode_webp(img, output, config),
        OutputFormat::Avif => encode_avif(img, output, config),
    }
}

fn encode_jpeg(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let file = fs::File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality);
    rgb.write_with_encoder(encoder)?;
    Ok(())
}

fn encode_png(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let temp_path = output.with_extension("temp.png");
    img.save_with_format(&temp_path, image::ImageFormat::Png)?;

    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut oxipng_options = Options::from_preset(4);
    oxipng_options.force = true;

    // PNG is lossless; quality selects how hard the deflater works
    if quality >= 90 {
        oxipng_options.deflate = Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        };
    } else if quality >= 70 {
        oxipng_options.deflate = Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        };
    } else {
        oxipng_options.deflate = Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        };
    }

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &oxipng_options)
        .map_err(|e| ConvertError::PngOptimization(e.to_string()))?;

    Ok(())
}

fn encode_webp(img: &DynamicImage, output: &Path, config: &Config) -> Result<()> {
    // libwebp only accepts 8-bit RGB/RGBA input
    let src = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img.clone(),
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    };

    let encoder = webp::Encoder::from_image(&src)
        .map_err(|e| ConvertError::WebpEncoding(e.to_string()))?;

    let mut webp_config = webp::WebPConfig::new()
        .map_err(|_| ConvertError::WebpEncoding("failed to initialize encoder config".to_string()))?;
    webp_config.quality = config.quality as f32;
    webp_config.method = config.webp.effort as i32;
    if config.webp.lossless {
        webp_config.lossless = 1;
    }
    if config.webp.near_lossless {
        // Near-lossless rides the lossless code path; the quality setting
        // becomes the preprocessing level
        webp_config.lossless = 1;
        webp_config.near_lossless = config.quality as i32;
    }

    let encoded = encoder
        .encode_advanced(&webp_config)
        .map_err(|e| ConvertError::WebpEncoding(format!("{:?}", e)))?;
    fs::write(output, &*encoded)?;
    Ok(())
}

fn encode_avif(img: &DynamicImage, output: &Path, config: &Config) -> Result<()> {
    // rav1e has no true lossless mode; lossless requests pin quality to max
    let quality = if config.avif.lossless {
        100
    } else {
        config.quality
    };
    // The effort knob runs opposite to rav1e's speed: speed 10 is fastest
    let speed = 10u8.saturating_sub(config.avif.effort).max(1);

    let src = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img.clone(),
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    };

    let file = fs::File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = image::codecs::avif::AvifEncoder::new_with_speed_quality(writer, speed, quality);
    src.write_with_encoder(encoder)?;
    Ok(())
}

/// Type-safe output format handling
///
/// This module replaces string-based format selection with a proper enum,
/// validated once at configuration time before any file is touched.
use crate::error::{ConvertError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG with lossless compression, optimized via oxipng
    Png,
    /// JPEG with lossy, quality-driven compression
    Jpg,
    /// WebP, lossy or (near-)lossless
    Webp,
    /// AVIF (AV1 still image), lossy or maximum-quality
    Avif,
}

impl OutputFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Webp => "webp",
            OutputFormat::Avif => "avif",
        }
    }

    /// Get all supported formats as a slice
    pub fn all_formats() -> &'static [OutputFormat] {
        &[
            OutputFormat::Png,
            OutputFormat::Jpg,
            OutputFormat::Webp,
            OutputFormat::Avif,
        ]
    }

    /// Get format names for CLI help text
    pub fn format_names() -> &'static [&'static str] {
        &["png", "jpg", "webp", "avif"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpg => "JPEG",
            OutputFormat::Webp => "WebP",
            OutputFormat::Avif => "AVIF",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpg),
            "webp" => Ok(OutputFormat::Webp),
            "avif" => Ok(OutputFormat::Avif),
            _ => Err(ConvertError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Determine the output format from an explicit override or the output path's
/// extension. Unrecognized names and extensions are an error, surfaced before
/// any file is processed.
pub fn determine_output_format(
    output_path: &Path,
    format_override: Option<&str>,
) -> Result<OutputFormat> {
    if let Some(fmt_str) = format_override {
        return OutputFormat::from_str(fmt_str);
    }

    let ext = output_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ConvertError::UnsupportedFormat(format!(
                "cannot infer format from output path {:?}",
                output_path
            ))
        })?;
    OutputFormat::from_str(ext)
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid {format} effort value: {value}. Must be between 0 and {max}")]
    InvalidEffort {
        format: &'static str,
        value: u8,
        max: u8,
    },

    #[error("Invalid resize dimension: {0}. Must be greater than zero")]
    InvalidDimension(u32),

    #[error("Number of jobs must be greater than zero")]
    InvalidJobs,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Directory scan error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

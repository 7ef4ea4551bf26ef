/// Per-file conversion pipeline
///
/// The unit of work is one input file: honor the overwrite policy, stat the
/// input, decode -> resize -> encode, stat the output. Each step is
/// independently fallible; callers decide whether a failure is fatal (single
/// conversion) or isolated (batch).
use crate::config::Config;
use crate::encode::encode_image;
use crate::error::{ConvertError, Result};
use crate::utils::{create_progress_spinner, print_conversion_result};
use image::{DynamicImage, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// One unit of batch work: a discovered input file and the output path
/// derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileTask {
    /// Derive the output path by mirroring the input file's location under
    /// `output_root` and swapping the extension for the target format's.
    /// Mirroring keeps same-named files in different subdirectories from
    /// clobbering each other in the output tree.
    pub fn new(input: &Path, input_root: &Path, output_root: &Path, config: &Config) -> Self {
        let relative = input
            .strip_prefix(input_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(input.file_name().unwrap_or_default()));
        let output = output_root
            .join(relative)
            .with_extension(config.format.extension());
        Self {
            input: input.to_path_buf(),
            output,
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted { bytes_before: u64, bytes_after: u64 },
    /// Output already existed and overwrite is off; nothing was written
    Skipped,
    /// Recorded by the orchestrator when the pipeline returned an error
    Failed,
}

impl Outcome {
    /// Signed space saved. Negative when the encoding inflated the file;
    /// skips and failures contribute nothing.
    pub fn bytes_saved(&self) -> i64 {
        match self {
            Outcome::Converted {
                bytes_before,
                bytes_after,
            } => *bytes_before as i64 - *bytes_after as i64,
            Outcome::Skipped | Outcome::Failed => 0,
        }
    }
}

/// Run the pipeline for a single file.
///
/// Returns `Skipped` without touching the filesystem when the output exists
/// and overwrite is disabled. Never returns `Outcome::Failed`; errors are
/// surfaced as `Err` for the caller to classify.
pub fn process_file(input: &Path, output: &Path, config: &Config) -> Result<Outcome> {
    if !config.overwrite && output.exists() {
        return Ok(Outcome::Skipped);
    }

    let bytes_before = fs::metadata(input)?.len();

    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    let img = resize_to_fit(img, config.width, config.height);
    encode_image(&img, output, config)?;

    let bytes_after = fs::metadata(output)?.len();
    Ok(Outcome::Converted {
        bytes_before,
        bytes_after,
    })
}

/// Fit-inside resize: scale down to fit within the configured bounds while
/// preserving aspect ratio, without cropping. Images already within bounds
/// pass through at their original dimensions. Never enlarges.
pub fn resize_to_fit(img: DynamicImage, width: Option<u32>, height: Option<u32>) -> DynamicImage {
    let (bound_w, bound_h) = match (width, height) {
        (None, None) => return img,
        (w, h) => (w.unwrap_or(u32::MAX), h.unwrap_or(u32::MAX)),
    };

    if img.width() <= bound_w && img.height() <= bound_h {
        return img;
    }
    img.resize(bound_w, bound_h, image::imageops::FilterType::Lanczos3)
}

/// Convert one file with console feedback. The entry point behind the
/// `convert` subcommand.
pub fn convert_single(input: &Path, output: &Path, config: &Config) -> Result<()> {
    if !input.exists() {
        return Err(ConvertError::FileNotFound(input.to_path_buf()));
    }

    println!("🗜️  Converting image: {:?}", input);
    println!("📁 Output: {:?}", output);

    let pb = create_progress_spinner("Converting...");
    let outcome = process_file(input, output, config)?;
    pb.finish_with_message("✅ Conversion complete");

    match outcome {
        Outcome::Converted {
            bytes_before,
            bytes_after,
        } => {
            print_conversion_result(bytes_before, bytes_after);
        }
        Outcome::Skipped => {
            println!(
                "⚠️  Skipping {:?}: output exists (use --overwrite to replace)",
                output
            );
        }
        Outcome::Failed => {}
    }

    Ok(())
}

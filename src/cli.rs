use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-forge",
    about = "Batch image converter that re-encodes directory trees and reports space saved",
    long_about = "img-forge re-encodes images to a target format (PNG, JPEG, WebP, AVIF) with \
                  configurable quality and fit-inside resizing. The batch mode scans an input \
                  directory recursively, converts every file over a bounded worker pool, and \
                  reports the aggregate space saved.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-forge batch\n  \
    img-forge batch ./photos ./converted -f avif -q 70 --effort 6\n  \
    img-forge batch -f webp --near-lossless -w 1920 --overwrite\n  \
    img-forge convert input.png output.webp -q 85"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Convert every file under a directory tree",
        long_about = "Recursively scan the input directory and convert every regular file to \
                      the target format, mirroring the directory structure under the output \
                      root. Files that fail to decode are logged and skipped; the batch \
                      always runs to completion."
    )]
    Batch {
        #[arg(
            default_value = DEFAULT_INPUT_DIR,
            help = "Input directory to scan recursively"
        )]
        input: PathBuf,

        #[arg(
            default_value = DEFAULT_OUTPUT_DIR,
            help = "Output directory (mirrors the input tree)"
        )]
        output: PathBuf,

        #[arg(
            short = 'f',
            long,
            default_value = "webp",
            help = "Target format (png, jpg, webp, avif)",
            long_help = "Target encoding for every produced file. \
                         Supported formats: png, jpg/jpeg, webp, avif. \
                         Unrecognized names abort the run before any file is touched."
        )]
        format: String,

        #[arg(
            short = 'q',
            long,
            help = "Compression quality (1-100, default: 80)",
            long_help = "Compression quality from 1 (smallest) to 100 (best). \
                         For PNG: >=90 uses Zopfli, >=70 uses high compression, <70 standard. \
                         For WebP with --near-lossless it doubles as the preprocessing level."
        )]
        quality: Option<u8>,

        #[arg(
            short = 'w',
            long,
            help = "Maximum width in pixels",
            long_help = "Fit-inside resize bound on width. Images wider than this are scaled \
                         down preserving aspect ratio; smaller images are left untouched."
        )]
        width: Option<u32>,

        #[arg(
            short = 'H',
            long,
            help = "Maximum height in pixels",
            long_help = "Fit-inside resize bound on height. Images taller than this are scaled \
                         down preserving aspect ratio; smaller images are left untouched."
        )]
        height: Option<u32>,

        #[arg(long, help = "Replace outputs that already exist")]
        overwrite: bool,

        #[arg(
            short = 'j',
            long,
            help = "Number of parallel workers (default: CPU count)",
            long_help = "Size of the worker pool used for the batch. \
                         Concurrency never exceeds this, however many files are found."
        )]
        jobs: Option<usize>,

        #[arg(long, help = "Lossless encoding (webp, avif)")]
        lossless: bool,

        #[arg(long, help = "Near-lossless encoding at the quality level (webp only)")]
        near_lossless: bool,

        #[arg(
            long,
            help = "Encoder effort (webp: 0-6, avif: 0-9)",
            long_help = "Encoder tuning knob trading encode time for compression efficiency. \
                         Range 0-6 for webp, 0-9 for avif; ignored by png and jpg."
        )]
        effort: Option<u8>,
    },

    #[command(
        about = "Convert a single image file",
        long_about = "Convert one image to the format implied by the output path's extension \
                      (or forced with --format), with the same quality/resize knobs as batch \
                      mode."
    )]
    Convert {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(help = "Output image file path")]
        output: PathBuf,

        #[arg(
            short = 'f',
            long,
            help = "Force output format regardless of extension",
            long_help = "Force the output format regardless of the output path's extension. \
                         Supported formats: png, jpg/jpeg, webp, avif."
        )]
        format: Option<String>,

        #[arg(short = 'q', long, help = "Compression quality (1-100, default: 80)")]
        quality: Option<u8>,

        #[arg(short = 'w', long, help = "Maximum width in pixels")]
        width: Option<u32>,

        #[arg(short = 'H', long, help = "Maximum height in pixels")]
        height: Option<u32>,

        #[arg(long, help = "Replace the output if it already exists")]
        overwrite: bool,

        #[arg(long, help = "Lossless encoding (webp, avif)")]
        lossless: bool,

        #[arg(long, help = "Near-lossless encoding at the quality level (webp only)")]
        near_lossless: bool,

        #[arg(long, help = "Encoder effort (webp: 0-6, avif: 0-9)")]
        effort: Option<u8>,
    },
}

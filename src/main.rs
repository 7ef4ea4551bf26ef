use clap::Parser;
use img_forge::cli::{Args, Commands};
use img_forge::constants::{DEFAULT_AVIF_EFFORT, DEFAULT_WEBP_EFFORT};
use img_forge::error::Result;
use img_forge::formats::{determine_output_format, OutputFormat};
use img_forge::{convert_single, run_batch, AvifOptions, Config, WebpOptions};
use std::str::FromStr;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Batch {
            input,
            output,
            format,
            quality,
            width,
            height,
            overwrite,
            jobs,
            lossless,
            near_lossless,
            effort,
        } => {
            let format = OutputFormat::from_str(&format)?;
            let config = build_config(
                format,
                quality,
                width,
                height,
                overwrite,
                jobs,
                lossless,
                near_lossless,
                effort,
            )?;
            run_batch(&input, &output, &config)?;
        }
        Commands::Convert {
            input,
            output,
            format,
            quality,
            width,
            height,
            overwrite,
            lossless,
            near_lossless,
            effort,
        } => {
            let format = determine_output_format(&output, format.as_deref())?;
            let config = build_config(
                format,
                quality,
                width,
                height,
                overwrite,
                Some(1),
                lossless,
                near_lossless,
                effort,
            )?;
            convert_single(&input, &output, &config)?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_config(
    format: OutputFormat,
    quality: Option<u8>,
    width: Option<u32>,
    height: Option<u32>,
    overwrite: bool,
    jobs: Option<usize>,
    lossless: bool,
    near_lossless: bool,
    effort: Option<u8>,
) -> Result<Config> {
    let webp = WebpOptions {
        lossless,
        near_lossless,
        effort: effort.unwrap_or(DEFAULT_WEBP_EFFORT),
    };
    let avif = AvifOptions {
        lossless,
        effort: effort.unwrap_or(DEFAULT_AVIF_EFFORT),
    };
    Config::new(format, quality, width, height, overwrite, jobs, webp, avif)
}

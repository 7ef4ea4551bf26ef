/// Run configuration
///
/// One immutable `Config` is built from the CLI arguments at startup,
/// validated, and passed by reference into every component. There is no
/// ambient mutable state; a run's parameters cannot change mid-flight.
use crate::constants::{
    DEFAULT_AVIF_EFFORT, DEFAULT_QUALITY, DEFAULT_WEBP_EFFORT, MAX_AVIF_EFFORT, MAX_QUALITY,
    MAX_WEBP_EFFORT, MIN_QUALITY,
};
use crate::error::{ConvertError, Result};
use crate::formats::OutputFormat;

/// WebP-specific encoder knobs
#[derive(Debug, Clone, Copy)]
pub struct WebpOptions {
    /// Fully lossless encoding
    pub lossless: bool,
    /// Near-lossless preprocessing; the quality setting becomes the level
    pub near_lossless: bool,
    /// Encoder effort, 0 (fast) to 6 (smallest output)
    pub effort: u8,
}

impl Default for WebpOptions {
    fn default() -> Self {
        Self {
            lossless: false,
            near_lossless: false,
            effort: DEFAULT_WEBP_EFFORT,
        }
    }
}

/// AVIF-specific encoder knobs
#[derive(Debug, Clone, Copy)]
pub struct AvifOptions {
    /// Encode at maximum quality (the rav1e backend has no true lossless mode)
    pub lossless: bool,
    /// Encoder effort, 0 (fast) to 9 (smallest output)
    pub effort: u8,
}

impl Default for AvifOptions {
    fn default() -> Self {
        Self {
            lossless: false,
            effort: DEFAULT_AVIF_EFFORT,
        }
    }
}

/// Immutable configuration for a conversion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Target encoding for every produced file
    pub format: OutputFormat,
    /// Compression quality (1-100) where the format supports it
    pub quality: u8,
    /// Fit-inside resize bound on width, if set
    pub width: Option<u32>,
    /// Fit-inside resize bound on height, if set
    pub height: Option<u32>,
    /// Replace outputs that already exist
    pub overwrite: bool,
    /// Worker pool size for batch runs
    pub jobs: usize,
    pub webp: WebpOptions,
    pub avif: AvifOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Webp,
            quality: DEFAULT_QUALITY,
            width: None,
            height: None,
            overwrite: false,
            jobs: num_cpus::get(),
            webp: WebpOptions::default(),
            avif: AvifOptions::default(),
        }
    }
}

impl Config {
    /// Build and validate a configuration. `None` knobs fall back to defaults.
    pub fn new(
        format: OutputFormat,
        quality: Option<u8>,
        width: Option<u32>,
        height: Option<u32>,
        overwrite: bool,
        jobs: Option<usize>,
        webp: WebpOptions,
        avif: AvifOptions,
    ) -> Result<Self> {
        let config = Self {
            format,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
            width,
            height,
            overwrite,
            jobs: jobs.unwrap_or_else(num_cpus::get),
            webp,
            avif,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters. Runs before any file is processed,
    /// so a bad format/quality/effort aborts the run up front.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(ConvertError::InvalidQuality(self.quality));
        }

        if let Some(w) = self.width {
            if w == 0 {
                return Err(ConvertError::InvalidDimension(w));
            }
        }
        if let Some(h) = self.height {
            if h == 0 {
                return Err(ConvertError::InvalidDimension(h));
            }
        }

        if self.jobs == 0 {
            return Err(ConvertError::InvalidJobs);
        }

        // Effort bounds only matter for the format actually in use
        match self.format {
            OutputFormat::Webp if self.webp.effort > MAX_WEBP_EFFORT => {
                Err(ConvertError::InvalidEffort {
                    format: "webp",
                    value: self.webp.effort,
                    max: MAX_WEBP_EFFORT,
                })
            }
            OutputFormat::Avif if self.avif.effort > MAX_AVIF_EFFORT => {
                Err(ConvertError::InvalidEffort {
                    format: "avif",
                    value: self.avif.effort,
                    max: MAX_AVIF_EFFORT,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Webp);
        assert_eq!(config.quality, 80);
        assert_eq!(config.width, None);
        assert_eq!(config.height, None);
        assert!(!config.overwrite);
        assert!(config.jobs > 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_invalid_quality() {
        let result = Config::new(
            OutputFormat::Jpg,
            Some(0),
            None,
            None,
            false,
            None,
            WebpOptions::default(),
            AvifOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidQuality(0))));

        let result = Config::new(
            OutputFormat::Jpg,
            Some(101),
            None,
            None,
            false,
            None,
            WebpOptions::default(),
            AvifOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidQuality(101))));
    }

    #[test]
    fn test_config_zero_dimension() {
        let result = Config::new(
            OutputFormat::Webp,
            None,
            Some(0),
            None,
            false,
            None,
            WebpOptions::default(),
            AvifOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidDimension(0))));
    }

    #[test]
    fn test_config_zero_jobs() {
        let result = Config::new(
            OutputFormat::Webp,
            None,
            None,
            None,
            false,
            Some(0),
            WebpOptions::default(),
            AvifOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidJobs)));
    }

    #[test]
    fn test_config_webp_effort_out_of_range() {
        let webp = WebpOptions {
            effort: 7,
            ..WebpOptions::default()
        };
        let result = Config::new(
            OutputFormat::Webp,
            None,
            None,
            None,
            false,
            None,
            webp,
            AvifOptions::default(),
        );
        assert!(matches!(
            result,
            Err(ConvertError::InvalidEffort {
                format: "webp",
                value: 7,
                max: 6
            })
        ));
    }

    #[test]
    fn test_config_avif_effort_out_of_range() {
        let avif = AvifOptions {
            effort: 10,
            ..AvifOptions::default()
        };
        let result = Config::new(
            OutputFormat::Avif,
            None,
            None,
            None,
            false,
            None,
            WebpOptions::default(),
            avif,
        );
        assert!(matches!(
            result,
            Err(ConvertError::InvalidEffort { format: "avif", .. })
        ));
    }

    #[test]
    fn test_config_effort_ignored_for_other_formats() {
        // An out-of-range webp effort is irrelevant when encoding JPEG
        let webp = WebpOptions {
            effort: 99,
            ..WebpOptions::default()
        };
        let result = Config::new(
            OutputFormat::Jpg,
            None,
            None,
            None,
            false,
            None,
            webp,
            AvifOptions::default(),
        );
        assert!(result.is_ok());
    }
}

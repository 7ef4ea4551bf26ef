pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_WEBP_EFFORT: u8 = 4;
pub const MAX_WEBP_EFFORT: u8 = 6;
pub const DEFAULT_AVIF_EFFORT: u8 = 4;
pub const MAX_AVIF_EFFORT: u8 = 9;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

/// Batches above this size get a heads-up before processing starts.
pub const LARGE_BATCH_ADVISORY: usize = 50;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod encode;
pub mod error;
pub mod formats;
pub mod processing;
pub mod scanner;
pub mod utils;

pub use batch::{run_batch, summarize, BatchSummary};
pub use config::{AvifOptions, Config, WebpOptions};
pub use encode::encode_image;
pub use error::{ConvertError, Result};
pub use formats::{determine_output_format, OutputFormat};
pub use processing::{convert_single, process_file, resize_to_fit, FileTask, Outcome};
pub use scanner::scan_files;
pub use utils::{calculate_compression_ratio, format_file_size, format_signed_size};

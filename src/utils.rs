/// Utility functions for common operations
///
/// Console formatting helpers shared by the single-file and batch paths.
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress spinner with consistent styling
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb
}

/// Format file size in human-readable form (e.g., "1.2 MB", "512 KB")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a signed byte delta; negative values mean the output grew
pub fn format_signed_size(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", format_file_size(bytes.unsigned_abs()))
    } else {
        format_file_size(bytes as u64)
    }
}

/// Compression ratio as a percentage (positive means reduction)
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

/// Print a before/after report for one converted file
pub fn print_conversion_result(bytes_before: u64, bytes_after: u64) {
    let ratio = calculate_compression_ratio(bytes_before, bytes_after);

    println!(
        "📊 Original size: {} bytes ({})",
        bytes_before,
        format_file_size(bytes_before)
    );
    println!(
        "📈 Converted size: {} bytes ({})",
        bytes_after,
        format_file_size(bytes_after)
    );
    println!("🎯 Compression ratio: {:.1}%", ratio);

    if ratio > 0.0 {
        println!("✅ Successfully reduced file size by {:.1}%", ratio);
    } else {
        println!("⚠️  File size increased by {:.1}%", ratio.abs());
    }
}

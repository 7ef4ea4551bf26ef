/// Batch run orchestration
///
/// Scans the input root once, fans the discovered files out over a bounded
/// rayon pool, and aggregates per-file outcomes into a run summary. A
/// failing file is logged and counted; it never aborts the batch. Only a
/// failed scan (inaccessible input root) is fatal.
use crate::config::Config;
use crate::constants::LARGE_BATCH_ADVISORY;
use crate::error::{ConvertError, Result};
use crate::processing::{process_file, FileTask, Outcome};
use crate::scanner::scan_files;
use crate::utils::{format_file_size, format_signed_size};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

/// Aggregate results of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub discovered: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Sum of signed per-file savings; skips and failures contribute 0
    pub bytes_saved: i64,
}

/// Convert every file under `input_root`, writing a mirrored tree under
/// `output_root`. Returns the run summary.
pub fn run_batch(input_root: &Path, output_root: &Path, config: &Config) -> Result<BatchSummary> {
    config.validate()?;

    println!("🚀 Starting batch conversion...");
    println!("📁 Input: {:?}", input_root);
    println!("📁 Output: {:?}", output_root);

    let start_time = Instant::now();

    let files = scan_files(input_root)?;
    let total_files = files.len();

    if total_files == 0 {
        println!("⚠️  No files found in the input directory");
        return Ok(BatchSummary::default());
    }

    println!("📊 Found {} files to process", total_files);
    if total_files > LARGE_BATCH_ADVISORY {
        println!(
            "⚠️  Large batch ({} files), this may take a while",
            total_files
        );
    }

    std::fs::create_dir_all(output_root)
        .map_err(|_| ConvertError::DirectoryCreationFailed(output_root.to_path_buf()))?;

    let tasks: Vec<FileTask> = files
        .iter()
        .map(|file| FileTask::new(file, input_root, output_root, config))
        .collect();

    // Bounded pool: the job count caps concurrency no matter how many files
    // were discovered
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs.min(total_files))
        .build()
        .map_err(|e| ConvertError::ThreadPool(e.to_string()))?;

    let progress = ProgressBar::new(total_files as u64);
    progress.set_style(ProgressStyle::default_bar());

    let outcomes: Vec<Outcome> = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| {
                let outcome = match process_file(&task.input, &task.output, config) {
                    Ok(outcome) => {
                        report_outcome(task, outcome);
                        outcome
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to process {}: {}", task.input.display(), e);
                        Outcome::Failed
                    }
                };
                progress.inc(1);
                outcome
            })
            .collect()
    });

    progress.finish_with_message("✅ Batch conversion complete");

    let summary = summarize(total_files, &outcomes);
    print_summary(&summary, start_time.elapsed());
    Ok(summary)
}

fn report_outcome(task: &FileTask, outcome: Outcome) {
    match outcome {
        Outcome::Converted {
            bytes_before,
            bytes_after,
        } => {
            println!(
                "✅ {}: {} -> {}",
                task.input.display(),
                format_file_size(bytes_before),
                format_file_size(bytes_after)
            );
        }
        Outcome::Skipped => {
            println!("⚠️  Skipping {}: output exists", task.input.display());
        }
        Outcome::Failed => {}
    }
}

/// Partition per-file outcomes and sum the signed savings. Pure and
/// order-independent.
pub fn summarize(discovered: usize, outcomes: &[Outcome]) -> BatchSummary {
    let mut summary = BatchSummary {
        discovered,
        ..BatchSummary::default()
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Converted { .. } => summary.converted += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::Failed => summary.failed += 1,
        }
        summary.bytes_saved += outcome.bytes_saved();
    }
    summary
}

fn print_summary(summary: &BatchSummary, elapsed: Duration) {
    println!("\n📊 Batch Conversion Summary:");
    println!("  📁 Files discovered: {}", summary.discovered);
    println!("  ✅ Converted: {}", summary.converted);
    if summary.skipped > 0 {
        println!("  ⚠️  Skipped: {}", summary.skipped);
    }
    if summary.failed > 0 {
        println!("  ❌ Failed: {}", summary.failed);
    }
    println!(
        "  💾 Space saved: {}",
        format_signed_size(summary.bytes_saved)
    );
    println!("  ⏱️  Total time: {:.2?}", elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_partitions_outcomes() {
        let outcomes = vec![
            Outcome::Converted {
                bytes_before: 1000,
                bytes_after: 600,
            },
            Outcome::Skipped,
            Outcome::Failed,
            Outcome::Converted {
                bytes_before: 500,
                bytes_after: 700,
            },
        ];

        let summary = summarize(4, &outcomes);
        assert_eq!(summary.discovered, 4);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        // 400 saved on the first, 200 lost on the second
        assert_eq!(summary.bytes_saved, 200);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(0, &[]);
        assert_eq!(summary, BatchSummary::default());
    }

    #[test]
    fn test_summarize_negative_total() {
        let outcomes = vec![Outcome::Converted {
            bytes_before: 100,
            bytes_after: 900,
        }];
        let summary = summarize(1, &outcomes);
        assert_eq!(summary.bytes_saved, -800);
    }

    #[test]
    fn test_summarize_is_order_independent() {
        let a = vec![
            Outcome::Converted {
                bytes_before: 10,
                bytes_after: 5,
            },
            Outcome::Converted {
                bytes_before: 30,
                bytes_after: 10,
            },
            Outcome::Skipped,
        ];
        let mut b = a.clone();
        b.reverse();

        assert_eq!(summarize(3, &a), summarize(3, &b));
    }
}

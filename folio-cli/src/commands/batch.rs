//! Batch split command implementation

use anyhow::{bail, Context, Result};
use folio_core::split_chapter;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// File extensions treated as chapter text
const CHAPTER_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Batch split chapter files into JSON page lists
pub fn batch(input_dir: &str, output_dir: &str, jobs: usize) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Find all chapter files
    let mut files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read input directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| CHAPTER_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No chapter files found in {}", input_dir);
        return Ok(());
    }

    println!("Found {} chapters to split", files.len());

    // Set up progress tracking
    let multi_progress = MultiProgress::new();
    let overall_pb = multi_progress.add(ProgressBar::new(files.len() as u64));
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let page_count = AtomicUsize::new(0);
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build thread pool")?;

    // Process files in parallel
    pool.install(|| {
        files.par_iter().for_each(|file_path| {
            match process_file(file_path, output_path) {
                Ok(pages) => {
                    page_count.fetch_add(pages, Ordering::Relaxed);
                    success_count.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    error_count.fetch_add(1, Ordering::Relaxed);
                    tracing::error!("Failed to split {:?}: {:#}", file_path, e);
                }
            }

            overall_pb.inc(1);
        });
    });

    overall_pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch split complete:");
    println!("  Chapters: {}", success);
    println!("  Pages:    {}", page_count.load(Ordering::Relaxed));
    println!("  Errors:   {}", errors);

    if errors > 0 {
        bail!("Batch split completed with {} errors", errors);
    }

    Ok(())
}

/// Split one chapter file, returning the number of pages written
fn process_file(input_path: &Path, output_dir: &Path) -> Result<usize> {
    let text = fs::read_to_string(input_path)?;
    let pages = split_chapter(&text, 1)?;

    // Build output path
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;
    let output_file = output_dir.join(format!("{}.pages.json", stem));

    fs::write(&output_file, serde_json::to_string_pretty(&pages)?)?;

    tracing::info!("Split {:?} -> {:?} ({} pages)", input_path, output_file, pages.len());

    Ok(pages.len())
}

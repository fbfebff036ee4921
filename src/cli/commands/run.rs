use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::{info, warn};
use tokio::sync::Mutex;

use pnbench::config::HarnessConfig;
use pnbench::implementations::catalog::{enumerate_jobs, QueryCatalog};
use pnbench::implementations::executor::ExecutionEngine;
use pnbench::implementations::partition::JobCursor;
use pnbench::implementations::sink::CsvResultSink;
use pnbench::implementations::verifypn::VerifyPn;
use pnbench::models::outcome::RunSummary;

use crate::cli::ui;

/// Benchmark run command
pub async fn execute(config: HarnessConfig, output_format: &str) -> Result<()> {
    ui::print_header("Petri Net Query Benchmark");
    let started_at = Utc::now();
    let start = Instant::now();

    // Discover the corpus
    let catalog = QueryCatalog::scan(&config.models_dir, &config.query_file_names)?;
    ui::print_info(&format!("Found {} models", catalog.len()));
    ui::print_info(&format!("Starting with {} second timeout", config.timeout_secs));

    // Enumerate and order the global job list
    let jobs = enumerate_jobs(&catalog);
    if jobs.is_empty() {
        ui::print_warning("No jobs found, nothing to do");
        return Ok(());
    }
    let total_jobs = jobs.len();

    let cursor = JobCursor::new(total_jobs, config.worker_count, config.worker_index)?;
    let assigned_jobs = cursor.assigned();
    info!(
        "Worker {}/{} assigned {} of {} jobs",
        config.worker_index, config.worker_count, assigned_jobs, total_jobs
    );
    ui::print_info(&format!(
        "Running {} jobs on {} threads",
        assigned_jobs, config.threads
    ));

    let sink = Arc::new(Mutex::new(CsvResultSink::create(&config.out)?));
    let verifier = Arc::new(VerifyPn::new(config.binary.clone()));

    let progress = ui::create_progress_bar(assigned_jobs as u64, "running queries");
    let engine = ExecutionEngine::new(
        jobs,
        verifier,
        cursor,
        Arc::clone(&sink),
        Duration::from_secs(config.timeout_secs),
        config.threads,
    )
    .with_progress(progress.clone());

    // Drain the slice, flushing whatever completed if the operator
    // interrupts the batch.
    let counts = tokio::select! {
        result = engine.drain() => result?,
        _ = tokio::signal::ctrl_c() => {
            progress.abandon_with_message("interrupted");
            sink.lock().await.flush()?;
            warn!("Interrupted, partial results flushed to {}", config.out.display());
            ui::print_warning("Interrupted, partial results flushed");
            return Ok(());
        }
    };
    progress.finish_with_message("done");

    let summary = RunSummary {
        started_at,
        total_jobs,
        assigned_jobs,
        counts,
        wall_time_secs: start.elapsed().as_secs_f64(),
    };

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        "text" => ui::print_summary(&summary),
        other => return Err(anyhow!("Unsupported output format: {}", other)),
    }

    ui::print_success(&format!("Results written to {}", config.out.display()));
    Ok(())
}

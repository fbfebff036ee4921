use colored::*;
use console::Term;
use indicatif::{ ProgressBar, ProgressStyle };

use pnbench::models::outcome::RunSummary;

/// Print a section header
pub fn print_header(title: &str) {
    let width = Term::stdout().size().1 as usize;
    let banner = format!(" {:<w$}", title, w = width.saturating_sub(2).min(58));
    println!("\n{}\n", banner.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Create a new progress bar
pub fn create_progress_bar(length: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}"
            )
            .unwrap()
            .progress_chars("##-")
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the end-of-run summary with colored tallies
pub fn print_summary(summary: &RunSummary) {
    print_header("Run Summary");
    print_result("Started at", &summary.started_at.to_rfc3339());
    print_result(
        "Jobs",
        &format!("{} of {} total", summary.assigned_jobs, summary.total_jobs)
    );
    println!(
        "{}: {}",
        "Satisfied".green().bold(),
        summary.counts.satisfied
    );
    println!(
        "{}: {}",
        "Unsatisfied".cyan().bold(),
        summary.counts.unsatisfied
    );
    println!("{}: {}", "Timeouts".yellow().bold(), summary.counts.timeouts);
    println!("{}: {}", "Errors".red().bold(), summary.counts.errors);
    print_result("Wall time", &format!("{:.2}s", summary.wall_time_secs));
}

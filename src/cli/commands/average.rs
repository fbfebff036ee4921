use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::Serialize;

use crate::cli::ui;

/// Mean-time report over one results file
#[derive(Debug, Serialize)]
pub struct AverageReport {
    pub rows: usize,
    pub average_time: f64,
    pub per_result: BTreeMap<String, ResultAverage>,
}

#[derive(Debug, Serialize)]
pub struct ResultAverage {
    pub count: usize,
    pub average_time: f64,
}

/// Post-run analysis command: average the recorded times in a results csv
pub fn execute(results: &Path, output_format: &str) -> Result<()> {
    ui::print_header("Results Average");

    let contents = fs::read_to_string(results)
        .with_context(|| format!("Failed to read results file {}", results.display()))?;

    let mut rows = 0usize;
    let mut time_sum = 0f64;
    let mut sums: BTreeMap<String, (usize, f64)> = BTreeMap::new();

    // First line is the header row
    for line in contents.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            warn!("Skipping malformed row: {}", line);
            continue;
        }
        let result = fields[3].to_string();
        let time: f64 = match fields[4].parse() {
            Ok(t) => t,
            Err(_) => {
                warn!("Skipping row with unparseable time: {}", line);
                continue;
            }
        };
        rows += 1;
        time_sum += time;
        let entry = sums.entry(result).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += time;
    }

    if rows == 0 {
        return Err(anyhow!("No result rows in {}", results.display()));
    }

    let report = AverageReport {
        rows,
        average_time: time_sum / rows as f64,
        per_result: sums
            .into_iter()
            .map(|(result, (count, sum))| {
                (result, ResultAverage { count, average_time: sum / count as f64 })
            })
            .collect(),
    };

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => {
            ui::print_result("Rows", &report.rows.to_string());
            ui::print_result("Average time", &format!("{:.3}s", report.average_time));
            for (result, avg) in &report.per_result {
                ui::print_result(
                    result,
                    &format!("{} rows, {:.3}s average", avg.count, avg.average_time)
                );
            }
        }
        other => return Err(anyhow!("Unsupported output format: {}", other)),
    }

    Ok(())
}

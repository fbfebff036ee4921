use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "pnbench",
    about = "A distributed benchmark harness for Petri net model checking",
    version,
    author,
    long_about = None
)]
pub struct PnbenchCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for reports (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark over a corpus of models
    Run {
        /// Path to directory containing the mcc models
        #[arg(short, long, default_value = "/usr/local/share/mcc/")]
        models: PathBuf,

        /// Timeout for each query of a model in seconds
        #[arg(short, long, default_value_t = 2)]
        timeout: u64,

        /// Path to verifypn
        #[arg(short, long, default_value = "build-release/verifypn/bin/verifypn-linux64")]
        binary: PathBuf,

        /// Name of csv file containing the results
        #[arg(short, long, default_value = "results.csv")]
        out: PathBuf,

        /// Amount of concurrent verifier invocations in this worker
        #[arg(short = 'n', long, default_value_t = 1)]
        threads: usize,

        /// The amount of workers
        #[arg(short = 'w', long, default_value_t = 1)]
        worker_count: usize,

        /// Index of the worker
        #[arg(short = 'i', long, default_value_t = 0)]
        worker_index: usize,

        /// Index of the error directory (reserved)
        #[arg(short = 'e', long, default_value_t = 0)]
        error_directory: usize,

        /// Query file names to run for each model
        #[arg(short = 'q', long = "queries", default_value = "ReachabilityCardinality.xml")]
        queries: Vec<String>,
    },

    /// Average the recorded times in a results file
    Average {
        /// Path to the results csv produced by a run
        #[arg(short, long, default_value = "results.csv")]
        results: PathBuf,
    },
}

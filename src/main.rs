use anyhow::Result;
use clap::Parser;
use log::info;

use pnbench::config::{HarnessConfig, HarnessConfigFile};

mod cli;
use cli::{ PnbenchCli, Commands };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = PnbenchCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Display a welcome message
    println!("pnbench - Petri Net Model Checking Benchmark");

    match &cli.command {
        Commands::Run {
            models,
            timeout,
            binary,
            out,
            threads,
            worker_count,
            worker_index,
            error_directory,
            queries,
        } => {
            let mut config = HarnessConfig {
                models_dir: models.clone(),
                timeout_secs: *timeout,
                binary: binary.clone(),
                out: out.clone(),
                threads: *threads,
                worker_count: *worker_count,
                worker_index: *worker_index,
                error_directory: *error_directory,
                query_file_names: queries.clone(),
            };

            // Overlay the optional configuration file
            if let Some(config_path) = &cli.config {
                let file = HarnessConfigFile::from_file(config_path)?;
                config.apply_file(file);
                info!("Applied configuration from {}", config_path.display());
            }

            cli::commands::run::execute(config, &cli.output_format).await?;
        }

        Commands::Average { results } => {
            cli::commands::average::execute(results, &cli.output_format)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}

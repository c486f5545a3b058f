//! Diabetes Risk Predictor
//!
//! Estimates diabetes risk by combining a trained classifier over
//! clinical inputs with an additive lifestyle scoring rubric.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::CONFIG;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod report;

use input::{HealthArgs, LifestyleArgs};

/// Diabetes Risk Predictor
#[derive(Parser)]
#[command(name = "diabetes-score")]
#[command(about = "Combined classifier and lifestyle diabetes risk evaluation")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the classifier on a labeled CSV dataset
    Train {
        /// Path to the dataset CSV (defaults to the configured path)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Checkpoint base path to write (defaults to the configured path)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Number of training epochs
        #[arg(short, long, default_value = "200")]
        epochs: usize,

        /// Batch size for training
        #[arg(short, long, default_value = "32")]
        batch_size: usize,

        /// Learning rate
        #[arg(short, long, default_value = "0.001")]
        learning_rate: f64,

        /// Seed for the train/test split
        #[arg(short, long, default_value_t = health_data::DEFAULT_SPLIT_SEED)]
        seed: u64,
    },

    /// Predict the classifier label for one health profile
    Predict {
        /// Checkpoint base path to load (defaults to the configured path)
        #[arg(short, long)]
        model: Option<PathBuf>,

        #[command(flatten)]
        health: HealthArgs,
    },

    /// Compute the lifestyle risk score
    Score {
        #[command(flatten)]
        lifestyle: LifestyleArgs,
    },

    /// Run the combined risk assessment
    Assess {
        /// Checkpoint base path to load (defaults to the configured path)
        #[arg(short, long)]
        model: Option<PathBuf>,

        #[command(flatten)]
        health: HealthArgs,

        #[command(flatten)]
        lifestyle: LifestyleArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Train {
            data,
            model,
            epochs,
            batch_size,
            learning_rate,
            seed,
        } => {
            let data = data.unwrap_or_else(|| CONFIG.data_path.clone());
            let model = model.unwrap_or_else(|| CONFIG.model_path.clone());
            commands::train::run(
                &data,
                &model.to_string_lossy(),
                epochs,
                batch_size,
                learning_rate,
                seed,
            )?;
        }
        Commands::Predict { model, health } => {
            let model = model.unwrap_or_else(|| CONFIG.model_path.clone());
            let profile = health.into_profile()?;
            commands::predict::run(&model.to_string_lossy(), &profile)?;
        }
        Commands::Score { lifestyle } => {
            let profile = lifestyle.into_profile()?;
            commands::score::run(&profile);
        }
        Commands::Assess {
            model,
            health,
            lifestyle,
        } => {
            let model = model.unwrap_or_else(|| CONFIG.model_path.clone());
            let health_profile = health.into_profile()?;
            let lifestyle_profile = lifestyle.into_profile()?;
            commands::assess::run(
                &model.to_string_lossy(),
                &health_profile,
                &lifestyle_profile,
            )?;
        }
    }

    Ok(())
}

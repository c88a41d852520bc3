//! Grasp pose sampling toolkit.
//!
//! Samples candidate gripper poses around an object and works with the
//! labeled grasp datasets produced by running those candidates in a physics
//! simulator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grasp_dataset::{DEFAULT_SPLIT_SEED, LABEL_COLUMN};
use grasp_types::{GripperKind, TargetObject};
use tracing_subscriber::EnvFilter;

mod commands;

/// Grasp pose sampling toolkit
#[derive(Parser)]
#[command(name = "grasp")]
#[command(about = "Sample candidate grasp poses and work with grasp datasets")]
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
    /// Sample candidate gripper poses around an object
    Sample {
        /// Gripper rig (2f, 3f)
        #[arg(short, long, default_value = "2f")]
        gripper: GripperKind,

        /// Target object (cube, cylinder)
        #[arg(short, long, default_value = "cube")]
        object: TargetObject,

        /// Number of candidates
        #[arg(short, long)]
        num: usize,

        /// CSV file for the candidates (`x,y,z,roll,pitch,yaw`)
        #[arg(long)]
        output: PathBuf,

        /// Random seed (drawn at random and logged when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with sampling bounds; missing fields keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write the full approach plan of every candidate as JSON
        #[arg(long)]
        plans: Option<PathBuf>,
    },

    /// Print label counts and feature ranges of a dataset
    Summary {
        /// Dataset CSV
        #[arg(short, long)]
        dataset: PathBuf,

        /// Label column
        #[arg(short, long, default_value = LABEL_COLUMN)]
        label: String,
    },

    /// Split a dataset into stratified train and validation files
    Split {
        /// Dataset CSV
        #[arg(short, long)]
        dataset: PathBuf,

        /// Output CSV for the training rows
        #[arg(long)]
        train_output: PathBuf,

        /// Output CSV for the validation rows
        #[arg(long)]
        val_output: PathBuf,

        /// Fraction of rows held out for validation
        #[arg(long, default_value = "0.2")]
        test_size: f64,

        /// Shuffle seed
        #[arg(short, long, default_value_t = DEFAULT_SPLIT_SEED)]
        seed: u64,

        /// Label column
        #[arg(short, long, default_value = LABEL_COLUMN)]
        label: String,
    },

    /// Print a classification report for predicted vs. actual labels
    Report {
        /// CSV with ground-truth and predicted label columns
        #[arg(short, long)]
        dataset: PathBuf,

        /// Ground-truth column
        #[arg(short, long, default_value = LABEL_COLUMN)]
        label: String,

        /// Prediction column
        #[arg(short, long, default_value = "prediction")]
        prediction: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Sample {
            gripper,
            object,
            num,
            output,
            seed,
            config,
            plans,
        } => {
            let args = commands::sample::SampleArgs {
                gripper,
                object,
                num,
                output,
                seed,
                config,
                plans,
            };
            commands::sample::run(&args)?;
        }
        Commands::Summary { dataset, label } => {
            print!("{}", commands::summary::run(&dataset, &label)?);
        }
        Commands::Split {
            dataset,
            train_output,
            val_output,
            test_size,
            seed,
            label,
        } => {
            commands::split::run(&dataset, &label, &train_output, &val_output, test_size, seed)?;
        }
        Commands::Report {
            dataset,
            label,
            prediction,
        } => {
            print!("{}", commands::report::run(&dataset, &label, &prediction)?);
        }
    }

    Ok(())
}

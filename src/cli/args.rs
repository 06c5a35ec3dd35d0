use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_CLEAN_CHUNK_SIZE, DEFAULT_RANDOM_SEED, DEFAULT_SAMPLE_CHUNK_SIZE, DEFAULT_SAMPLE_SIZE,
};

#[derive(Parser)]
#[command(name = "accidents-processor")]
#[command(about = "Streaming cleaner and reservoir sampler for large accident CSV datasets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean and normalize an accident dataset, imputing missing weather values
    Clean {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,

        #[arg(short, long, help = "Output CSV file path")]
        output: PathBuf,

        #[arg(long, default_value_t = DEFAULT_CLEAN_CHUNK_SIZE)]
        chunk_size: usize,

        #[arg(long, help = "Skip the median imputation pass")]
        no_impute_weather: bool,

        #[arg(long, help = "Backfill missing end coordinates from start coordinates")]
        fill_end_with_start: bool,

        #[arg(long, help = "Drop rows with missing start coordinates")]
        drop_missing_start_coords: bool,
    },

    /// Draw a fixed-size uniform random sample from a large CSV file
    Sample {
        #[arg(short, long, help = "Input CSV file")]
        input: PathBuf,

        #[arg(short, long, help = "Output CSV file path")]
        output: PathBuf,

        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,

        #[arg(long, default_value_t = DEFAULT_RANDOM_SEED)]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_SAMPLE_CHUNK_SIZE)]
        chunk_size: usize,
    },
}

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{CleaningPipeline, PipelineOptions};
use crate::samplers::sample_file;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Clean {
            input,
            output,
            chunk_size,
            no_impute_weather,
            fill_end_with_start,
            drop_missing_start_coords,
        } => {
            println!("Cleaning accident data...");
            println!("Input file: {}", input.display());
            println!("Output file: {}", output.display());
            println!("Chunk size: {}", chunk_size);

            let options = PipelineOptions {
                chunk_size,
                impute_weather: !no_impute_weather,
                fill_end_with_start,
                drop_missing_start_coordinates: drop_missing_start_coords,
            };

            let progress = ProgressReporter::new_spinner("Processing data...", false);
            let report = CleaningPipeline::new(options).run(&input, &output, Some(&progress))?;
            progress.finish_with_message(&format!(
                "Wrote {} rows in {} chunks",
                report.rows_written, report.chunks_written
            ));

            if report.rows_dropped > 0 {
                println!(
                    "Dropped {} rows with missing start coordinates",
                    report.rows_dropped
                );
            }
            if cli.verbose {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .map_err(|e| crate::error::ProcessingError::Config(e.to_string()))?
                );
            }
            println!("Pipeline complete. Output written to {}", output.display());
        }

        Commands::Sample {
            input,
            output,
            sample_size,
            seed,
            chunk_size,
        } => {
            println!("Sampling accident data...");
            println!("Input file: {}", input.display());
            println!("Sample size: {}, seed: {}", sample_size, seed);

            let progress = ProgressReporter::new_spinner("Scanning data...", false);
            let report = sample_file(&input, &output, sample_size, seed, chunk_size, Some(&progress))?;
            progress.finish_with_message(&format!(
                "Wrote {} of {} rows to {} (seed={})",
                report.rows_sampled,
                report.rows_seen,
                output.display(),
                report.seed
            ));

            if cli.verbose {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .map_err(|e| crate::error::ProcessingError::Config(e.to_string()))?
                );
            }
        }
    }

    Ok(())
}

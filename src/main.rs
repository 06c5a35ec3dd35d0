use accidents_processor::cli::{run, Cli};
use accidents_processor::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

use crate::cli::SampleArgs;
use crate::error::Result;
use crate::report;
use polysaw::workflows;
use std::fs::File;
use tracing::info;

pub fn run(args: SampleArgs) -> Result<()> {
    info!(
        "Generating a sample walk of {} site(s) with seed {}.",
        args.chain_length, args.seed
    );
    let walk = workflows::sample::run(args.chain_length, args.seed, args.max_restarts)?;

    match &args.output {
        Some(path) => {
            report::write_walk(&walk, File::create(path)?)?;
            println!(
                "✓ Walk of {} site(s) ending at {} written to: {}",
                walk.len(),
                walk.end(),
                path.display()
            );
        }
        None => report::write_walk(&walk, std::io::stdout().lock())?,
    }

    Ok(())
}

use crate::cli::SimulateArgs;
use crate::config;
use crate::error::Result;
use crate::report;
use crate::utils::progress::CliProgressHandler;
use polysaw::{engine::progress::ProgressReporter, workflows};
use std::fs::File;
use tracing::info;

pub fn run(args: SimulateArgs) -> Result<()> {
    info!("Resolving simulation configuration...");
    let app_config = config::build_config(&args)?;
    let sim_config = &app_config.core_config;

    let reporter = if app_config.show_progress {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    } else {
        ProgressReporter::new()
    };

    println!(
        "Sampling {} chain length(s) x {} walk(s), seed {}...",
        sim_config.chain_lengths.len(),
        sim_config.n_chains,
        sim_config.seed
    );
    info!("Invoking the ensemble workflow...");

    let records = workflows::ensemble::run(sim_config, &reporter)?;

    for record in &records {
        println!("{}", report::format_summary_line(record));
    }

    if let Some(path) = &app_config.output_path {
        info!("Writing {} record(s) to {:?}", records.len(), path);
        report::write_records(&records, File::create(path)?)?;
        println!("✓ Ensemble records written to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_one_csv_row_per_chain_length() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("records.csv");
        let args = SimulateArgs {
            output: Some(output.clone()),
            chain_lengths: Some("10,20".to_string()),
            n_chains: Some(5),
            seed: Some(0),
            no_progress: true,
            ..Default::default()
        };

        run(args).unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        let rows: Vec<_> = content.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("10,"));
        assert!(rows[2].starts_with("20,"));
    }
}

use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SimulateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use polysaw::engine::config as core_config;
use std::str::FromStr;
use tracing::debug;

/// Resolves the final simulation settings. Precedence, highest first: `--set` overrides,
/// explicit CLI flags, config file values, built-in defaults.
pub fn build_config(args: &SimulateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let ensemble_file = file_config.ensemble.unwrap_or_default();
    let growth_file = file_config.growth.unwrap_or_default();

    let chain_lengths = match (&args.chain_lengths, ensemble_file.chain_lengths) {
        (Some(cli_value), _) => parser::parse_chain_lengths(cli_value)
            .map_err(|e| CliError::Argument(e.to_string()))?,
        (None, Some(file_value)) => file_value.resolve()?,
        (None, None) => defaults.chain_lengths,
    };

    let mut n_chains = args
        .n_chains
        .or(ensemble_file.n_chains)
        .unwrap_or(defaults.n_chains);
    let mut seed = args.seed.or(ensemble_file.seed).unwrap_or(defaults.seed);
    let mut max_restarts = args
        .max_restarts
        .or(growth_file.max_restarts)
        .unwrap_or(defaults.max_restarts);

    for kv_pair in &args.set_values {
        let (key, value) = split_key_value(kv_pair)?;
        match key {
            "ensemble.n-chains" => n_chains = parse_value(key, value)?,
            "ensemble.seed" => seed = parse_value(key, value)?,
            "growth.max-restarts" => max_restarts = parse_value(key, value)?,
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }

    let core_config = core_config::SimulationConfigBuilder::new()
        .chain_lengths(chain_lengths)
        .n_chains(n_chains)
        .seed(seed)
        .max_restarts(max_restarts)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Resolved simulation configuration: {:?}", core_config);

    Ok(AppConfig {
        output_path: args.output.clone(),
        show_progress: !args.no_progress,
        core_config,
    })
}

fn split_key_value(kv_pair: &str) -> Result<(&str, &str)> {
    kv_pair
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid integer value for {}: {}",
            key, value
        ))
    })
}

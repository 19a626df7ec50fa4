use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Polysaw Developers",
    version,
    about = "POLYSAW CLI - Grow self-avoiding walks on the cubic lattice and measure how polymer size scales with chain length.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a chain-length sweep and report radius of gyration and end-to-end distance.
    Simulate(SimulateArgs),
    /// Generate a single walk and export its lattice coordinates.
    Sample(SampleArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the CSV table of ensemble records.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Ensemble Overrides ---
    /// Chain lengths to sample, as a list (10,20,30) or an inclusive range (10:80:10).
    #[arg(short = 'L', long, value_name = "LENGTHS")]
    pub chain_lengths: Option<String>,

    /// Number of independent walks per chain length.
    #[arg(short, long, value_name = "INT")]
    pub n_chains: Option<usize>,

    /// Seed for the random source shared by the whole sweep.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Growth Overrides ---
    /// Growth attempts allowed per walk before the run is aborted.
    #[arg(long, value_name = "INT", value_parser = parse_restart_budget)]
    pub max_restarts: Option<usize>,

    /// Do not display a progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S ensemble.n-chains=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of sites in the walk.
    #[arg(short = 'N', long, default_value_t = 80, value_name = "INT")]
    pub chain_length: usize,

    /// Seed for the walk's own random source.
    #[arg(long, default_value_t = 0, value_name = "INT")]
    pub seed: u64,

    /// Growth attempts allowed before giving up.
    #[arg(
        long,
        default_value_t = 2000,
        value_name = "INT",
        value_parser = parse_restart_budget
    )]
    pub max_restarts: usize,

    /// Path for the CSV of x,y,z coordinates. Printed to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// A budget of zero never makes an attempt, so both subcommands refuse it at parse time.
fn parse_restart_budget(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("the restart budget must be at least 1".to_string()),
        Ok(budget) => Ok(budget),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_parses_overrides() {
        let cli = Cli::parse_from([
            "polysaw",
            "-vv",
            "simulate",
            "-L",
            "10:30:10",
            "-n",
            "50",
            "--seed",
            "3",
            "-S",
            "growth.max-restarts=10",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate command");
        };
        assert_eq!(args.chain_lengths.as_deref(), Some("10:30:10"));
        assert_eq!(args.n_chains, Some(50));
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.set_values, vec!["growth.max-restarts=10"]);
    }

    #[test]
    fn sample_uses_defaults() {
        let cli = Cli::parse_from(["polysaw", "sample"]);
        let Commands::Sample(args) = cli.command else {
            panic!("expected sample command");
        };
        assert_eq!(args.chain_length, 80);
        assert_eq!(args.seed, 0);
        assert_eq!(args.max_restarts, 2000);
        assert!(args.output.is_none());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["polysaw", "-q", "-v", "sample"]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_restart_budget_is_rejected_by_both_commands() {
        assert!(Cli::try_parse_from(["polysaw", "sample", "--max-restarts", "0"]).is_err());
        assert!(Cli::try_parse_from(["polysaw", "simulate", "--max-restarts", "0"]).is_err());

        let cli = Cli::parse_from(["polysaw", "sample", "--max-restarts", "1"]);
        let Commands::Sample(args) = cli.command else {
            panic!("expected sample command");
        };
        assert_eq!(args.max_restarts, 1);
    }
}

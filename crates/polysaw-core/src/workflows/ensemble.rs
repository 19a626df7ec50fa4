use crate::core::utils::geometry::{calculate_end_to_end_distance, calculate_radius_of_gyration};
use crate::core::utils::statistics::{SampleSummary, summarize};
use crate::engine::config::{SimulationConfig, SimulationConfigBuilder};
use crate::engine::error::EngineError;
use crate::engine::growth;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::rng::seeded_rng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Ensemble averages for one chain length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnsembleRecord {
    #[serde(rename = "N")]
    pub chain_length: usize,
    pub rg_mean: f64,
    pub rg_std: f64,
    pub e2e_mean: f64,
    pub e2e_std: f64,
}

impl EnsembleRecord {
    pub fn radius_of_gyration(&self) -> SampleSummary {
        SampleSummary {
            mean: self.rg_mean,
            std_dev: self.rg_std,
        }
    }

    pub fn end_to_end_distance(&self) -> SampleSummary {
        SampleSummary {
            mean: self.e2e_mean,
            std_dev: self.e2e_std,
        }
    }
}

/// Runs the full chain-length sweep described by `config`.
///
/// One random source is seeded from `config.seed` and advanced through every walk of every
/// chain length in order. Records are therefore reproducible end to end from the seed, but
/// changing `n_chains` also changes the walks drawn for later chain lengths.
///
/// The first walk that exhausts its restart budget aborts the whole run.
#[instrument(skip_all, name = "ensemble_workflow")]
pub fn run(
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<EnsembleRecord>, EngineError> {
    info!(
        lengths = config.chain_lengths.len(),
        n_chains = config.n_chains,
        seed = config.seed,
        max_restarts = config.max_restarts,
        "Starting ensemble sweep."
    );

    let mut rng = seeded_rng(config.seed);
    let records = config
        .chain_lengths
        .iter()
        .map(|&chain_length| {
            sample_ensemble(
                chain_length,
                config.n_chains,
                config.max_restarts,
                &mut rng,
                reporter,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("Ensemble sweep complete. {} record(s).", records.len());
    Ok(records)
}

/// Convenience entry point taking the raw parameters and reporting no progress.
pub fn run_simulation(
    chain_lengths: &[usize],
    n_chains: usize,
    seed: u64,
    max_restarts: usize,
) -> Result<Vec<EnsembleRecord>, EngineError> {
    let config = SimulationConfigBuilder::new()
        .chain_lengths(chain_lengths.to_vec())
        .n_chains(n_chains)
        .seed(seed)
        .max_restarts(max_restarts)
        .build()?;
    run(&config, &ProgressReporter::new())
}

fn sample_ensemble<R: Rng + ?Sized>(
    chain_length: usize,
    n_chains: usize,
    max_restarts: usize,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<EnsembleRecord, EngineError> {
    reporter.report(Progress::EnsembleStart {
        chain_length,
        n_chains: n_chains as u64,
    });

    let mut rgs = Vec::with_capacity(n_chains);
    let mut e2es = Vec::with_capacity(n_chains);
    let mut total_attempts = 0usize;

    for _ in 0..n_chains {
        let (walk, attempts) = growth::generate_with_attempts(chain_length, rng, max_restarts)?;
        total_attempts += attempts;

        let points = walk.points();
        rgs.push(
            calculate_radius_of_gyration(&points)
                .ok_or_else(|| empty_walk_error(chain_length))?,
        );
        e2es.push(
            calculate_end_to_end_distance(&points)
                .ok_or_else(|| empty_walk_error(chain_length))?,
        );
        reporter.report(Progress::WalkGenerated);
    }

    let rg = summarize_observable(&rgs, "radius of gyration", chain_length)?;
    let e2e = summarize_observable(&e2es, "end-to-end distance", chain_length)?;

    let mean_attempts = total_attempts as f64 / n_chains.max(1) as f64;
    reporter.report(Progress::Message(format!(
        "N={chain_length}: {mean_attempts:.2} attempt(s) per accepted walk"
    )));
    reporter.report(Progress::EnsembleFinish);

    debug!(chain_length, total_attempts, "Growth attempts for ensemble.");
    info!(
        chain_length,
        rg_mean = rg.mean,
        e2e_mean = e2e.mean,
        "Ensemble complete; {:.2} attempt(s) per accepted walk.",
        mean_attempts
    );

    Ok(EnsembleRecord {
        chain_length,
        rg_mean: rg.mean,
        rg_std: rg.std_dev,
        e2e_mean: e2e.mean,
        e2e_std: e2e.std_dev,
    })
}

fn empty_walk_error(chain_length: usize) -> EngineError {
    EngineError::Internal(format!("generator returned an empty walk for N={chain_length}"))
}

fn summarize_observable(
    values: &[f64],
    observable: &str,
    chain_length: usize,
) -> Result<SampleSummary, EngineError> {
    summarize(values).ok_or_else(|| {
        EngineError::Internal(format!(
            "no {observable} samples collected for N={chain_length}"
        ))
    })
}

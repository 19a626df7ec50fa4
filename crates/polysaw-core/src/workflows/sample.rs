use crate::core::models::walk::Walk;
use crate::engine::error::EngineError;
use crate::engine::growth;
use crate::engine::rng::seeded_rng;
use tracing::{info, instrument};

/// Draws a single walk from its own seeded source, for inspection or 3D rendering.
///
/// The source is independent of any ensemble run, so the same `(chain_length, seed)` pair
/// always yields the same conformation.
#[instrument(name = "sample_workflow")]
pub fn run(chain_length: usize, seed: u64, max_restarts: usize) -> Result<Walk, EngineError> {
    let mut rng = seeded_rng(seed);
    let (walk, attempts) = growth::generate_with_attempts(chain_length, &mut rng, max_restarts)?;
    info!(
        chain_length,
        attempts,
        end = %walk.end(),
        "Sample walk generated."
    );
    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::lattice::LatticePoint;

    #[test]
    fn sample_is_a_valid_walk_of_requested_length() {
        let walk = run(80, 0, 2000).unwrap();
        assert_eq!(walk.len(), 80);
        assert_eq!(walk.start(), LatticePoint::ORIGIN);
        assert!(walk.is_valid_saw());
    }

    #[test]
    fn sample_is_reproducible_from_its_seed() {
        assert_eq!(run(50, 21, 2000).unwrap(), run(50, 21, 2000).unwrap());
    }

    #[test]
    fn sample_propagates_generation_failures() {
        assert_eq!(
            run(10, 0, 0),
            Err(EngineError::ExhaustedRestarts {
                chain_length: 10,
                max_restarts: 0,
            })
        );
    }
}

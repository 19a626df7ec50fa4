use super::error::EngineError;
use crate::core::models::lattice::{Direction, LatticePoint};
use crate::core::models::walk::Walk;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Grows a self-avoiding walk of `chain_length` sites by greedy restart sampling.
///
/// Each attempt starts at the origin and, at every step, tries the six lattice directions
/// in a freshly shuffled order, taking the first unoccupied neighbour. An attempt that
/// runs into a site with no free neighbour is discarded whole and growth restarts from the
/// origin; the random stream keeps advancing, so every attempt differs.
///
/// Growth is not uniform over the self-avoiding walk ensemble (attrition bias), and no
/// correction is applied.
///
/// # Errors
///
/// - [`EngineError::InvalidChainLength`] if `chain_length` is zero.
/// - [`EngineError::ExhaustedRestarts`] if `max_restarts` attempts all dead-end. A budget of
///   zero never succeeds.
pub fn generate<R: Rng + ?Sized>(
    chain_length: usize,
    rng: &mut R,
    max_restarts: usize,
) -> Result<Walk, EngineError> {
    generate_with_attempts(chain_length, rng, max_restarts).map(|(walk, _)| walk)
}

/// Like [`generate`], also returning how many attempts (1-based) were consumed.
#[instrument(level = "trace", skip(rng))]
pub fn generate_with_attempts<R: Rng + ?Sized>(
    chain_length: usize,
    rng: &mut R,
    max_restarts: usize,
) -> Result<(Walk, usize), EngineError> {
    if chain_length == 0 {
        return Err(EngineError::InvalidChainLength(chain_length));
    }

    for attempt in 1..=max_restarts {
        match grow_attempt(chain_length, rng) {
            Some(positions) => {
                trace!(attempt, "Walk completed.");
                return Ok((Walk::from_positions(positions), attempt));
            }
            None => trace!(attempt, "Attempt trapped; restarting from the origin."),
        }
    }

    debug!(
        chain_length,
        max_restarts, "Restart budget exhausted without a complete walk."
    );
    Err(EngineError::ExhaustedRestarts {
        chain_length,
        max_restarts,
    })
}

/// One growth attempt. The occupied set lives only for the duration of the call.
fn grow_attempt<R: Rng + ?Sized>(chain_length: usize, rng: &mut R) -> Option<Vec<LatticePoint>> {
    let mut positions = Vec::with_capacity(chain_length);
    let mut occupied = HashSet::with_capacity(chain_length);
    positions.push(LatticePoint::ORIGIN);
    occupied.insert(LatticePoint::ORIGIN);

    let mut current = LatticePoint::ORIGIN;
    for _ in 1..chain_length {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        let next = directions
            .into_iter()
            .map(|direction| current + direction)
            .find(|candidate| !occupied.contains(candidate))?;

        positions.push(next);
        occupied.insert(next);
        current = next;
    }
    Some(positions)
}

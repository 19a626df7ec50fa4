use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random source threaded through every walk of a run.
///
/// ChaCha8 gives the same stream on every platform for a given seed, which is what makes
/// ensemble records reproducible bit for bit.
pub type WalkRng = ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> WalkRng {
    WalkRng::seed_from_u64(seed)
}

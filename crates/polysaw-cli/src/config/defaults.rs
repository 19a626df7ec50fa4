pub struct DefaultsConfig {
    pub chain_lengths: Vec<usize>,
    pub n_chains: usize,
    pub seed: u64,
    pub max_restarts: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            chain_lengths: (10..=80).step_by(10).collect(),
            n_chains: 200,
            seed: 0,
            max_restarts: 2000,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("At least one chain length is required")]
    EmptyChainLengths,
    #[error("Chain lengths must be positive, found 0 at position {index}")]
    ZeroChainLength { index: usize },
    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Chain lengths (number of sites) to sample, in reporting order.
    pub chain_lengths: Vec<usize>,
    /// Independent walks per chain length.
    pub n_chains: usize,
    pub seed: u64,
    /// Growth attempts allowed per walk before giving up.
    pub max_restarts: usize,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    chain_lengths: Option<Vec<usize>>,
    n_chains: Option<usize>,
    seed: Option<u64>,
    max_restarts: Option<usize>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain_lengths(mut self, lengths: Vec<usize>) -> Self {
        self.chain_lengths = Some(lengths);
        self
    }
    pub fn n_chains(mut self, n: usize) -> Self {
        self.n_chains = Some(n);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn max_restarts(mut self, restarts: usize) -> Self {
        self.max_restarts = Some(restarts);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let chain_lengths = self
            .chain_lengths
            .ok_or(ConfigError::MissingParameter("chain_lengths"))?;
        if chain_lengths.is_empty() {
            return Err(ConfigError::EmptyChainLengths);
        }
        if let Some(index) = chain_lengths.iter().position(|&n| n == 0) {
            return Err(ConfigError::ZeroChainLength { index });
        }

        let n_chains = self
            .n_chains
            .ok_or(ConfigError::MissingParameter("n_chains"))?;
        if n_chains == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "n_chains",
                reason: "at least one chain per length is required",
            });
        }

        let max_restarts = self
            .max_restarts
            .ok_or(ConfigError::MissingParameter("max_restarts"))?;
        if max_restarts == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "max_restarts",
                reason: "a budget of zero attempts can never produce a walk",
            });
        }

        Ok(SimulationConfig {
            chain_lengths,
            n_chains,
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
            max_restarts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
            .chain_lengths(vec![10, 20])
            .n_chains(5)
            .seed(0)
            .max_restarts(2000)
    }

    #[test]
    fn complete_builder_produces_config() {
        let config = complete_builder().build().unwrap();
        assert_eq!(
            config,
            SimulationConfig {
                chain_lengths: vec![10, 20],
                n_chains: 5,
                seed: 0,
                max_restarts: 2000,
            }
        );
    }

    #[test]
    fn missing_seed_is_reported_by_name() {
        let result = SimulationConfigBuilder::new()
            .chain_lengths(vec![10])
            .n_chains(1)
            .max_restarts(1)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("seed")));
    }

    #[test]
    fn missing_chain_lengths_is_reported_first() {
        let result = SimulationConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("chain_lengths")));
    }

    #[test]
    fn empty_chain_lengths_are_rejected() {
        let result = complete_builder().chain_lengths(vec![]).build();
        assert_eq!(result, Err(ConfigError::EmptyChainLengths));
    }

    #[test]
    fn zero_chain_length_reports_its_position() {
        let result = complete_builder().chain_lengths(vec![5, 0, 7]).build();
        assert_eq!(result, Err(ConfigError::ZeroChainLength { index: 1 }));
    }

    #[test]
    fn zero_chains_and_zero_budget_are_rejected() {
        assert!(matches!(
            complete_builder().n_chains(0).build(),
            Err(ConfigError::InvalidValue {
                parameter: "n_chains",
                ..
            })
        ));
        assert!(matches!(
            complete_builder().max_restarts(0).build(),
            Err(ConfigError::InvalidValue {
                parameter: "max_restarts",
                ..
            })
        ));
    }
}

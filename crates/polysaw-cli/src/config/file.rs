use crate::error::{CliError, Result};
use crate::utils::parser::{self, ChainLengthRange};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileChainLengths {
    List(Vec<usize>),
    Range {
        start: usize,
        end: usize,
        #[serde(default = "default_step")]
        step: usize,
    },
}

fn default_step() -> usize {
    1
}

impl FileChainLengths {
    pub fn resolve(self) -> Result<Vec<usize>> {
        match self {
            FileChainLengths::List(lengths) => Ok(lengths),
            FileChainLengths::Range { start, end, step } => {
                parser::expand_range(ChainLengthRange { start, end, step })
                    .map_err(|e| CliError::Config(e.to_string()))
            }
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEnsembleConfig {
    #[serde(rename = "chain-lengths")]
    pub chain_lengths: Option<FileChainLengths>,
    #[serde(rename = "n-chains")]
    pub n_chains: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGrowthConfig {
    #[serde(rename = "max-restarts")]
    pub max_restarts: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ensemble: Option<FileEnsembleConfig>,
    pub growth: Option<FileGrowthConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

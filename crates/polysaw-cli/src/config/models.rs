use polysaw::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub output_path: Option<PathBuf>,
    pub show_progress: bool,
    pub core_config: core_config::SimulationConfig,
}

use std::path::PathBuf;
use crate::error::DcaResult;

// Application configuration, built once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_folder: PathBuf,
    pub input_files: Vec<PathBuf>,
    pub converter: String,
    pub jobs: usize,
    pub keep_going: bool,
    pub no_progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_folder: PathBuf::from("."),
            input_files: Vec::new(),
            converter: "dca".to_string(),
            jobs: 1,
            keep_going: false,
            no_progress: false,
        }
    }
}

// Port for configuration sources
pub trait ConfigPort {
    fn get_config(&self) -> DcaResult<AppConfig>;
}

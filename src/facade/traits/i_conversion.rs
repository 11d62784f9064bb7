use crate::config::ports::AppConfig;
use crate::error::DcaResult;
use crate::models::conversion::BatchSummary;

// Facade interface, drives a whole batch
pub trait ConversionFacadeTrait: Send + Sync {
    /// Converts every input file of `config`, printing a line per file and a summary
    fn run(&self, config: &AppConfig) -> DcaResult<BatchSummary>;
}

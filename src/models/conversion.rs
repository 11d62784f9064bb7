use std::path::PathBuf;
use std::time::Duration;

use crate::error::DcaError;
use crate::utils::format::average_reduction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub duration: Duration,
    pub input_size: u64,
    pub output_size: u64,
}

// One converted file together with where it came from and went to
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: ConversionResult,
}

#[derive(Debug)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: DcaError,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub conversions: Vec<FileReport>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<FailedFile>,
}

impl BatchSummary {
    pub fn count(&self) -> usize {
        self.conversions.len()
    }

    pub fn total_duration(&self) -> Duration {
        self.conversions.iter().map(|c| c.result.duration).sum()
    }

    pub fn results(&self) -> Vec<ConversionResult> {
        self.conversions.iter().map(|c| c.result).collect()
    }

    pub fn average_reduction(&self) -> Option<f64> {
        average_reduction(&self.results())
    }
}

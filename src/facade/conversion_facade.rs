use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use log::{debug, error, info, warn};
use rayon::prelude::*;
use crate::config::ports::AppConfig;
use crate::error::{DcaError, DcaResult};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchSummary, ConversionResult, FailedFile, FileReport};
use crate::service::runner::ConversionRunner;
use crate::utils::file::{is_dca_file, output_path_for};
use crate::utils::format::{format_percentage, pretty_size, reduction};
use crate::utils::utils::ProgressManager;

const SEPARATOR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub enum PlannedFile {
    Skip(PathBuf),
    Convert { input: PathBuf, output: PathBuf },
}

/// Decides, in input order, which files are converted and where their output goes
pub fn plan_batch(inputs: &[PathBuf], output_folder: &Path) -> Vec<PlannedFile> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            if is_dca_file(input) {
                return PlannedFile::Skip(input.clone());
            }
            let output = output_path_for(input, output_folder);
            if !seen.insert(output.clone()) {
                warn!("{} overwrites an earlier output of this batch", output.display());
            }
            PlannedFile::Convert {
                input: input.clone(),
                output,
            }
        })
        .collect()
}

pub fn skip_line(input: &Path) -> String {
    format!("Skipping {} - already a DCA file!", input.display())
}

pub fn conversion_line(report: &FileReport) -> String {
    let result = &report.result;
    format!(
        "Converted {} to DCA - took {:.3} seconds, input size {}, output size {} (reduction {})",
        report.input.display(),
        result.duration.as_secs_f64(),
        pretty_size(result.input_size as f64),
        pretty_size(result.output_size as f64),
        format_percentage(reduction(result.input_size, result.output_size).ok())
    )
}

pub fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    let mut lines = vec![
        "-".repeat(SEPARATOR_WIDTH),
        format!("Successfully converted {} files", summary.count()),
        format!("Total time: {:.3} seconds", summary.total_duration().as_secs_f64()),
        format!(
            "Average file size reduction: {}",
            format_percentage(summary.average_reduction())
        ),
    ];
    if !summary.failures.is_empty() {
        lines.push(format!("Failed to convert {} files:", summary.failures.len()));
        for failure in &summary.failures {
            lines.push(format!("  {}: {}", failure.input.display(), failure.error));
        }
    }
    lines
}

/// Batch orchestrator: plans the batch, runs the conversions and reports on them
pub struct ConversionFacade {
    runner: ConversionRunner,
}

impl ConversionFacade {
    pub fn new(runner: ConversionRunner) -> Self {
        ConversionFacade { runner }
    }

    fn convert_planned(&self, item: &PlannedFile) -> Option<DcaResult<ConversionResult>> {
        match item {
            PlannedFile::Skip(_) => None,
            PlannedFile::Convert { input, output } => Some(self.runner.convert_one(input, output)),
        }
    }

    // Errors the batch cannot continue past under the current policy
    fn aborts_batch(error: &DcaError, config: &AppConfig) -> bool {
        !config.keep_going || error.is_fatal()
    }

    // Outcomes come back in plan order whatever order the workers finish in.
    // Once a file aborts the batch, files after it are not started.
    fn convert_parallel(
        &self,
        plan: &[PlannedFile],
        config: &AppConfig,
        pm: &ProgressManager,
    ) -> DcaResult<Vec<Option<DcaResult<ConversionResult>>>> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(config.jobs).build()?;
        info!("converting with {} workers", pool.current_num_threads());
        let first_abort = AtomicUsize::new(usize::MAX);
        Ok(pool.install(|| {
            plan.par_iter()
                .enumerate()
                .map(|(index, item)| {
                    if let PlannedFile::Convert { input, .. } = item {
                        if index > first_abort.load(Ordering::SeqCst) {
                            debug!("not starting {}, batch already aborted", input.display());
                            return None;
                        }
                    }
                    let outcome = self.convert_planned(item);
                    if let Some(result) = &outcome {
                        pm.advance();
                        if let Err(e) = result {
                            if Self::aborts_batch(e, config) {
                                first_abort.fetch_min(index, Ordering::SeqCst);
                            }
                        }
                    }
                    outcome
                })
                .collect()
        }))
    }

    fn record(
        &self,
        item: &PlannedFile,
        outcome: Option<DcaResult<ConversionResult>>,
        config: &AppConfig,
        pm: &ProgressManager,
        summary: &mut BatchSummary,
    ) -> DcaResult<()> {
        let (input, output) = match item {
            PlannedFile::Skip(input) => {
                info!("skipping {}", input.display());
                pm.println(&skip_line(input));
                summary.skipped.push(input.clone());
                return Ok(());
            }
            PlannedFile::Convert { input, output } => (input, output),
        };

        match outcome {
            Some(Ok(result)) => {
                let report = FileReport {
                    input: input.clone(),
                    output: output.clone(),
                    result,
                };
                pm.println(&conversion_line(&report));
                summary.conversions.push(report);
                Ok(())
            }
            Some(Err(e)) if !Self::aborts_batch(&e, config) => {
                error!("converting {} failed: {}", input.display(), e);
                pm.println(&format!("Failed to convert {}: {}", input.display(), e));
                summary.failures.push(FailedFile {
                    input: input.clone(),
                    error: e,
                });
                Ok(())
            }
            Some(Err(e)) => {
                error!("aborting batch at {}: {}", input.display(), e);
                Err(e)
            }
            // never started because an earlier file aborted the batch
            None => Ok(()),
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn run(&self, config: &AppConfig) -> DcaResult<BatchSummary> {
        let plan = plan_batch(&config.input_files, &config.output_folder);
        let to_convert = plan
            .iter()
            .filter(|item| matches!(item, PlannedFile::Convert { .. }))
            .count();
        info!(
            "{} files given, {} to convert into {}",
            plan.len(),
            to_convert,
            config.output_folder.display()
        );

        let pm = ProgressManager::new(to_convert as u64, config.no_progress);
        let mut summary = BatchSummary::default();

        if config.jobs == 1 {
            for (index, item) in plan.iter().enumerate() {
                if let PlannedFile::Convert { input, .. } = item {
                    pm.start_file(index, plan.len(), &input.display().to_string());
                }
                let outcome = self.convert_planned(item);
                if outcome.is_some() {
                    pm.advance();
                }
                self.record(item, outcome, config, &pm, &mut summary)?;
            }
        } else {
            let outcomes = self.convert_parallel(&plan, config, &pm)?;
            for (item, outcome) in plan.iter().zip(outcomes) {
                self.record(item, outcome, config, &pm, &mut summary)?;
            }
        }

        pm.finish(summary.count(), summary.skipped.len());
        for line in summary_lines(&summary) {
            pm.println(&line);
        }
        Ok(summary)
    }
}

use clap::Parser;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::DcaResult;
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::BatchSummary;
use crate::service::config_service::ConfigService;
use crate::service::runner::ConversionRunner;
use crate::utils::utils::setup_logging;

pub fn process_cli_mode() -> DcaResult<BatchSummary> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;
    run_batch(&config)
}

pub fn run_batch(config: &AppConfig) -> DcaResult<BatchSummary> {
    let facade: Box<dyn ConversionFacadeTrait> =
        Box::new(ConversionFacade::new(ConversionRunner::with_program(&config.converter)));
    facade.run(config)
}

// CLI configuration adapter
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> DcaResult<AppConfig> {
        if !self.cli.output.is_dir() {
            log::warn!(
                "output folder {} does not exist, conversions will fail to write",
                self.cli.output.display()
            );
        }

        Ok(AppConfig {
            output_folder: self.cli.output.clone(),
            input_files: self.cli.files.clone(),
            converter: self.cli.converter.clone(),
            jobs: self.cli.jobs,
            keep_going: self.cli.keep_going,
            no_progress: self.cli.no_progress,
        })
    }
}

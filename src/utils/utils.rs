use std::io::{self, Write};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use crate::error::{DcaError, DcaResult};

pub fn setup_logging(log_level: &str) -> DcaResult<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| DcaError::Io(io::Error::new(io::ErrorKind::Other, e)))?;
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress || total == 0 {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager { pb, no_progress }
    }

    pub fn start_file(&self, index: usize, total: usize, name: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(format!("converting {}/{}: {}", index + 1, total, name));
    }

    pub fn advance(&self) {
        if self.no_progress {
            return;
        }
        self.pb.inc(1);
    }

    // Prints a report line without tearing the bar
    pub fn println(&self, line: &str) {
        self.pb.suspend(|| println!("{}", line));
    }

    // Files whose conversion has finished, successfully or not
    pub fn position(&self) -> u64 {
        self.pb.position()
    }

    pub fn finish(&self, converted: usize, skipped: usize) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(format!(
            "done, {} processed, {} converted, {} skipped",
            self.position(),
            converted,
            skipped
        ));
    }
}

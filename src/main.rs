use std::process;

use dcau::action::cli::process_cli_mode;

fn main() {
    match process_cli_mode() {
        Ok(summary) => {
            if let Some(failure) = summary.failures.first() {
                log::warn!("{} of the files failed to convert", summary.failures.len());
                process::exit(failure.error.exit_code());
            }
            log::info!("batch finished, {} files converted", summary.count());
        }
        Err(e) => {
            eprintln!("dcau: {}", e);
            process::exit(e.exit_code());
        }
    }
}

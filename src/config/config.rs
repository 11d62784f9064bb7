use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "dcau",
    about = "Batch-converts files to DCA with the external dca tool",
    long_about = "Runs the dca converter on every given file, writes <name>.dca into the output folder and reports time taken and size reduction per file and for the whole batch.\nFiles that already have the .dca extension are skipped.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Files to convert, processed in the given order
    pub files: Vec<PathBuf>,
    /// Specifies the folder where the output should be saved
    #[arg(short, long, value_name = "FOLDER", default_value = ".")]
    pub output: PathBuf,
    /// Converter program invoked as `<converter> <file>`
    #[arg(long, value_name = "PROGRAM", default_value = "dca")]
    pub converter: String,
    /// Number of parallel conversions, 0 for one per CPU
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,
    /// Report failed files and continue with the rest of the batch
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

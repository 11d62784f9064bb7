use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type DcaResult<T> = Result<T, DcaError>;

#[derive(Error, Debug)]
pub enum DcaError {
    #[error("input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),
    #[error("converter '{tool}' could not be started: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("converter failed on '{}' (exit code {}): {}", .input.display(), describe_code(.code), .stderr.trim())]
    ToolExecutionFailed {
        input: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
    #[error("could not write output '{}': {source}", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reduction is undefined for an empty input")]
    DivisionUndefined,
    #[error("worker pool could not be built: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        // killed by a signal
        None => "none".to_string(),
    }
}

impl DcaError {
    // Maps an error opening or measuring an input file to the matching kind
    pub fn from_input(path: &std::path::Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => DcaError::InputNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => DcaError::PermissionDenied(path.to_path_buf()),
            _ => DcaError::Io(err),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DcaError::InputNotFound(_) => 3,
            DcaError::PermissionDenied(_) => 4,
            DcaError::ToolUnavailable { .. } => 5,
            DcaError::ToolExecutionFailed { .. } => 6,
            DcaError::OutputWriteError { .. } => 7,
            DcaError::DivisionUndefined | DcaError::WorkerPool(_) | DcaError::Io(_) => 1,
        }
    }

    /// Errors that would repeat for every remaining file, so the batch stops
    /// even under `--keep-going`.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DcaError::ToolUnavailable { .. } | DcaError::OutputWriteError { .. } | DcaError::WorkerPool(_)
        )
    }
}

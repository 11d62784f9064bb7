use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use log::{debug, warn};
use crate::error::{DcaError, DcaResult};
use crate::service::traits::i_service::ConverterServiceTrait;

/// Runs the external `dca` program as `<program> <input>` and captures its stdout
pub struct DcaConverter {
    program: String,
}

impl DcaConverter {
    pub fn new(program: impl Into<String>) -> Self {
        DcaConverter { program: program.into() }
    }
}

impl ConverterServiceTrait for DcaConverter {
    fn convert(&self, input: &Path) -> DcaResult<Vec<u8>> {
        debug!("running {} {}", self.program, input.display());
        let output = Command::new(&self.program)
            .arg(input)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => DcaError::ToolUnavailable {
                    tool: self.program.clone(),
                    source: e,
                },
                _ => DcaError::Io(e),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(DcaError::ToolExecutionFailed {
                input: input.to_path_buf(),
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.trim().is_empty() {
            warn!("{} reported on {}: {}", self.program, input.display(), stderr.trim());
        }
        debug!("{} produced {} bytes for {}", self.program, output.stdout.len(), input.display());
        Ok(output.stdout)
    }
}

use std::path::Path;
use crate::error::DcaResult;

// Converter interface, turns one input file into DCA bytes
pub trait ConverterServiceTrait: Send + Sync {
    /// Converts the file at `input` and returns the complete DCA stream
    /// # Arguments
    /// - input: path handed to the converter
    /// # Returns
    /// - the converter's output bytes, or `ToolUnavailable` / `ToolExecutionFailed`
    fn convert(&self, input: &Path) -> DcaResult<Vec<u8>>;
}

// File interface, the filesystem primitives a conversion needs
pub trait FileServiceTrait: Send + Sync {
    /// Fails with `InputNotFound` or `PermissionDenied` when `input` cannot be opened for reading
    fn ensure_readable(&self, input: &Path) -> DcaResult<()>;

    /// Writes `data` to `output`, replacing any existing file
    fn write_output(&self, output: &Path, data: &[u8]) -> DcaResult<()>;

    /// Size of an input file in bytes
    fn file_size(&self, path: &Path) -> DcaResult<u64>;

    /// Size of a freshly written output, `OutputWriteError` when it cannot be read back
    fn output_size(&self, output: &Path) -> DcaResult<u64>;
}

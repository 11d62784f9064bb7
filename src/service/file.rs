use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use crate::error::{DcaError, DcaResult};
use crate::service::traits::i_service::FileServiceTrait;

/// File service backed by the local filesystem
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        FileService::new()
    }
}

impl FileServiceTrait for FileService {
    fn ensure_readable(&self, input: &Path) -> DcaResult<()> {
        File::open(input).map_err(|e| DcaError::from_input(input, e))?;
        Ok(())
    }

    fn write_output(&self, output: &Path, data: &[u8]) -> DcaResult<()> {
        let write_error = |source| DcaError::OutputWriteError {
            path: output.to_path_buf(),
            source,
        };
        let file = File::create(output).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(data).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        Ok(())
    }

    fn file_size(&self, path: &Path) -> DcaResult<u64> {
        let metadata = fs::metadata(path).map_err(|e| DcaError::from_input(path, e))?;
        Ok(metadata.len())
    }

    fn output_size(&self, output: &Path) -> DcaResult<u64> {
        let metadata = fs::metadata(output).map_err(|source| DcaError::OutputWriteError {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(metadata.len())
    }
}

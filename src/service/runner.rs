use std::path::Path;
use std::time::Instant;
use log::info;
use crate::error::DcaResult;
use crate::models::conversion::ConversionResult;
use crate::service::converter::DcaConverter;
use crate::service::file::FileService;
use crate::service::traits::i_service::{ConverterServiceTrait, FileServiceTrait};

/// Converts single files: runs the converter, stores its output and measures the run
pub struct ConversionRunner {
    converter: Box<dyn ConverterServiceTrait>,
    file_service: Box<dyn FileServiceTrait>,
}

impl ConversionRunner {
    pub fn new(converter: Box<dyn ConverterServiceTrait>, file_service: Box<dyn FileServiceTrait>) -> Self {
        ConversionRunner {
            converter,
            file_service,
        }
    }

    /// Runner that shells out to `program` and uses the local filesystem
    pub fn with_program(program: &str) -> Self {
        ConversionRunner::new(Box::new(DcaConverter::new(program)), Box::new(FileService::new()))
    }

    /// Converts `input` into `output`, overwriting it, and measures the run
    pub fn convert_one(&self, input: &Path, output: &Path) -> DcaResult<ConversionResult> {
        self.file_service.ensure_readable(input)?;

        let start = Instant::now();
        let data = self.converter.convert(input)?;
        self.file_service.write_output(output, &data)?;
        let duration = start.elapsed();

        let input_size = self.file_service.file_size(input)?;
        let output_size = self.file_service.output_size(output)?;
        info!(
            "{} -> {}: {} bytes to {} bytes in {:?}",
            input.display(),
            output.display(),
            input_size,
            output_size,
            duration
        );

        Ok(ConversionResult {
            duration,
            input_size,
            output_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DcaError;
    use std::fs;

    struct HalvingConverter;

    impl ConverterServiceTrait for HalvingConverter {
        fn convert(&self, input: &Path) -> DcaResult<Vec<u8>> {
            let data = fs::read(input)?;
            Ok(data[..data.len() / 2].to_vec())
        }
    }

    fn runner() -> ConversionRunner {
        ConversionRunner::new(Box::new(HalvingConverter), Box::new(FileService::new()))
    }

    #[test]
    fn convert_one_reports_both_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("track.wav");
        let output = dir.path().join("track.dca");
        fs::write(&input, vec![7u8; 1000]).unwrap();

        let result = runner().convert_one(&input, &output).unwrap();
        assert_eq!(result.input_size, 1000);
        assert_eq!(result.output_size, 500);
        assert_eq!(fs::read(&output).unwrap(), vec![7u8; 500]);
    }

    #[test]
    fn output_missing_after_write_is_output_error() {
        // accepts the write but never creates the file
        struct DroppingFiles;
        impl FileServiceTrait for DroppingFiles {
            fn ensure_readable(&self, input: &Path) -> DcaResult<()> {
                FileService::new().ensure_readable(input)
            }
            fn write_output(&self, _output: &Path, _data: &[u8]) -> DcaResult<()> {
                Ok(())
            }
            fn file_size(&self, path: &Path) -> DcaResult<u64> {
                FileService::new().file_size(path)
            }
            fn output_size(&self, output: &Path) -> DcaResult<u64> {
                FileService::new().output_size(output)
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("track.wav");
        let output = dir.path().join("track.dca");
        fs::write(&input, vec![1u8; 10]).unwrap();

        let runner = ConversionRunner::new(Box::new(HalvingConverter), Box::new(DroppingFiles));
        let err = runner.convert_one(&input, &output).unwrap_err();
        assert!(matches!(err, DcaError::OutputWriteError { path: ref p, .. } if *p == output));
    }

    #[test]
    fn missing_input_never_reaches_converter() {
        struct Unreachable;
        impl ConverterServiceTrait for Unreachable {
            fn convert(&self, _input: &Path) -> DcaResult<Vec<u8>> {
                panic!("converter called for a missing input");
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let runner = ConversionRunner::new(Box::new(Unreachable), Box::new(FileService::new()));
        let err = runner
            .convert_one(&dir.path().join("gone.wav"), &dir.path().join("gone.dca"))
            .unwrap_err();
        assert!(matches!(err, DcaError::InputNotFound(_)));
    }
}

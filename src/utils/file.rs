use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const DCA_EXTENSION: &str = "dca";

pub fn is_dca_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(DCA_EXTENSION))
}

/// Output location for `input`: its stem with the `.dca` extension, directly
/// inside `output_folder`. The input's own directories are never mirrored.
pub fn output_path_for(input: &Path, output_folder: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(DCA_EXTENSION);
    output_folder.join(file_name)
}

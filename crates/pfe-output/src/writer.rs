//! CSV serialization of composed splits.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use pfe_core::SplitFeatures;

use crate::error::{OutputError, Result};
use crate::table::render_table;

pub fn write_feature_csv<W: Write>(writer: W, split: &SplitFeatures) -> Result<()> {
    let (headers, rows) = render_table(split)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&headers)?;
    for row in &rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the split to `path` through a temporary sibling file, so a failed
/// write never leaves a partial table at `path`.
pub fn write_feature_file(path: &Path, split: &SplitFeatures) -> Result<PathBuf> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let partial = partial_path(path);
    let result = fs::File::create(&partial)
        .map_err(io_error)
        .and_then(|file| write_feature_csv(std::io::BufWriter::new(file), split))
        .and_then(|()| fs::rename(&partial, path).map_err(io_error));
    if let Err(error) = result {
        let _ = fs::remove_file(&partial);
        return Err(error);
    }
    info!(
        path = %path.display(),
        rows = split.rows.len(),
        "feature table saved"
    );
    Ok(path.to_path_buf())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_is_a_sibling() {
        let partial = partial_path(Path::new("out/extended-patient-train.csv"));
        assert_eq!(
            partial,
            PathBuf::from("out/extended-patient-train.csv.partial")
        );
    }
}

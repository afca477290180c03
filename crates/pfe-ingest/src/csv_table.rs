//! Header-aware CSV reading shared by every extract loader.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};

use crate::error::{IngestError, Result};

/// An extract loaded as plain text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based source line of each row in `rows`.
    pub lines: Vec<u64>,
}

impl CsvTable {
    /// Index of `name`, matched exactly first and then case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        column_index(&self.headers, name)
    }
}

pub(crate) fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .or_else(|| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        })
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub(crate) fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

/// Fails with [`IngestError::FileNotFound`] before the CSV reader gets a chance
/// to report a less specific error.
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Opens `path` and returns the reader together with its normalized headers.
pub(crate) fn open_csv(path: &Path) -> Result<(Reader<File>, StringRecord)> {
    ensure_file(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, &e))?;
    let headers: StringRecord = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    reader.set_headers(headers.clone());
    Ok((reader, headers))
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let (mut reader, header_record) = open_csv(path)?;
    let headers: Vec<String> = header_record.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        if is_blank_record(&record) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
        lines.push(record.position().map_or(0, csv::Position::line));
    }
    Ok(CsvTable {
        headers,
        rows,
        lines,
    })
}

//! Named sheet container and CSV directory reader.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

use crate::error::{IngestError, Result};

/// Options for reading a workbook directory.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Field separator used by every sheet file.
    pub separator: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

/// A set of named tabular sheets loaded for one pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: BTreeMap<String, DataFrame>,
    fingerprint: Option<String>,
}

impl Workbook {
    /// Build a workbook from in-memory sheets.
    pub fn from_sheets<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = (S, DataFrame)>,
        S: Into<String>,
    {
        Self {
            sheets: sheets
                .into_iter()
                .map(|(name, df)| (name.into(), df))
                .collect(),
            fingerprint: None,
        }
    }

    /// Insert or replace a sheet, returning the previous frame for that name.
    pub fn insert(&mut self, name: impl Into<String>, df: DataFrame) -> Option<DataFrame> {
        self.fingerprint = None;
        self.sheets.insert(name.into(), df)
    }

    pub fn sheet(&self, name: &str) -> Option<&DataFrame> {
        self.sheets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Sheet names in sorted order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&str, &DataFrame)> {
        self.sheets.iter().map(|(name, df)| (name.as_str(), df))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// SHA-256 over sheet names and file bytes, set when read from disk.
    ///
    /// Identical inputs produce identical fingerprints, so hosts may use it as a
    /// memoization key.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Reads every `*.csv` file in `dir` as a sheet named after its file stem.
    ///
    /// All cells are read as text: number spelling varies by locale and is
    /// resolved later by the transform normalizers.
    pub fn from_dir(dir: &Path, options: &ReadOptions) -> Result<Self> {
        if !dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        let mut sources: BTreeMap<String, (PathBuf, Vec<u8>)> = BTreeMap::new();
        for path in list_sheet_files(dir)? {
            let name = sheet_name(&path);
            if sources.contains_key(&name) {
                return Err(IngestError::DuplicateSheet { name, path });
            }
            let bytes = std::fs::read(&path).map_err(|e| IngestError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            sources.insert(name, (path, bytes));
        }
        // Parse the same bytes that were hashed.
        let fingerprint = fingerprint_sources(
            sources
                .iter()
                .map(|(name, (_, bytes))| (name.as_str(), bytes.as_slice())),
        );
        let mut sheets = BTreeMap::new();
        for (name, (path, bytes)) in sources {
            let df = parse_sheet(&path, bytes, options)?;
            tracing::debug!(
                sheet = %name,
                rows = df.height(),
                columns = df.width(),
                "sheet loaded"
            );
            sheets.insert(name, df);
        }
        Ok(Self {
            sheets,
            fingerprint: Some(fingerprint),
        })
    }
}

/// Lists `*.csv` files (case-insensitive extension) in a directory, sorted by path.
fn list_sheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File stem in NFC form, so `posição` matches however the filesystem spelled it.
fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().nfc().collect())
        .unwrap_or_default()
}

fn parse_sheet(path: &Path, bytes: Vec<u8>, options: &ReadOptions) -> Result<DataFrame> {
    let separator = options.separator;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(separator))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// SHA-256 over `(name, bytes)` pairs, which must arrive sorted by name.
fn fingerprint_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a [u8])>) -> String {
    let mut hasher = Sha256::new();
    for (name, bytes) in sources {
        hasher.update(name.as_bytes());
        hasher.update([0u8]);
        hasher.update(bytes);
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}

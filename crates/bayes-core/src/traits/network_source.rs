use std::path::{Path, PathBuf};

use crate::errors::{BayesResult, LoadError};

/// Where a network definition document comes from.
pub trait NetworkSource {
    /// Human-readable origin, used in errors and logs.
    fn describe(&self) -> String;

    /// Read the whole definition document.
    fn read_definition(&self) -> BayesResult<String>;
}

/// A definition stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NetworkSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_definition(&self) -> BayesResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            LoadError::Io {
                path: self.describe(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// A definition already held in memory.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    label: &'a str,
    document: &'a str,
}

impl<'a> StrSource<'a> {
    pub fn new(label: &'a str, document: &'a str) -> Self {
        Self { label, document }
    }
}

impl NetworkSource for StrSource<'_> {
    fn describe(&self) -> String {
        self.label.to_string()
    }

    fn read_definition(&self) -> BayesResult<String> {
        Ok(self.document.to_string())
    }
}

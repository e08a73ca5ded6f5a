use crate::sources::{ListingSource, RawListing, SourceError};
use std::fs;
use std::path::PathBuf;

/// Reads a JSON array of raw listings, as dumped by an upstream fetcher.
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

impl ListingSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<RawListing>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

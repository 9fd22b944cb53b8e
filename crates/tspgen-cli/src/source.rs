use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use tspgen_core::error::ParseError;
use tspgen_core::parse;
use tspgen_core::parse::spec::OpenApiSpec;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to download schema from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("schema download from {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl SourceError {
    /// Download failures abort the run. A cached file that cannot be read or
    /// parsed only skips generation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SourceError::Fetch { .. } | SourceError::Status { .. } | SourceError::Write { .. }
        )
    }
}

/// Schema document backed by a local cache file, downloaded once when the
/// file is absent.
pub struct CachedSchemaSource {
    path: PathBuf,
    url: String,
}

impl CachedSchemaSource {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Download the schema into the cache file unless it already exists.
    pub fn ensure_cached(&self) -> Result<(), SourceError> {
        if self.path.exists() {
            debug!("using cached schema {}", self.path.display());
            return Ok(());
        }

        eprintln!("{} not found.", self.path.display());
        eprintln!("Downloading schema from {}...", self.url);
        let body = fetch(&self.url)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SourceError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, body).map_err(|source| SourceError::Write {
            path: self.path.clone(),
            source,
        })?;
        eprintln!("Schema saved to {}", self.path.display());
        Ok(())
    }

    /// Parse the cached document, downloading it first when needed.
    pub fn load(&self) -> Result<OpenApiSpec, SourceError> {
        self.ensure_cached()?;
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_document(&self.path, &content)
    }
}

fn fetch(url: &str) -> Result<String, SourceError> {
    let response = reqwest::blocking::get(url).map_err(|source| SourceError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| SourceError::Fetch {
        url: url.to_string(),
        source,
    })
}

/// Parse a document, choosing YAML or JSON by file extension (JSON unless
/// the extension says otherwise).
pub fn parse_document(path: &Path, content: &str) -> Result<OpenApiSpec, SourceError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed = match ext {
        "yaml" | "yml" => parse::from_yaml(content),
        _ => parse::from_json(content),
    };

    parsed.map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"openapi": "3.0.0", "info": {"title": "Riot API", "version": "1"}, "paths": {}}"#;

    #[test]
    fn test_load_cached_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("riot_openapi.json");
        fs::write(&path, MINIMAL).unwrap();

        // The URL is never contacted when the cache exists
        let source = CachedSchemaSource::new(&path, "not a url");
        let spec = source.load().unwrap();
        assert_eq!(spec.info.title, "Riot API");
    }

    #[test]
    fn test_unparsable_cache_is_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("riot_openapi.json");
        fs::write(&path, "{ truncated").unwrap();

        let err = CachedSchemaSource::new(&path, "not a url").load().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(!err.is_fatal());
        // The bad cache file is left in place
        assert!(path.exists());
    }

    #[test]
    fn test_failed_download_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("riot_openapi.json");

        let err = CachedSchemaSource::new(&path, "not a url").load().unwrap_err();
        assert!(matches!(err, SourceError::Fetch { .. }));
        assert!(err.is_fatal());
        assert!(!path.exists());
    }

    #[test]
    fn test_parse_document_by_extension() {
        let yaml = "openapi: 3.0.0\ninfo:\n  title: Riot API\n  version: '1'\n";
        let spec = parse_document(Path::new("schema.yaml"), yaml).unwrap();
        assert_eq!(spec.info.title, "Riot API");

        // Without a YAML extension the content is read as JSON
        assert!(parse_document(Path::new("schema.json"), yaml).is_err());
        assert!(parse_document(Path::new("schema"), MINIMAL).is_ok());
    }
}

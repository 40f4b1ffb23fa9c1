//! Retrieving configuration documents.
//!
//! Configuration pages normally live on the wiki and are downloaded by the
//! client's API layer. The parsers only need the text, so retrieval sits
//! behind [`RemoteFetch`]. [`FileFetcher`] reads local files and is what the
//! command line tool uses.

use crate::error::{ParserError, Result};
use tracing::debug;

/// Something that can produce the text of a configuration document.
pub trait RemoteFetch {
    /// Fetch the document at `location`.
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl RemoteFetch for FileFetcher {
    fn fetch(&self, location: &str) -> Result<String> {
        std::fs::read_to_string(location).map_err(|e| ParserError::Fetch {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Parse YAML text into a document node.
pub fn parse_yaml_document(text: &str) -> Result<serde_yaml::Value> {
    Ok(serde_yaml::from_str(text)?)
}

/// Fetch a document and parse it as YAML.
///
/// A failed fetch is returned as is; nothing is parsed in that case.
pub fn fetch_yaml<F: RemoteFetch + ?Sized>(fetcher: &F, location: &str) -> Result<serde_yaml::Value> {
    let text = fetcher.fetch(location)?;
    debug!(location, bytes = text.len(), "fetched YAML document");
    parse_yaml_document(&text)
}

//! Command implementations for huggle-parse.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the helpers they share for loading files.

mod config;
mod level;
mod month;

use crate::cli::Command;
use huggle_parser::config::WikiSite;
use huggle_parser::error::{ParserError, Result};
use huggle_parser::fetch::{FileFetcher, RemoteFetch, parse_yaml_document};
use std::path::Path;
use tracing::info;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Config(args) => config::cmd_config(args),
        Command::Level(args) => level::cmd_level(args),
        Command::Month(args) => month::cmd_month(args),
    }
}

/// Format of a configuration file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceFormat {
    Legacy,
    Yaml,
}

impl SourceFormat {
    pub(crate) fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Legacy,
        }
    }
}

/// Read a file through the fetch layer.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    let location = path.to_str().ok_or_else(|| {
        ParserError::UserError(format!("path '{}' is not valid UTF-8", path.display()))
    })?;
    FileFetcher.fetch(location)
}

/// Load a site configuration file in either format.
///
/// The site is named after the file stem.
pub(crate) fn load_site(path: &Path) -> Result<WikiSite> {
    let text = read_source(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut site = WikiSite::new(name);
    match SourceFormat::of(path) {
        SourceFormat::Yaml => site.load_yaml(&parse_yaml_document(&text)?),
        SourceFormat::Legacy => site.load_legacy(&text),
    }
    info!(site = %site.name, path = %path.display(), "loaded site configuration");
    Ok(site)
}

/// Load a site configuration when a path was given.
pub(crate) fn load_optional_site(path: Option<&Path>) -> Result<Option<WikiSite>> {
    path.map(load_site).transpose()
}

//! Configuration parsers for the Huggle anti-vandalism client.
//!
//! Huggle reads its per-wiki and per-user configuration either from the
//! legacy `key = value` text format or from YAML. This crate turns both into
//! the same typed values: scalar settings, queue filters, score rules,
//! warning tables and month names. It also computes a user's current warning
//! level from the text of their talk page.
//!
//! None of the parsing functions fail. Missing or malformed input falls back
//! to defaults and is reported through `tracing`.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fetch;
pub mod legacy;
pub mod queue;
pub mod scoring;
pub mod talk;
pub mod warnings;
pub mod yaml;

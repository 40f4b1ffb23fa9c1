//! Configuration objects populated by the parsers.
//!
//! A [`WikiSite`] owns everything that is configured per wiki: its
//! [`ProjectConfiguration`], its month names and its score rules. A
//! [`UserConfiguration`] carries a user's personal overrides. Both can be
//! loaded from the legacy text format or from YAML; every key is optional and
//! falls back to the defaults in [`types`].

mod operations;
mod project;
mod site;
pub mod types;
mod user;


pub use project::ProjectConfiguration;
pub use site::WikiSite;
pub use user::UserConfiguration;

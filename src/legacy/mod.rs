//! Parser for the legacy `key = value` configuration format.
//!
//! The legacy format predates YAML configuration pages and is still served by
//! older wikis. A document is a sequence of assignments:
//!
//! ```text
//! enable-all = true
//! ip-score = 800
//! warning-types =
//!     vandalism;Vandalism,
//!     spam;Spam,
//! ```
//!
//! Keys start at column 0. A value may continue on the following lines until
//! a blank line or the next assignment. Every lookup takes a default and
//! returns it when the key is missing or the value cannot be coerced.

mod block;
mod values;

#[cfg(test)]
mod tests;

pub use values::{
    parse_bool, parse_bool_token, parse_int, parse_list, parse_list_or, parse_trimmed_list,
    parse_value,
};

pub(crate) use block::{indentation, indented_block};

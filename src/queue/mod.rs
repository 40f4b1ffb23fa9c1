//! Queue filter definitions.
//!
//! A queue filter decides which edits enter a review queue. Filters are read
//! from the `queues` key of a configuration document in either format:
//!
//! ```text
//! queues =
//!     Default:
//!         filter-bots = exclude
//!         filter-namespaces = 0, 2
//!     Anonymous only:
//!         filter-ip = require
//! ```
//!
//! ```yaml
//! queues:
//!   Default:
//!     filter-bots: exclude
//!     filter-namespaces: [0, 2]
//!   Anonymous only:
//!     filter-ip: require
//! ```
//!
//! Both formats are first turned into the same draft representation and then
//! compiled by one compiler, so the two can never disagree on semantics.

mod compile;
mod filter;
mod source;


pub use compile::{parse_queue_list, parse_queue_list_yaml};
pub use filter::{FilterMatch, FilterProperty, MatchRule, QueueFilter};

//! Data models
//!
//! Wire types shared between the server and its clients. Field names follow
//! the JSON contract (`_id`, `type`, `del_flg`); request payloads derive
//! [`validator::Validate`] for their structural rules.

pub mod dining_table;
pub mod member;

// Re-exports
pub use dining_table::*;
pub use member::*;

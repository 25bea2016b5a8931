//! # PIPL Protocol
//!
//! Types describing the plugin records handed to the PIPL generator.
//!
//! A record list is the JSON document produced by build tooling that knows which
//! plugins a binary exports:
//!
//! ```json
//! [
//!   { "name": "MyPlugin", "entry_point": "PluginMain" },
//!   { "name": "MyPlugin Tool", "entry_point": "ToolMain", "stsp": true }
//! ]
//! ```
//!
//! Parse it with [`parse_records`] and hand the result to `pipl_core`.

pub mod record;

pub use record::{parse_records, records_schema, PluginRecord};

//! PIPL Core Library
//!
//! Builds the binary Plugin Property List (PIPL) resource a plugin host reads
//! at discovery time to learn a plugin's name and entry point.
//!
//! ## Architecture
//!
//! - [`catalog`] - Embedded table of supported property definitions
//! - [`property`] - Property sets and the setters for name, entry point and flag
//! - [`encoder`] - Binary layout, platform filtering and file output
//! - [`manifest`] - JSON description of an encoded PIPL
//! - [`builder`] - Conversion from [`pipl_protocol::PluginRecord`]s
//! - [`platform`] - Host platform and property scopes
//! - [`types`] - Error types and result alias
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pipl_core::catalog::{default_property_set, load_catalog};
//! use pipl_core::encoder::encode;
//! use pipl_core::platform::HostPlatform;
//! use pipl_core::property::{set_entry_point, set_name};
//!
//! # fn example() -> pipl_core::PiplResult<()> {
//! let catalog = load_catalog()?;
//! let mut set = default_property_set(catalog);
//! set_name(&mut set, "My Plugin")?;
//! set_entry_point(&mut set, "PluginMain")?;
//!
//! let bytes = encode(&[set], HostPlatform::current())?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod encoder;
pub mod manifest;
pub mod platform;
pub mod property;
pub mod tag;
pub mod types;

// Re-export the main types for easier usage
pub use platform::HostPlatform;
pub use types::{PiplError, PiplResult};

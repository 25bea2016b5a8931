//! Plugin records supplied by the build tooling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One plugin exported by a binary.
///
/// Each record becomes one PIPL object. `name` and `entry_point` are required
/// in the JSON document; an empty string is accepted and leaves the
/// corresponding property unset, matching how existing build scripts emit
/// placeholder entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PluginRecord {
    /// Display name of the plugin as shown by the host.
    pub name: String,

    /// Exported symbol the host calls to start the plugin.
    pub entry_point: String,

    /// Sets the "super-top-secret" flag when `true`.
    #[serde(default)]
    pub stsp: bool,
}

impl PluginRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, entry_point: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_point: entry_point.into(),
            stsp: false,
        }
    }

    #[must_use]
    pub fn with_stsp(mut self, stsp: bool) -> Self {
        self.stsp = stsp;
        self
    }
}

/// Parse a JSON array of plugin records.
pub fn parse_records(json: &str) -> Result<Vec<PluginRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// JSON schema describing the record list accepted by [`parse_records`].
#[must_use]
pub fn records_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Vec<PluginRecord>);
    schema.to_value()
}

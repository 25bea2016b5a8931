pub mod build;
pub mod catalog;
pub mod manifest;
pub mod schema;

use std::fs;

use anyhow::{bail, Context, Result};
use pipl_core::builder::build_property_sets;
use pipl_core::catalog::load_catalog;
use pipl_core::property::PropertySet;
use pipl_protocol::{parse_records, PluginRecord};
use tracing::debug;

use crate::InputArgs;

/// Read the record list from the inline argument or the input file.
pub fn load_records(input: &InputArgs) -> Result<Vec<PluginRecord>> {
    let json = match (&input.input, &input.input_file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        (None, None) => bail!("No plugin records supplied"),
    };

    let records = parse_records(&json).context("Failed to parse plugin records")?;
    if records.is_empty() {
        bail!("No plugin records supplied");
    }
    debug!(records = records.len(), "Parsed plugin records");
    Ok(records)
}

/// Load records and turn them into property sets against the embedded catalog.
pub fn load_property_sets(input: &InputArgs) -> Result<Vec<PropertySet>> {
    let records = load_records(input)?;
    let catalog = load_catalog().context("Failed to load property catalog")?;
    let sets = build_property_sets(catalog, &records)?;
    Ok(sets)
}

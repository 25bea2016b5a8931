//! Build property sets from plugin records

use pipl_protocol::PluginRecord;
use tracing::debug;

use crate::catalog::{default_property_set, Catalog};
use crate::property::{set_entry_point, set_name, set_optional_flag, PropertySet};
use crate::types::ValueError;

/// Value written for the super-top-secret flag when a record enables it.
pub const STSP_ENABLED: u32 = 1;

/// Turn one record into a property set.
///
/// Empty names and entry points leave the property unset.
pub fn build_property_set(catalog: &Catalog, record: &PluginRecord) -> Result<PropertySet, ValueError> {
    let mut set = default_property_set(catalog);

    if !record.name.is_empty() {
        set_name(&mut set, &record.name)?;
    }
    if !record.entry_point.is_empty() {
        set_entry_point(&mut set, &record.entry_point)?;
    }
    if record.stsp {
        set_optional_flag(&mut set, STSP_ENABLED)?;
    }

    Ok(set)
}

/// Turn a record list into property sets, one per record, in input order.
pub fn build_property_sets(
    catalog: &Catalog,
    records: &[PluginRecord],
) -> Result<Vec<PropertySet>, ValueError> {
    debug!(records = records.len(), "Building property sets");
    records
        .iter()
        .map(|record| build_property_set(catalog, record))
        .collect()
}

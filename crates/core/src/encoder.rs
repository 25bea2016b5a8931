//! Binary PIPL encoder
//!
//! Layout, big-endian throughout:
//!
//! ```text
//! PiplFile   ::= u32(object_count) PiplObject*
//! PiplObject ::= u32(property_count) Property*
//! Property   ::= vendor[4] key[4] u32(id) u32(value_len) value[value_len]
//! ```
//!
//! Only properties with a value that apply to the target platform are written,
//! in catalog order. String values are NUL-padded to a multiple of four bytes.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::platform::HostPlatform;
use crate::property::{PropertySet, PropertyValue};
use crate::tag::FourCharCode;
use crate::types::{EncodeError, PiplResult, MAX_NUMERIC_VALUE};

/// A property that survived platform filtering and range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProperty<'a> {
    pub vendor: FourCharCode,
    pub key: FourCharCode,
    pub id: u32,
    pub value: &'a PropertyValue,
}

/// Number of NUL bytes needed to align `len` to four bytes.
#[must_use]
pub const fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Select the properties of `set` that are written for `host_platform`.
///
/// `index` is the position of the set in its file and only used for error
/// reporting.
pub fn resolve_set(
    index: usize,
    set: &PropertySet,
    host_platform: HostPlatform,
) -> Result<Vec<ResolvedProperty<'_>>, EncodeError> {
    let mut resolved = Vec::new();
    for entry in set.entries() {
        let Some(value) = &entry.value else {
            continue;
        };
        if !entry.definition.scope.applies_to(host_platform) {
            continue;
        }

        check_numeric(entry.key(), entry.id)?;
        if let PropertyValue::Integer(n) = value {
            check_numeric(entry.key(), *n)?;
        }

        resolved.push(ResolvedProperty {
            vendor: entry.definition.vendor,
            key: entry.key(),
            id: entry.id,
            value,
        });
    }

    if resolved.is_empty() {
        return Err(EncodeError::EmptyPropertySet { index });
    }
    Ok(resolved)
}

fn check_numeric(key: FourCharCode, value: u32) -> Result<(), EncodeError> {
    if value > MAX_NUMERIC_VALUE {
        return Err(EncodeError::ValueTooLarge {
            key,
            value,
            max: MAX_NUMERIC_VALUE,
        });
    }
    Ok(())
}

/// Encode property sets into a complete PIPL file image.
pub fn encode(sets: &[PropertySet], host_platform: HostPlatform) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    put_len(&mut buf, "Object count", sets.len())?;

    for (index, set) in sets.iter().enumerate() {
        let properties = resolve_set(index, set, host_platform)?;
        debug!(
            index,
            properties = properties.len(),
            platform = %host_platform,
            "Encoding property set"
        );

        put_len(&mut buf, "Property count", properties.len())?;
        for property in &properties {
            encode_property(&mut buf, property)?;
        }
    }

    Ok(buf)
}

fn encode_property(buf: &mut Vec<u8>, property: &ResolvedProperty<'_>) -> Result<(), EncodeError> {
    buf.extend_from_slice(property.vendor.as_bytes());
    buf.extend_from_slice(property.key.as_bytes());
    buf.extend_from_slice(&property.id.to_be_bytes());

    match property.value {
        PropertyValue::Integer(n) => {
            put_len(buf, "Value length", 4)?;
            buf.extend_from_slice(&n.to_be_bytes());
        }
        PropertyValue::Bytes(bytes) => {
            let padding = padding_for(bytes.len());
            put_len(buf, "Value length", bytes.len() + padding)?;
            buf.extend_from_slice(bytes);
            buf.resize(buf.len() + padding, 0);
        }
    }
    Ok(())
}

fn put_len(buf: &mut Vec<u8>, what: &'static str, len: usize) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { what, len })?;
    buf.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

/// Encode `sets` and write them to `path`.
///
/// Nothing is written if encoding fails. If writing fails part way, the partial
/// file is removed before the error is returned.
pub fn write_pipl_file(
    path: &Path,
    sets: &[PropertySet],
    host_platform: HostPlatform,
) -> PiplResult<()> {
    let bytes = encode(sets, host_platform)?;

    let result = File::create(path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.flush()
    });

    if let Err(err) = result {
        if path.exists() {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "Failed to remove partially written PIPL"
                );
            }
        }
        return Err(err.into());
    }

    info!(
        path = %path.display(),
        objects = sets.len(),
        bytes = bytes.len(),
        "Wrote PIPL"
    );
    Ok(())
}

//! JSON view of what the encoder writes
//!
//! The manifest lists, per object, the properties that survive platform
//! filtering with their decoded values. It is meant for inspecting build output
//! and for diffing PIPLs in review; the host loader never reads it.

use serde::Serialize;

use crate::encoder::{padding_for, resolve_set};
use crate::platform::HostPlatform;
use crate::property::{PropertySet, PropertyValue};
use crate::tag::FourCharCode;
use crate::types::{EncodeError, PiplResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ManifestValue {
    Integer(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyManifest {
    pub vendor: FourCharCode,
    pub key: FourCharCode,
    pub id: u32,
    /// Encoded length in bytes, including alignment padding.
    pub length: usize,
    pub value: ManifestValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectManifest {
    pub properties: Vec<PropertyManifest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiplManifest {
    pub platform: HostPlatform,
    pub objects: Vec<ObjectManifest>,
}

/// Describe the properties `encode` would write for `sets`.
pub fn manifest(sets: &[PropertySet], host_platform: HostPlatform) -> Result<PiplManifest, EncodeError> {
    let objects = sets
        .iter()
        .enumerate()
        .map(|(index, set)| {
            let properties = resolve_set(index, set, host_platform)?
                .into_iter()
                .map(|property| {
                    let (length, value) = match property.value {
                        PropertyValue::Integer(n) => (4, ManifestValue::Integer(*n)),
                        PropertyValue::Bytes(bytes) => (
                            bytes.len() + padding_for(bytes.len()),
                            ManifestValue::Text(String::from_utf8_lossy(bytes).into_owned()),
                        ),
                    };
                    PropertyManifest {
                        vendor: property.vendor,
                        key: property.key,
                        id: property.id,
                        length,
                        value,
                    }
                })
                .collect();
            Ok(ObjectManifest { properties })
        })
        .collect::<Result<Vec<_>, EncodeError>>()?;

    Ok(PiplManifest {
        platform: host_platform,
        objects,
    })
}

/// Pretty-printed JSON form of [`manifest`].
pub fn manifest_json(sets: &[PropertySet], host_platform: HostPlatform) -> PiplResult<String> {
    let manifest = manifest(sets, host_platform)?;
    Ok(serde_json::to_string_pretty(&manifest)?)
}

//! Property catalog
//!
//! The catalog is the table of every property the generator knows how to write:
//! its vendor tag, key code, value kind, platform scope and default id. It is
//! parsed from a JSON template compiled into the binary and shared read-only for
//! the lifetime of the process.

use std::collections::HashSet;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::platform::PlatformScope;
use crate::property::PropertySet;
use crate::tag::FourCharCode;
use crate::types::{CatalogLoadError, MAX_NUMERIC_VALUE};

const CATALOG_TEMPLATE: &str = include_str!("../assets/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    Integer,
    String,
}

impl ValueKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

/// The logical field a property fills in.
///
/// Several keys can share a field when each one targets a different platform,
/// e.g. the Windows and macOS entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PropertyField {
    PluginName,
    EntryPoint,
    SuperTopSecret,
}

impl PropertyField {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PluginName => "plugin name",
            Self::EntryPoint => "entry point",
            Self::SuperTopSecret => "super-top-secret flag",
        }
    }
}

/// One entry of the catalog template as it appears in JSON.
#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefinitionTemplate {
    pub vendor: String,
    pub key: String,
    pub kind: ValueKind,
    pub scope: PlatformScope,
    pub field: PropertyField,
    pub id: Option<u32>,
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogTemplate {
    pub properties: Vec<DefinitionTemplate>,
}

/// A supported property, immutable once the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub vendor: FourCharCode,
    pub key: FourCharCode,
    pub kind: ValueKind,
    pub scope: PlatformScope,
    pub field: PropertyField,
    /// Numeric id written ahead of the value, 0 unless the template says otherwise.
    pub id: u32,
}

impl TryFrom<DefinitionTemplate> for PropertyDefinition {
    type Error = CatalogLoadError;

    fn try_from(template: DefinitionTemplate) -> Result<Self, Self::Error> {
        let key: FourCharCode = template.key.parse()?;
        let id = template.id.unwrap_or(0);
        if id > MAX_NUMERIC_VALUE {
            return Err(CatalogLoadError::IdOutOfRange {
                key,
                id,
                max: MAX_NUMERIC_VALUE,
            });
        }

        Ok(Self {
            vendor: template.vendor.parse()?,
            key,
            kind: template.kind,
            scope: template.scope,
            field: template.field,
            id,
        })
    }
}

/// Ordered, read-only table of property definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<PropertyDefinition>,
}

impl Catalog {
    /// Parse a catalog from a JSON template.
    ///
    /// Definition order in the template is the order properties are encoded in.
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let template: CatalogTemplate = serde_json::from_str(json)?;
        if template.properties.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let mut seen = HashSet::new();
        let mut definitions = Vec::with_capacity(template.properties.len());
        for entry in template.properties {
            let definition = PropertyDefinition::try_from(entry)?;
            if !seen.insert(definition.key) {
                return Err(CatalogLoadError::DuplicateKey(definition.key));
            }
            definitions.push(definition);
        }

        Ok(Self { definitions })
    }

    /// All definitions in catalog order.
    #[must_use]
    pub fn definitions(&self) -> &[PropertyDefinition] {
        &self.definitions
    }

    /// Look up the definition for a key code.
    #[must_use]
    pub fn get(&self, key: FourCharCode) -> Option<&PropertyDefinition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Definitions filling in `field`, in catalog order.
    pub fn fields(&self, field: PropertyField) -> impl Iterator<Item = &PropertyDefinition> {
        self.definitions.iter().filter(move |d| d.field == field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Load the embedded catalog.
///
/// The template is parsed on the first call; every later call returns the same
/// shared instance, which lives until the process exits.
pub fn load_catalog() -> Result<&'static Catalog, CatalogLoadError> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }

    let catalog = Catalog::from_json(CATALOG_TEMPLATE)?;
    debug!(definitions = catalog.len(), "Loaded property catalog");
    Ok(CATALOG.get_or_init(|| catalog))
}

/// A property set holding every catalog definition with its default id and no values.
#[must_use]
pub fn default_property_set(catalog: &Catalog) -> PropertySet {
    PropertySet::from_catalog(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> FourCharCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = load_catalog().unwrap();
        let keys: Vec<String> = catalog
            .definitions()
            .iter()
            .map(|d| d.key.to_string())
            .collect();
        assert_eq!(keys, vec!["pinm", "wx86", "mi32", "StsP"]);
        assert!(catalog
            .definitions()
            .iter()
            .all(|d| d.vendor == code("ADBE") && d.id == 0));
    }

    #[test]
    fn test_load_catalog_returns_shared_instance() {
        let first = load_catalog().unwrap();
        let second = load_catalog().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_entry_point_field_has_both_platform_variants() {
        let catalog = load_catalog().unwrap();
        let scopes: Vec<PlatformScope> = catalog
            .fields(PropertyField::EntryPoint)
            .map(|d| d.scope)
            .collect();
        assert_eq!(
            scopes,
            vec![PlatformScope::WindowsOnly, PlatformScope::MacOnly]
        );
    }

    #[test]
    fn test_get_definition() {
        let catalog = load_catalog().unwrap();
        let stsp = catalog.get(code("StsP")).unwrap();
        assert_eq!(stsp.kind, ValueKind::Integer);
        assert_eq!(stsp.field, PropertyField::SuperTopSecret);
        assert!(catalog.get(code("kind")).is_none());
    }

    #[test]
    fn test_from_json_custom_id() {
        let catalog = Catalog::from_json(
            r#"{"properties": [
                {"vendor": "ADBE", "key": "pinm", "kind": "string", "scope": "universal", "field": "pluginName", "id": 7}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.definitions()[0].id, 7);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_table() {
        let err = Catalog::from_json(r#"{"properties": []}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Empty));
    }

    #[test]
    fn test_from_json_rejects_bad_tag() {
        let err = Catalog::from_json(
            r#"{"properties": [
                {"vendor": "ADOBE", "key": "pinm", "kind": "string", "scope": "universal", "field": "pluginName"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidTag(tag) if tag == "ADOBE"));
    }

    #[test]
    fn test_from_json_rejects_duplicate_keys() {
        let err = Catalog::from_json(
            r#"{"properties": [
                {"vendor": "ADBE", "key": "pinm", "kind": "string", "scope": "universal", "field": "pluginName"},
                {"vendor": "ADBE", "key": "pinm", "kind": "string", "scope": "universal", "field": "pluginName"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateKey(key) if key == code("pinm")));
    }

    #[test]
    fn test_from_json_rejects_large_default_id() {
        let err = Catalog::from_json(
            r#"{"properties": [
                {"vendor": "ADBE", "key": "StsP", "kind": "integer", "scope": "universal", "field": "superTopSecret", "id": 65536}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::IdOutOfRange { id: 65536, .. }));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = Catalog::from_json(
            r#"{"properties": [
                {"vendor": "ADBE", "key": "pinm", "kind": "string", "scope": "universal", "field": "pluginName", "value": "x"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }

    #[test]
    fn test_default_property_set_has_no_values() {
        let catalog = load_catalog().unwrap();
        let set = default_property_set(catalog);
        assert_eq!(set.entries().len(), catalog.len());
        assert!(set.entries().iter().all(|e| e.value.is_none()));
    }
}

//! Property sets
//!
//! A [`PropertySet`] is one PIPL object under construction. It starts from the
//! catalog defaults with every value absent, and callers fill in the fields that
//! matter through [`set_name`], [`set_entry_point`] and [`set_optional_flag`].

use crate::catalog::{Catalog, PropertyDefinition, PropertyField, ValueKind};
use crate::tag::FourCharCode;
use crate::types::{ValueError, MAX_NUMERIC_VALUE};

/// Bytes appended to every entry point before alignment padding.
///
/// The host loader expects entry point symbols to be double-terminated.
pub const ENTRY_POINT_TERMINATOR: [u8; 4] = [0; 4];

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Integer(u32),
    Bytes(Vec<u8>),
}

impl PropertyValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Bytes(_) => ValueKind::String,
        }
    }
}

/// A catalog definition paired with its current value and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    pub definition: PropertyDefinition,
    pub value: Option<PropertyValue>,
    pub id: u32,
}

impl PropertyEntry {
    #[must_use]
    pub const fn key(&self) -> FourCharCode {
        self.definition.key
    }
}

/// One PIPL object: every catalog key, in catalog order, with an optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySet {
    entries: Vec<PropertyEntry>,
}

impl PropertySet {
    /// Seed a set from the catalog with default ids and no values.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let entries = catalog
            .definitions()
            .iter()
            .map(|definition| PropertyEntry {
                definition: *definition,
                value: None,
                id: definition.id,
            })
            .collect();
        Self { entries }
    }

    /// Entries in catalog order, including absent ones.
    #[must_use]
    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: FourCharCode) -> Option<&PropertyEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Assign a value to a single key.
    ///
    /// The key must exist and the value kind must match its definition. Integer
    /// ranges are not checked here; [`crate::encoder::encode`] rejects oversized
    /// values.
    pub fn set_value(&mut self, key: FourCharCode, value: PropertyValue) -> Result<(), ValueError> {
        let entry = self.entry_mut(key)?;
        check_kind(&entry.definition, &value)?;
        entry.value = Some(value);
        Ok(())
    }

    /// Override the numeric id written for a key.
    pub fn set_id(&mut self, key: FourCharCode, id: u32) -> Result<(), ValueError> {
        self.entry_mut(key)?.id = id;
        Ok(())
    }

    /// Remove the value for a key so it is no longer written.
    pub fn clear_value(&mut self, key: FourCharCode) -> Result<(), ValueError> {
        self.entry_mut(key)?.value = None;
        Ok(())
    }

    fn entry_mut(&mut self, key: FourCharCode) -> Result<&mut PropertyEntry, ValueError> {
        self.entries
            .iter_mut()
            .find(|e| e.key() == key)
            .ok_or(ValueError::UnknownKey(key))
    }

    /// Assign `value` to every key belonging to `field`.
    fn set_field(&mut self, field: PropertyField, value: PropertyValue) -> Result<(), ValueError> {
        let mut matched = false;
        for entry in self.entries.iter().filter(|e| e.definition.field == field) {
            check_kind(&entry.definition, &value)?;
            matched = true;
        }
        if !matched {
            return Err(ValueError::MissingField(field.name()));
        }

        for entry in self
            .entries
            .iter_mut()
            .filter(|e| e.definition.field == field)
        {
            entry.value = Some(value.clone());
        }
        Ok(())
    }

    fn field_keys(&self, field: PropertyField) -> impl Iterator<Item = FourCharCode> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.definition.field == field)
            .map(PropertyEntry::key)
    }
}

fn check_kind(definition: &PropertyDefinition, value: &PropertyValue) -> Result<(), ValueError> {
    if definition.kind == value.kind() {
        Ok(())
    } else {
        Err(ValueError::KindMismatch {
            key: definition.key,
            expected: definition.kind.name(),
        })
    }
}

/// Set the plugin name.
pub fn set_name(set: &mut PropertySet, text: impl AsRef<[u8]>) -> Result<(), ValueError> {
    set.set_field(
        PropertyField::PluginName,
        PropertyValue::Bytes(text.as_ref().to_vec()),
    )
}

/// Set the entry point symbol for every platform variant.
///
/// Four NUL bytes are appended to the symbol; alignment padding is applied on
/// top of that when the set is encoded.
pub fn set_entry_point(set: &mut PropertySet, text: impl AsRef<[u8]>) -> Result<(), ValueError> {
    let text = text.as_ref();
    let mut bytes = Vec::with_capacity(text.len() + ENTRY_POINT_TERMINATOR.len());
    bytes.extend_from_slice(text);
    bytes.extend_from_slice(&ENTRY_POINT_TERMINATOR);
    set.set_field(PropertyField::EntryPoint, PropertyValue::Bytes(bytes))
}

/// Set the super-top-secret flag.
///
/// Values above `0xFFFF` are rejected with [`ValueError::OutOfRange`].
pub fn set_optional_flag(set: &mut PropertySet, value: u32) -> Result<(), ValueError> {
    if value > MAX_NUMERIC_VALUE {
        // Report against the first key of the field so the caller sees a concrete key
        let key = set
            .field_keys(PropertyField::SuperTopSecret)
            .next()
            .ok_or(ValueError::MissingField(PropertyField::SuperTopSecret.name()))?;
        return Err(ValueError::OutOfRange {
            key,
            value,
            max: MAX_NUMERIC_VALUE,
        });
    }
    set.set_field(PropertyField::SuperTopSecret, PropertyValue::Integer(value))
}

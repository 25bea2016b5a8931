//! Four-character codes used for vendor tags and property keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::CatalogLoadError;

/// A four-byte code such as `ADBE` or `pinm`, written verbatim into the PIPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FourCharCode([u8; 4]);

impl FourCharCode {
    /// Build a code from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl FromStr for FourCharCode {
    type Err = CatalogLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| CatalogLoadError::InvalidTag(s.to_string()))?;
        if !bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return Err(CatalogLoadError::InvalidTag(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for FourCharCode {
    type Error = CatalogLoadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FourCharCode> for String {
    fn from(code: FourCharCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for FourCharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Codes are validated as ASCII on parse; raw constructors may not be.
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

//! Generic parameter declarations.

use serde::{Deserialize, Serialize};

/// A generic parameter declared on an entity, e.g. `WIDTH : integer := 8`.
///
/// Only generics with an initializer are ever extracted, so the default value
/// is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericParam {
    /// The generic name, with its source casing.
    pub name: String,
    /// The type mark (e.g. `integer`, `natural`).
    #[serde(rename = "type")]
    pub ty: String,
    /// The default value expression, trimmed of surrounding whitespace.
    #[serde(rename = "default")]
    pub default_value: String,
}

impl GenericParam {
    /// Creates a generic parameter.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value: default_value.into(),
        }
    }
}

use super::*;
use sapling_core::value::Type;

use serde::Deserialize;

/// A property declaration, before it is assigned to a registered model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    /// The Rust-side property name
    pub name: String,

    #[serde(rename = "type")]
    pub ty: Type,

    /// True if the property can be null (`None` in Rust).
    #[serde(default)]
    pub nullable: bool,

    #[serde(flatten)]
    pub mapping: Mapping,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type, mapping: impl Into<Mapping>) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            mapping: mapping.into(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub(crate) fn into_app(self, id: app::PropertyId) -> app::Property {
        app::Property {
            id,
            name: self.name,
            ty: self.ty,
            nullable: self.nullable,
            mapping: self.mapping,
        }
    }
}

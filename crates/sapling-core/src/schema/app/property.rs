use super::{Mapping, ModelId};
use crate::value::Type;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Property {
    /// Uniquely identifies the property within the containing model.
    pub id: PropertyId,

    /// The Rust-side property name
    pub name: String,

    /// The declared property type
    pub ty: Type,

    /// True if the property can be null (`None` in Rust).
    pub nullable: bool,

    /// How the property is bound to the item
    pub mapping: Mapping,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub model: ModelId,
    pub index: usize,
}

impl Property {
    /// The item field backing this property, if it is field-mapped.
    pub fn field_name(&self) -> Option<&str> {
        self.mapping.as_field().map(|field| &field.field_name[..])
    }

    pub fn is_read_only(&self) -> bool {
        self.mapping.as_field().is_some_and(|field| field.read_only)
    }

    /// Returns a property describing a single element of this list property.
    ///
    /// Element properties share the id and mapping of their list so that
    /// handlers see the same field settings. Returns `None` when the property
    /// is not a list.
    pub fn element(&self) -> Option<Property> {
        let ty = self.ty.element()?.clone();
        Some(Property {
            id: self.id,
            name: self.name.clone(),
            ty,
            nullable: false,
            mapping: self.mapping.clone(),
        })
    }
}

impl From<&Property> for PropertyId {
    fn from(value: &Property) -> Self {
        value.id
    }
}

impl From<&PropertyId> for PropertyId {
    fn from(value: &PropertyId) -> Self {
        *value
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PropertyId({}/{})", self.model.0, self.index)
    }
}

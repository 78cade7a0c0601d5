use super::{InfoKind, Mapping, Property, PropertyId};

use std::{any::TypeId, fmt};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// The Rust type the model is mapped to
    pub type_id: TypeId,

    /// Template used when creating items for this model. Models without a
    /// template can be read but not created.
    pub template: Option<Uuid>,

    /// Mapped properties, in declaration order
    pub properties: Vec<Property>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn property(&self, id: impl Into<PropertyId>) -> &Property {
        let id = id.into();
        assert_eq!(self.id, id.model);
        &self.properties[id.index]
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The property mapped to the item identifier, if any.
    pub fn id_property(&self) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.mapping.is_id())
    }

    /// The first property exposing the given structural info.
    pub fn info_property(&self, kind: InfoKind) -> Option<&Property> {
        self.properties.iter().find(|property| {
            property
                .mapping
                .as_info()
                .is_some_and(|info| info.kind == kind)
        })
    }

    pub fn field_properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties
            .iter()
            .filter(|property| matches!(property.mapping, Mapping::Field(_)))
    }

    /// Field-backed properties that are written back to items.
    pub fn writable_properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.field_properties().filter(|property| {
            property
                .mapping
                .as_field()
                .is_some_and(|field| !field.read_only)
        })
    }
}

impl ModelId {
    /// Create a `PropertyId` representing the current model's property at index
    /// `index`.
    pub const fn property(self, index: usize) -> PropertyId {
        PropertyId { model: self, index }
    }
}

impl From<&ModelId> for ModelId {
    fn from(src: &ModelId) -> ModelId {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}

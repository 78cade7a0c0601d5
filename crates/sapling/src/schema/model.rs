use super::*;
use sapling_core::value::{Primitive, Type};

use serde::Deserialize;
use uuid::Uuid;

/// A model declaration: how one Rust type maps onto items.
///
/// Declarations are assembled with the builder methods below, or read from a
/// [`MappingFile`]. They are checked when the mapper is built.
///
/// ```
/// use sapling::schema::{self, InfoKind};
/// use uuid::Uuid;
///
/// let article = schema::Model::new("Article")
///     .template(Uuid::nil())
///     .id::<Uuid>("id")
///     .field::<String>("title", "Title")
///     .info::<String>("name", InfoKind::Name);
///
/// assert_eq!(article.properties.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// Template used when creating items for this model
    #[serde(default)]
    pub template: Option<Uuid>,

    #[serde(default, rename = "property")]
    pub properties: Vec<Property>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
            properties: vec![],
        }
    }

    pub fn template(mut self, template: Uuid) -> Self {
        self.template = Some(template);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Maps `name` to the item identifier.
    pub fn id<T: Primitive>(self, name: &str) -> Self {
        self.primitive::<T>(name, Mapping::Id)
    }

    /// Maps `name` to the item field `field_name`.
    pub fn field<T: Primitive>(self, name: &str, field_name: &str) -> Self {
        self.primitive::<T>(name, Mapping::field(field_name))
    }

    /// Maps `name` to a field with extra options (read-only, handler setting).
    pub fn field_with<T: Primitive>(self, name: &str, field: FieldMapping) -> Self {
        self.primitive::<T>(name, Mapping::Field(field))
    }

    /// Maps `name` to structural information about the item.
    pub fn info<T: Primitive>(self, name: &str, kind: InfoKind) -> Self {
        self.primitive::<T>(name, Mapping::info(kind))
    }

    /// Maps `name` to the item's URL.
    pub fn url(self, name: &str, options: UrlOptions) -> Self {
        self.primitive::<String>(name, Mapping::Info(InfoMapping::url(options)))
    }

    /// Maps `name` to the children of the item.
    pub fn children<M: crate::Model>(self, name: &str) -> Self {
        self.property(Property::new(
            name,
            Type::list(Type::model(M::NAME)),
            Mapping::Children,
        ))
    }

    /// Maps `name` to the parent of the item.
    pub fn parent<M: crate::Model>(self, name: &str) -> Self {
        self.property(Property::new(name, Type::model(M::NAME), Mapping::Parent).nullable(true))
    }

    /// Maps `name` to the items matching `query`.
    pub fn query<M: crate::Model>(self, name: &str, query: &str) -> Self {
        self.property(Property::new(
            name,
            Type::list(Type::model(M::NAME)),
            Mapping::query(query),
        ))
    }

    /// Maps `name` to the items matching `query`, evaluated from the item's
    /// own path.
    pub fn relative_query<M: crate::Model>(self, name: &str, query: &str) -> Self {
        self.property(Property::new(
            name,
            Type::list(Type::model(M::NAME)),
            Mapping::relative_query(query),
        ))
    }

    /// Maps `name` to another item whose identifier is stored in `field_name`.
    pub fn link<M: crate::Model>(self, name: &str, field_name: &str) -> Self {
        self.property(
            Property::new(name, Type::model(M::NAME), Mapping::field(field_name)).nullable(true),
        )
    }

    /// Maps `name` to the items whose identifiers are stored, `|`-separated,
    /// in `field_name`.
    pub fn links<M: crate::Model>(self, name: &str, field_name: &str) -> Self {
        self.property(Property::new(
            name,
            Type::list(Type::model(M::NAME)),
            Mapping::field(field_name),
        ))
    }

    fn primitive<T: Primitive>(self, name: &str, mapping: Mapping) -> Self {
        self.property(Property::new(name, T::ty(), mapping).nullable(T::nullable()))
    }

    pub(crate) fn into_app(self, id: app::ModelId, type_id: std::any::TypeId) -> app::Model {
        let properties = self
            .properties
            .into_iter()
            .enumerate()
            .map(|(index, property)| property.into_app(id.property(index)))
            .collect();

        app::Model {
            id,
            name: self.name,
            type_id,
            template: self.template,
            properties,
        }
    }
}

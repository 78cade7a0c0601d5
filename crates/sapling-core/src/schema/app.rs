//! Model-level mapping configuration

mod mapping;
pub use mapping::{
    FieldMapping, InfoKind, InfoMapping, LanguageEmbedding, Mapping, QueryMapping, UrlOptions,
};

mod model;
pub use model::{Model, ModelId};

mod property;
pub use property::{Property, PropertyId};

mod schema;
pub use schema::Schema;

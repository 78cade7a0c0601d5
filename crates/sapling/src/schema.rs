mod mapping_file;
pub use mapping_file::MappingFile;

mod model;
pub use model::Model;

mod property;
pub use property::Property;

pub use sapling_core::schema::{
    app::{
        self, FieldMapping, InfoKind, InfoMapping, LanguageEmbedding, Mapping, QueryMapping,
        UrlOptions,
    },
    Schema,
};

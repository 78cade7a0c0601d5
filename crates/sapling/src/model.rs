use crate::{schema, Record, Result};
use sapling_core::value::ValueRecord;

/// A Rust type mapped to repository items.
pub trait Model: Sized + 'static {
    /// Name of the model. Relationship properties and mapping files refer to
    /// the model by this name.
    const NAME: &'static str;

    /// Declares how the model's properties map onto an item.
    ///
    /// A declaration for the same model name in a
    /// [`MappingFile`](schema::MappingFile) replaces this one.
    fn schema() -> schema::Model {
        schema::Model::new(Self::NAME)
    }

    /// Load an instance of the model from the values read off one item.
    fn load(record: Record) -> Result<Self>;

    /// Returns the model's property values keyed by property name.
    ///
    /// Used to write field values to items and to find the identifier of an
    /// instance. Properties that are not returned are left untouched.
    fn store(&self) -> ValueRecord;
}

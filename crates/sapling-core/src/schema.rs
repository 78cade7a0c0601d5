pub mod app;

mod builder;
pub use builder::Builder;

pub mod conversion;
use conversion::Conversion;

mod verify;

use crate::{convert::Handler, Error, Result};
use app::{Model, PropertyId};

use std::{any::TypeId, collections::HashMap, sync::Arc};

/// The mapping configuration for every registered model.
///
/// Built once by [`Builder`] and read-only afterwards.
#[derive(Debug)]
pub struct Schema {
    /// Model and property metadata
    pub app: app::Schema,

    /// The handler resolved for each field-backed property
    pub conversion: Conversion,

    /// Models whose configuration failed to build, keyed by Rust type
    rejected: HashMap<TypeId, Error>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the configuration for the Rust type `type_id`.
    ///
    /// Fails with the recorded configuration error if the type was rejected
    /// while building, or with a configuration-not-found error if it was never
    /// registered. `type_name` is only used for the error message.
    pub fn model_for(&self, type_id: TypeId, type_name: &str) -> Result<&Model> {
        if let Some(model) = self.app.model_by_type(type_id) {
            return Ok(model);
        }

        match self.rejected.get(&type_id) {
            Some(err) => Err(err.clone()),
            None => Err(Error::configuration_not_found(type_name)),
        }
    }

    /// Returns the handler resolved for a field-backed property.
    pub fn handler(&self, id: PropertyId) -> Option<&Arc<dyn Handler>> {
        self.conversion.handler(id)
    }

    /// Iterates the configuration errors of rejected models.
    pub fn rejected(&self) -> impl Iterator<Item = &Error> + '_ {
        self.rejected.values()
    }
}

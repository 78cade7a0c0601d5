//! Handlers resolved for the field-backed properties of each model

use super::app::{ModelId, PropertyId};
use crate::convert::Handler;

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Conversion {
    pub models: IndexMap<ModelId, ModelConversion>,
}

#[derive(Debug, Default)]
pub struct ModelConversion {
    /// Handlers keyed by property index
    pub handlers: IndexMap<usize, Arc<dyn Handler>>,
}

impl Conversion {
    pub fn model(&self, id: impl Into<ModelId>) -> Option<&ModelConversion> {
        self.models.get(&id.into())
    }

    pub fn handler(&self, id: impl Into<PropertyId>) -> Option<&Arc<dyn Handler>> {
        let id = id.into();
        self.models.get(&id.model)?.handlers.get(&id.index)
    }
}

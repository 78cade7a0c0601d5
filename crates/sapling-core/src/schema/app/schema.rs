use super::{Model, ModelId};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap};

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,

    /// Rust types resolving to each model. Besides the model's own type this
    /// holds aliases such as lazy proxies of the model.
    types: HashMap<TypeId, ModelId>,
}

impl Schema {
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.values().find(|model| model.name == name)
    }

    pub fn model_by_type(&self, type_id: TypeId) -> Option<&Model> {
        let id = self.types.get(&type_id)?;
        self.models.get(id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.model_by_name(name).is_some()
    }

    pub(crate) fn insert(&mut self, model: Model) {
        self.types.insert(model.type_id, model.id);
        self.models.insert(model.id, model);
    }

    pub(crate) fn alias(&mut self, type_id: TypeId, model: ModelId) {
        self.types.insert(type_id, model);
    }

    /// Removes a model and every type alias pointing at it.
    pub(crate) fn remove(&mut self, id: ModelId) -> Option<Model> {
        self.types.retain(|_, target| *target != id);
        self.models.shift_remove(&id)
    }

    /// Rust types registered for `id`, including aliases.
    pub(crate) fn type_ids(&self, id: ModelId) -> Vec<TypeId> {
        self.types
            .iter()
            .filter(|(_, target)| **target == id)
            .map(|(type_id, _)| *type_id)
            .collect()
    }
}

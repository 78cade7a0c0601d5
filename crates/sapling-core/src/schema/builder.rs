use super::{
    app::{self, Model, ModelId},
    conversion::{Conversion, ModelConversion},
    verify::Verify,
    Schema,
};
use crate::{convert::Registry, Error, Result};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap};

/// Assembles a [`Schema`] from model declarations.
///
/// A model whose configuration is inconsistent is rejected on its own: the
/// remaining models still build, and the rejection is reported whenever the
/// rejected type is used.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<Model>,
    aliases: Vec<(TypeId, ModelId)>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    registry: &'a Registry,

    app: app::Schema,

    conversion: Conversion,

    rejected: IndexMap<ModelId, Error>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model. Models registered for a type or name that is already
    /// taken are rejected.
    pub fn model(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Resolves `type_id` to the model `target` in addition to the model's own
    /// type.
    pub fn alias(&mut self, type_id: TypeId, target: ModelId) -> &mut Self {
        self.aliases.push((type_id, target));
        self
    }

    pub fn next_model_id(&self) -> ModelId {
        ModelId(self.models.len())
    }

    pub fn build(self, registry: &Registry) -> Schema {
        let mut rejected_types = HashMap::new();
        let mut build = BuildSchema {
            registry,
            app: app::Schema::default(),
            conversion: Conversion::default(),
            rejected: IndexMap::new(),
        };

        for model in self.models {
            if build.app.model_by_type(model.type_id).is_some() {
                tracing::debug!(model = %model.name, "model already registered; skipping");
                continue;
            }

            if build.app.contains_name(&model.name) {
                let err = Error::invalid_configuration(
                    &model.name,
                    "a model with this name is already registered",
                );
                tracing::warn!(model = %model.name, error = %err, "rejecting model configuration");
                rejected_types.insert(model.type_id, err);
                continue;
            }

            build.app.insert(model);
        }

        for (type_id, target) in self.aliases {
            if build.app.models.contains_key(&target) {
                build.app.alias(type_id, target);
            }
        }

        let ids: Vec<_> = build.app.models.keys().copied().collect();
        for id in ids {
            if let Err(err) = build.build_model(id) {
                let model = build.app.model(id);
                tracing::warn!(model = %model.name, error = %err, "rejecting model configuration");
                build.rejected.insert(id, err);
            }
        }

        for (id, err) in std::mem::take(&mut build.rejected) {
            for type_id in build.app.type_ids(id) {
                rejected_types.insert(type_id, err.clone());
            }
            build.conversion.models.shift_remove(&id);
        }

        // Rejected models are dropped only after every model has been checked
        // so references between models resolve against the full set.
        for type_id in rejected_types.keys() {
            if let Some(id) = build.app.model_by_type(*type_id).map(|model| model.id) {
                build.app.remove(id);
            }
        }

        tracing::debug!(
            models = build.app.models.len(),
            rejected = rejected_types.len(),
            "schema built"
        );

        Schema {
            app: build.app,
            conversion: build.conversion,
            rejected: rejected_types,
        }
    }
}

impl BuildSchema<'_> {
    fn build_model(&mut self, id: ModelId) -> Result<()> {
        let model = self.app.model(id);

        Verify { models: &self.app }.verify(model)?;

        let mut handlers = IndexMap::new();
        for property in model.field_properties() {
            let handler = self
                .registry
                .resolve(property, &self.app)
                .map_err(|err| {
                    err.context(crate::err!("building configuration for `{}`", model.name))
                })?;
            handlers.insert(property.id.index, handler);
        }

        self.conversion
            .models
            .insert(id, ModelConversion { handlers });

        Ok(())
    }
}

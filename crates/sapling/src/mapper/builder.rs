use super::{Mapper, Shared};
use crate::{schema, Config, Handler, Model, Proxy, Result};
use sapling_core::{convert::Registry, Repository, Schema};

use std::{any::TypeId, sync::Arc};

#[derive(Default)]
pub struct Builder {
    /// Code-first declarations, in registration order
    models: Vec<Registration>,

    /// User handlers, consulted before the built-in ones
    handlers: Vec<Arc<dyn Handler>>,

    mapping_file: Option<schema::MappingFile>,

    config: Config,
}

struct Registration {
    declaration: schema::Model,
    type_id: TypeId,
    proxy_type_id: TypeId,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(Registration {
            declaration: T::schema(),
            type_id: TypeId::of::<T>(),
            proxy_type_id: TypeId::of::<Proxy<T>>(),
        });
        self
    }

    /// Adds a handler. Handlers are consulted in the order they are added,
    /// before the built-in handlers.
    pub fn handler(&mut self, handler: impl Handler) -> &mut Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Declarations in `file` replace the code-first declarations of
    /// registered models with the same name.
    pub fn mapping_file(&mut self, file: schema::MappingFile) -> &mut Self {
        self.mapping_file = Some(file);
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Builds the schema and returns a mapper reading from `repository`.
    ///
    /// Models with an invalid configuration do not fail the build. Using one
    /// of them returns the configuration error instead.
    pub fn build(&mut self, repository: impl Repository) -> Result<Mapper> {
        let registry = Registry::new(self.handlers.iter().cloned());
        let schema = self.build_schema(&registry);

        for err in schema.rejected() {
            tracing::warn!(error = %err, "model configuration rejected");
        }

        Ok(Mapper {
            shared: Arc::new(Shared {
                schema,
                registry,
                config: self.config.clone(),
                repository: Box::new(repository),
            }),
        })
    }

    fn build_schema(&self, registry: &Registry) -> Schema {
        let mut builder = Schema::builder();

        for (index, registration) in self.models.iter().enumerate() {
            let id = schema::app::ModelId(index);
            let name = &registration.declaration.name;

            let declaration = match self.mapping_file.as_ref().and_then(|file| file.model(name)) {
                Some(declaration) => {
                    tracing::debug!(model = %name, "using declaration from mapping file");
                    declaration.clone()
                }
                None => registration.declaration.clone(),
            };

            builder.model(declaration.into_app(id, registration.type_id));
            builder.alias(registration.proxy_type_id, id);
        }

        if let Some(file) = &self.mapping_file {
            for declaration in file.models() {
                if !self
                    .models
                    .iter()
                    .any(|registration| registration.declaration.name == declaration.name)
                {
                    tracing::warn!(
                        model = %declaration.name,
                        "mapping file declares a model that is not registered"
                    );
                }
            }
        }

        builder.build(registry)
    }
}

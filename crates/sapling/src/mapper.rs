mod builder;
pub use builder::Builder;

mod load;

mod write;

use crate::{schema::app, Config, Cursor, Model, Proxy, Result};
use sapling_core::{convert::Registry, repository::Item, Error, Repository, Schema};

use std::{any::TypeId, fmt, sync::Arc};
use uuid::Uuid;

/// Maps items to Rust types and back.
///
/// A `Mapper` is cheap to clone; clones share the schema, the handler set and
/// the repository.
#[derive(Clone)]
pub struct Mapper {
    shared: Arc<Shared>,
}

pub(crate) struct Shared {
    pub(crate) schema: Schema,
    pub(crate) registry: Registry,
    pub(crate) config: Config,
    pub(crate) repository: Box<dyn Repository>,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    pub fn repository(&self) -> &dyn Repository {
        &*self.shared.repository
    }

    /// Returns the configuration of the model mapped to `T`.
    ///
    /// `T` is either a registered model or a [`Proxy`] of one.
    pub fn configuration<T: 'static>(&self) -> Result<&app::Model> {
        self.shared
            .schema
            .model_for(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    /// Returns the item at `path` as a `T`, or `None` if there is no item at
    /// `path`.
    pub fn get_item<T: Model>(&self, path: &str) -> Result<Option<T>> {
        self.configuration::<T>()?;
        tracing::debug!(model = T::NAME, path, "get item");

        match self.repository().item_by_path(path)? {
            Some(item) => self.load(item).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the item with identifier `id` as a `T`, or `None` if there is
    /// no such item.
    pub fn get_item_by_id<T: Model>(&self, id: Uuid) -> Result<Option<T>> {
        self.configuration::<T>()?;
        tracing::debug!(model = T::NAME, %id, "get item by id");

        match self.repository().item_by_id(id)? {
            Some(item) => self.load(item).map(Some),
            None => Ok(None),
        }
    }

    /// Returns a proxy for the item with identifier `id`.
    ///
    /// The repository is not read until the proxy is first dereferenced, so a
    /// missing item is only reported then.
    pub fn get_item_proxy<T: Model>(&self, id: Uuid) -> Result<Proxy<T>> {
        self.configuration::<T>()?;
        Ok(Proxy::new(self.clone(), id))
    }

    /// Runs `query` and maps each matching item to a `T` as the cursor is
    /// advanced.
    pub fn query<T: Model>(&self, query: &str) -> Result<Cursor<T>> {
        self.configuration::<T>()?;
        tracing::debug!(model = T::NAME, query, "query");

        let items = self.repository().query(query)?;
        Ok(Cursor::new(self.clone(), items, Mapper::load::<T>))
    }

    /// Runs `query` and returns a proxy for each matching item.
    pub fn query_proxies<T: Model>(&self, query: &str) -> Result<Cursor<Proxy<T>>> {
        self.configuration::<T>()?;
        tracing::debug!(model = T::NAME, query, "query proxies");

        let items = self.repository().query(query)?;
        Ok(Cursor::new(self.clone(), items, |mapper, item| {
            Ok(Proxy::new(mapper.clone(), item.id))
        }))
    }

    /// Returns the first item matching `query`, or `None` if nothing matches.
    pub fn query_single<T: Model>(&self, query: &str) -> Result<Option<T>> {
        self.query::<T>(query)?.next().transpose()
    }

    /// Maps an item the caller already holds.
    pub fn load<T: Model>(&self, item: Item) -> Result<T> {
        let model = self.configuration::<T>()?;
        let record = self.record(model, item)?;
        T::load(record)
    }

    /// Returns the item identifier of `instance`.
    pub fn identify<T: Model>(&self, instance: &T) -> Result<Uuid> {
        let model = self.configuration::<T>()?;

        let Some(id_property) = model.id_property() else {
            return Err(Error::invalid_operation(format!(
                "`{}` has no identifier property",
                model.name
            )));
        };

        let values = instance.store();
        match values.get(&id_property.name).and_then(|value| value.as_uuid()) {
            Some(id) => Ok(id),
            None => Err(Error::invalid_operation(format!(
                "`{}::{}` does not hold an item identifier",
                model.name, id_property.name
            ))),
        }
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("models", &self.shared.schema.app.models.len())
            .field("config", &self.shared.config)
            .field("repository", &self.shared.repository)
            .finish()
    }
}

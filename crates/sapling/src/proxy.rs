use crate::{Error, Mapper, Model, Result};

use once_cell::unsync::OnceCell;
use std::fmt;
use uuid::Uuid;

/// A lazily loaded model.
///
/// A proxy only knows the identifier of its item. The item is read and mapped
/// the first time [`Proxy::get`] is called; later calls return the same
/// instance without touching the repository.
///
/// Proxies are not `Sync` and are meant to stay with the caller that created
/// them.
pub struct Proxy<M> {
    id: Uuid,
    mapper: Mapper,
    model: OnceCell<Box<M>>,
}

impl<M: Model> Proxy<M> {
    pub(crate) fn new(mapper: Mapper, id: Uuid) -> Self {
        Self {
            id,
            mapper,
            model: OnceCell::new(),
        }
    }

    /// The item identifier. Never reads the repository.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Returns the mapped model, loading it on first use.
    ///
    /// Fails if the item no longer exists.
    pub fn get(&self) -> Result<&M> {
        let model = self.model.get_or_try_init(|| -> Result<Box<M>> {
            tracing::debug!(model = M::NAME, id = %self.id, "loading proxy");

            match self.mapper.get_item_by_id::<M>(self.id)? {
                Some(model) => Ok(Box::new(model)),
                None => Err(Error::invalid_operation(format!(
                    "item {} behind a `{}` proxy does not exist",
                    self.id,
                    M::NAME
                ))),
            }
        })?;
        Ok(&**model)
    }

    /// Consumes the proxy, returning the mapped model.
    pub fn into_inner(self) -> Result<M> {
        self.get()?;
        match self.model.into_inner() {
            Some(model) => Ok(*model),
            None => Err(Error::invalid_operation(format!(
                "`{}` proxy was not loaded",
                M::NAME
            ))),
        }
    }
}

impl<M: Model> Clone for Proxy<M> {
    /// Clones share nothing but the identifier; each loads on its own.
    fn clone(&self) -> Self {
        Self::new(self.mapper.clone(), self.id)
    }
}

impl<M: Model> PartialEq for Proxy<M> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<M: Model> Eq for Proxy<M> {}

/// A proxy equals a model instance mapped from the same item.
impl<M: Model> PartialEq<M> for Proxy<M> {
    fn eq(&self, other: &M) -> bool {
        self.mapper
            .identify(other)
            .is_ok_and(|id| id == self.id)
    }
}

impl<M: Model + fmt::Debug> fmt::Debug for Proxy<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("model", &M::NAME)
            .field("id", &self.id)
            .field("loaded", &self.model.get())
            .finish()
    }
}

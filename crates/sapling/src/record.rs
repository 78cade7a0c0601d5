use crate::{schema::app, Error, Item, Mapper, Model, Proxy, Result};
use sapling_core::{
    schema::app::{Mapping, ModelId},
    value::{Primitive, Value, ValueRecord},
};

use uuid::Uuid;

/// The values read from one item, handed to [`Model::load`].
///
/// Field, identifier and info properties are converted up front.
/// Relationship properties are resolved only when the model asks for them,
/// either as proxies or as loaded models.
#[derive(Debug)]
pub struct Record {
    values: ValueRecord,
    item: Item,
    model: ModelId,
    mapper: Mapper,
}

impl Record {
    pub(crate) fn new(values: ValueRecord, item: Item, model: ModelId, mapper: Mapper) -> Self {
        Self {
            values,
            item,
            model,
            mapper,
        }
    }

    /// The item the record was read from.
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Removes property `name` and converts it into `T`.
    pub fn get<T: Primitive>(&mut self, name: &str) -> Result<T> {
        self.values.take_as(name).map_err(|err| {
            err.context(crate::err!(
                "loading `{}::{name}`",
                self.mapper.schema().app.model(self.model).name
            ))
        })
    }

    /// Resolves a single-item relationship as a proxy.
    pub fn proxy<M: Model>(&mut self, name: &str) -> Result<Option<Proxy<M>>> {
        let ids = self.related_ids::<M>(name)?;
        Ok(ids
            .into_iter()
            .next()
            .map(|id| Proxy::new(self.mapper.clone(), id)))
    }

    /// Resolves a relationship as proxies, one per related item.
    pub fn proxies<M: Model>(&mut self, name: &str) -> Result<Vec<Proxy<M>>> {
        let ids = self.related_ids::<M>(name)?;
        Ok(ids
            .into_iter()
            .map(|id| Proxy::new(self.mapper.clone(), id))
            .collect())
    }

    /// Resolves a single-item relationship and loads it.
    pub fn model<M: Model>(&mut self, name: &str) -> Result<Option<M>> {
        let mut items = self.related_items::<M>(name)?.into_iter();
        items.next().map(|item| self.mapper.load(item)).transpose()
    }

    /// Resolves a relationship and loads every related item.
    pub fn models<M: Model>(&mut self, name: &str) -> Result<Vec<M>> {
        self.related_items::<M>(name)?
            .into_iter()
            .map(|item| self.mapper.load(item))
            .collect()
    }

    fn relationship<M: Model>(&self, name: &str) -> Result<&app::Property> {
        let model = self.mapper.schema().app.model(self.model);

        let Some(property) = model.property_by_name(name) else {
            return Err(Error::invalid_operation(format!(
                "`{}` has no property `{name}`",
                model.name
            )));
        };

        if property.ty.model_name() != Some(M::NAME) {
            return Err(Error::invalid_operation(format!(
                "`{}::{name}` of type {} does not reference `{}`",
                model.name,
                property.ty,
                M::NAME
            )));
        }

        Ok(property)
    }

    /// Identifiers of the related items, without reading the items where
    /// possible.
    fn related_ids<M: Model>(&mut self, name: &str) -> Result<Vec<Uuid>> {
        let mapping = self.relationship::<M>(name)?.mapping.clone();

        match mapping {
            Mapping::Field(_) => Ok(link_ids(self.values.take(name))),
            Mapping::Parent => Ok(self.item.parent_id.into_iter().collect()),
            _ => Ok(self
                .related_items::<M>(name)?
                .into_iter()
                .map(|item| item.id)
                .collect()),
        }
    }

    fn related_items<M: Model>(&mut self, name: &str) -> Result<Vec<Item>> {
        let mapping = self.relationship::<M>(name)?.mapping.clone();
        let repository = self.mapper.repository();

        match mapping {
            Mapping::Children => repository.children(&self.item),
            Mapping::Parent => match self.item.parent_id {
                Some(id) => Ok(repository.item_by_id(id)?.into_iter().collect()),
                None => Ok(vec![]),
            },
            Mapping::Query(query) => {
                let expr = if query.relative {
                    format!(
                        "{}/{}",
                        self.item.path.trim_end_matches('/'),
                        query.query.trim_start_matches('/')
                    )
                } else {
                    query.query
                };
                repository.query(&expr)
            }
            Mapping::Field(_) => {
                let mut items = vec![];
                for id in link_ids(self.values.take(name)) {
                    // Links to deleted items are skipped
                    if let Some(item) = repository.item_by_id(id)? {
                        items.push(item);
                    }
                }
                Ok(items)
            }
            Mapping::Id | Mapping::Info(_) => Err(Error::invalid_operation(format!(
                "`{name}` is not a relationship"
            ))),
        }
    }
}

fn link_ids(value: Value) -> Vec<Uuid> {
    match value {
        Value::List(items) => items.iter().filter_map(Value::as_uuid).collect(),
        other => other.as_uuid().into_iter().collect(),
    }
}

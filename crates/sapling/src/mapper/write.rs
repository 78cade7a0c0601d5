use super::Mapper;
use crate::{schema::app, Error, Item, Model, Result};
use sapling_core::{
    convert::Context,
    schema::app::InfoKind,
    value::{Value, ValueRecord},
};

use uuid::Uuid;

impl Mapper {
    /// Creates an item named `name` for `T` under the item of `parent`.
    pub fn create<T: Model, P: Model>(&self, parent: &P, name: &str) -> Result<T> {
        let template = self.template::<T>()?;
        let parent_id = self.identify(parent)?;
        self.create_under::<T>(Parent::Id(parent_id), name, template, None)
    }

    /// Creates an item named `name` for `T` under the item of `parent` and
    /// writes the field values of `pre` to it.
    pub fn create_with<T: Model, P: Model>(&self, parent: &P, name: &str, pre: &T) -> Result<T> {
        let template = self.template::<T>()?;
        let parent_id = self.identify(parent)?;
        self.create_under(Parent::Id(parent_id), name, template, Some(pre.store()))
    }

    /// Like [`Mapper::create_with`], taking the item name from the name
    /// property of `pre`.
    pub fn create_named<T: Model, P: Model>(&self, parent: &P, pre: &T) -> Result<T> {
        let template = self.template::<T>()?;
        let values = pre.store();
        let name = self.item_name::<T>(&values)?;
        let parent_id = self.identify(parent)?;
        self.create_under(Parent::Id(parent_id), &name, template, Some(values))
    }

    /// Creates an item named `name` for `T` under the item at `path`.
    pub fn create_at_path<T: Model>(&self, path: &str, name: &str, pre: Option<&T>) -> Result<T> {
        let template = self.template::<T>()?;
        self.create_under(Parent::Path(path), name, template, pre.map(T::store))
    }

    /// Writes the field values of `instance` back to its item.
    ///
    /// Read-only properties and properties `instance` does not store are left
    /// untouched.
    pub fn save<T: Model>(&self, instance: &T) -> Result<()> {
        let model = self.configuration::<T>()?;
        let id = self.identify(instance)?;
        tracing::debug!(model = T::NAME, %id, "save");

        let Some(mut item) = self.repository().item_by_id(id)? else {
            return Err(Error::invalid_operation(format!(
                "cannot save `{}`: item {id} does not exist",
                model.name
            )));
        };

        self.write_fields(model, &mut item, &instance.store())
    }

    /// Removes the item of `instance`, and its descendants, from the
    /// repository.
    pub fn delete<T: Model>(&self, instance: &T) -> Result<()> {
        let model = self.configuration::<T>()?;
        let id = self.identify(instance)?;
        tracing::debug!(model = T::NAME, %id, "delete");

        let Some(item) = self.repository().item_by_id(id)? else {
            return Err(Error::invalid_operation(format!(
                "cannot delete `{}`: item {id} does not exist",
                model.name
            )));
        };

        let removal = self.repository().delete_item(&item)?;

        for failure in &removal.notification_failures {
            tracing::warn!(
                model = T::NAME,
                %id,
                error = %failure,
                "item removed, but a delete notification failed"
            );
        }

        Ok(())
    }

    /// Returns the template of `T`, failing if `T` cannot be created.
    fn template<T: Model>(&self) -> Result<Uuid> {
        let model = self.configuration::<T>()?;

        match model.template {
            Some(template) => Ok(template),
            None => Err(Error::invalid_operation(format!(
                "cannot create `{}`: the model has no template",
                model.name
            ))),
        }
    }

    fn item_name<T: Model>(&self, values: &ValueRecord) -> Result<String> {
        let model = self.configuration::<T>()?;

        let name = model
            .info_property(InfoKind::Name)
            .and_then(|property| values.get(&property.name))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => Ok(name.to_string()),
            None => Err(Error::invalid_operation(format!(
                "cannot create `{}`: no item name given",
                model.name
            ))),
        }
    }

    fn create_under<T: Model>(
        &self,
        parent: Parent<'_>,
        name: &str,
        template: Uuid,
        values: Option<ValueRecord>,
    ) -> Result<T> {
        let model = self.configuration::<T>()?;

        let parent_item = match parent {
            Parent::Id(id) => self.repository().item_by_id(id)?,
            Parent::Path(path) => self.repository().item_by_path(path)?,
        };

        let Some(parent_item) = parent_item else {
            return Err(Error::invalid_operation(format!(
                "cannot create `{}`: parent item {parent} does not exist",
                model.name
            )));
        };

        tracing::debug!(model = T::NAME, parent = %parent_item.path, name, "create");

        let mut item = self
            .repository()
            .create_child(&parent_item, name, template)?;

        if let Some(values) = values {
            self.write_fields(model, &mut item, &values)?;
        }

        self.load(item)
    }

    fn write_fields(&self, model: &app::Model, item: &mut Item, values: &ValueRecord) -> Result<()> {
        for property in model.writable_properties() {
            let Some(value) = values.get(&property.name) else {
                continue;
            };
            let Some(field_name) = property.field_name() else {
                continue;
            };
            let Some(handler) = self.shared.schema.handler(property.id) else {
                return Err(Error::no_handler_found(&property.name, &property.ty));
            };

            let raw = {
                let cx = Context::new(property, &self.shared.registry, &self.shared.schema.app)
                    .with_item(item);
                self.shared.registry.write(&**handler, value, &cx)?
            };

            self.repository().set_field(item, field_name, &raw)?;
        }

        Ok(())
    }
}

/// Where a new item goes
#[derive(Clone, Copy)]
enum Parent<'a> {
    Id(Uuid),
    Path(&'a str),
}

impl std::fmt::Display for Parent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parent::Id(id) => write!(f, "{id}"),
            Parent::Path(path) => write!(f, "`{path}`"),
        }
    }
}

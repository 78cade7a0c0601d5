use super::Mapper;
use crate::{item_url, schema::app, Error, Item, Record, Result};
use sapling_core::{
    convert::{format_id, Context},
    schema::app::{InfoKind, Mapping},
    value::{Type, Value, ValueRecord},
};

use uuid::Uuid;

/// Field holding the name shown to editors
const DISPLAY_NAME_FIELD: &str = "__Display name";

impl Mapper {
    /// Reads every identifier, field and info property of `model` from
    /// `item`.
    pub(super) fn record(&self, model: &app::Model, item: Item) -> Result<Record> {
        let mut values = ValueRecord::new();

        for property in &model.properties {
            let value = match &property.mapping {
                Mapping::Id => id_value(&property.ty, item.id),
                Mapping::Field(field) => self.read_field(property, &field.field_name, &item)?,
                Mapping::Info(info) => match info.kind {
                    InfoKind::Name => Value::String(item.name.clone()),
                    InfoKind::DisplayName => Value::String(
                        item.field(DISPLAY_NAME_FIELD)
                            .filter(|name| !name.is_empty())
                            .unwrap_or(&item.name)
                            .to_string(),
                    ),
                    InfoKind::Path => Value::String(item.path.clone()),
                    InfoKind::Key => Value::String(item.name.to_lowercase()),
                    InfoKind::TemplateId => id_value(&property.ty, item.template_id),
                    InfoKind::Language => Value::String(item.language.clone()),
                    InfoKind::Url => Value::String(item_url::build(
                        &item,
                        &info.url_options,
                        &self.shared.config,
                    )?),
                },
                // Resolved on demand through `Record`
                Mapping::Query(_) | Mapping::Children | Mapping::Parent => continue,
            };

            values.insert_value(&property.name, value);
        }

        Ok(Record::new(values, item, model.id, self.clone()))
    }

    fn read_field(&self, property: &app::Property, field_name: &str, item: &Item) -> Result<Value> {
        let Some(handler) = self.shared.schema.handler(property.id) else {
            return Err(Error::no_handler_found(&property.name, &property.ty));
        };

        let cx = Context::new(property, &self.shared.registry, &self.shared.schema.app).with_item(item);
        self.shared
            .registry
            .read(&**handler, item.field_or_empty(field_name), &cx)
    }
}

fn id_value(ty: &Type, id: Uuid) -> Value {
    match ty {
        Type::String => Value::String(format_id(id)),
        _ => Value::Uuid(id),
    }
}

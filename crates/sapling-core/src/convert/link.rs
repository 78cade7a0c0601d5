use super::{
    guid::{format_id, parse_id},
    wrong_kind, Context, Handler, Registry,
};
use crate::{
    schema::app::{self, Property},
    value::{Type, Value},
    Result,
};

/// Fields holding the identifier of another item.
///
/// Handles untyped [`Type::Item`] properties and [`Type::Model`] properties
/// whose model is registered. Reads produce [`Value::Item`]; an empty field
/// reads as [`Value::Null`].
#[derive(Debug, Default)]
pub struct LinkHandler;

impl Handler for LinkHandler {
    fn ty(&self) -> Type {
        Type::Item
    }

    fn will_handle(&self, property: &Property, _registry: &Registry, models: &app::Schema) -> bool {
        if !property.mapping.is_field() {
            return false;
        }

        match &property.ty {
            Type::Item => true,
            Type::Model(name) => models.contains_name(name),
            _ => false,
        }
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        if raw.trim().is_empty() {
            return Ok(Value::Null);
        }

        parse_id(raw, Type::Item).map(Value::Item)
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::Item(id) | Value::Uuid(id) => Ok(format_id(*id)),
            Value::Null => Ok(String::new()),
            other => Err(wrong_kind(other, Type::Item)),
        }
    }
}

use super::{wrong_kind, Context, Handler, Registry};
use crate::{
    schema::app::{self, Property},
    value::{Type, Value},
    Result,
};

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Stands in for a literal `|` inside a collection element.
pub const PIPE_ENCODING: &str = "%pipe%";

const SEPARATOR: char = '|';

/// List properties stored as `|`-separated elements.
///
/// Each element is converted by the handler resolved for the list's element
/// type. The element handler is resolved on first use and kept for the
/// lifetime of this instance, which is why every list property gets its own.
#[derive(Debug, Default)]
pub struct EnumerableHandler {
    element: OnceCell<Arc<dyn Handler>>,
}

impl EnumerableHandler {
    fn element_handler(&self, element: &Property, cx: &Context<'_>) -> Result<&Arc<dyn Handler>> {
        self.element
            .get_or_try_init(|| cx.registry.resolve(element, cx.models))
    }

    fn element_property(cx: &Context<'_>) -> Result<Property> {
        match cx.property.element() {
            Some(element) => Ok(element),
            None => crate::bail!("property `{}` is not a list", cx.property.name),
        }
    }
}

impl Handler for EnumerableHandler {
    fn ty(&self) -> Type {
        Type::Any
    }

    fn will_handle(&self, property: &Property, _registry: &Registry, _models: &app::Schema) -> bool {
        property.mapping.is_field() && property.ty.is_list()
    }

    fn read(&self, raw: &str, cx: &Context<'_>) -> Result<Value> {
        let element = Self::element_property(cx)?;
        let handler = self.element_handler(&element, cx)?;
        let element_cx = cx.with_property(&element);

        let items = raw
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| handler.read(&segment.replace(PIPE_ENCODING, "|"), &element_cx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::List(items))
    }

    fn write(&self, value: &Value, cx: &Context<'_>) -> Result<String> {
        let items = match value {
            Value::List(items) => items,
            Value::Null => return Ok(String::new()),
            other => return Err(wrong_kind(other, &cx.property.ty)),
        };

        let element = Self::element_property(cx)?;
        let handler = self.element_handler(&element, cx)?;
        let element_cx = cx.with_property(&element);

        let mut raw = String::new();
        for item in items {
            let segment = handler.write(item, &element_cx)?;
            if segment.is_empty() {
                continue;
            }

            if !raw.is_empty() {
                raw.push(SEPARATOR);
            }
            raw.push_str(&segment.replace('|', PIPE_ENCODING));
        }

        Ok(raw)
    }

    fn instance(&self) -> Option<Arc<dyn Handler>> {
        Some(Arc::new(EnumerableHandler::default()))
    }
}

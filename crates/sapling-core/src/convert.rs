//! Conversion between raw item field strings and typed [`Value`]s.

mod boolean;
pub use boolean::BooleanHandler;

mod decimal;
pub use decimal::DecimalHandler;

mod double;
pub use double::DoubleHandler;

mod enumerable;
pub use enumerable::{EnumerableHandler, PIPE_ENCODING};

mod guid;
pub use guid::{format_id, GuidHandler};

mod integer;
pub use integer::IntegerHandler;

mod link;
pub use link::LinkHandler;

mod long;
pub use long::LongHandler;

mod string;
pub use string::StringHandler;

use crate::{
    repository::Item,
    schema::app::{self, Property},
    value::{Type, Value},
    Error, Result,
};

use std::{fmt, sync::Arc};

/// Converts a property's raw field string to and from a typed value.
pub trait Handler: fmt::Debug + Send + Sync + 'static {
    /// The value type this handler converts natively.
    fn ty(&self) -> Type;

    /// Returns `true` if this handler manages `property`.
    ///
    /// `registry` and `models` are the complete handler and model sets, for
    /// handlers whose decision depends on what else is registered.
    fn will_handle(&self, property: &Property, registry: &Registry, models: &app::Schema) -> bool {
        let _ = (registry, models);
        property.mapping.is_field() && property.ty == self.ty()
    }

    fn read(&self, raw: &str, cx: &Context<'_>) -> Result<Value>;

    fn write(&self, value: &Value, cx: &Context<'_>) -> Result<String>;

    /// Returns a new instance when the handler keeps per-property state.
    ///
    /// Stateless handlers return `None` and are shared between properties.
    fn instance(&self) -> Option<Arc<dyn Handler>> {
        None
    }
}

/// What a handler knows about the value it is converting.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub property: &'a Property,

    /// The item being read from or written to, when there is one.
    pub item: Option<&'a Item>,

    pub registry: &'a Registry,

    pub models: &'a app::Schema,
}

/// The ordered set of handlers.
///
/// Resolution walks the handlers in order and picks the first that accepts a
/// property, so handlers added with [`Registry::push`] override the built-ins.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: Vec<Arc<dyn Handler>>,

    /// Number of user handlers at the front of `handlers`
    custom: usize,
}

impl Registry {
    /// Creates a registry holding `custom` ahead of the built-in handlers.
    pub fn new(custom: impl IntoIterator<Item = Arc<dyn Handler>>) -> Self {
        let mut handlers: Vec<Arc<dyn Handler>> = custom.into_iter().collect();
        let custom = handlers.len();
        handlers.extend(Self::builtin());
        Self { handlers, custom }
    }

    /// An empty registry. Only useful for tests and for composing handler sets
    /// by hand.
    pub fn empty() -> Self {
        Self {
            handlers: vec![],
            custom: 0,
        }
    }

    /// The built-in handlers, collections first.
    pub fn builtin() -> Vec<Arc<dyn Handler>> {
        vec![
            Arc::new(EnumerableHandler::default()),
            Arc::new(BooleanHandler),
            Arc::new(IntegerHandler),
            Arc::new(LongHandler),
            Arc::new(DoubleHandler),
            Arc::new(DecimalHandler),
            Arc::new(GuidHandler),
            Arc::new(LinkHandler),
            Arc::new(StringHandler),
        ]
    }

    /// Adds a user handler after the existing user handlers and ahead of
    /// the built-ins.
    pub fn push(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.insert(self.custom, handler);
        self.custom += 1;
    }

    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn Handler>> {
        self.handlers.iter()
    }

    /// Returns the first handler that accepts `property`.
    pub fn resolve(&self, property: &Property, models: &app::Schema) -> Result<Arc<dyn Handler>> {
        let Some(handler) = self
            .handlers
            .iter()
            .find(|handler| handler.will_handle(property, self, models))
        else {
            return Err(Error::no_handler_found(&property.name, &property.ty));
        };

        tracing::trace!(property = %property.name, ty = %property.ty, ?handler, "resolved handler");

        Ok(handler.instance().unwrap_or_else(|| handler.clone()))
    }

    /// Converts `raw` using `handler`.
    ///
    /// An empty raw value of a nullable property reads as [`Value::Null`];
    /// everything else is up to the handler.
    pub fn read(&self, handler: &dyn Handler, raw: &str, cx: &Context<'_>) -> Result<Value> {
        if cx.property.nullable && raw.is_empty() {
            return Ok(Value::Null);
        }

        handler.read(raw, cx).map_err(|err| {
            err.context(crate::err!(
                "reading field `{}` of property `{}`",
                field_name(cx.property),
                cx.property.name
            ))
        })
    }

    /// Converts `value` to its raw field string using `handler`.
    pub fn write(&self, handler: &dyn Handler, value: &Value, cx: &Context<'_>) -> Result<String> {
        if cx.property.nullable && value.is_null() {
            return Ok(String::new());
        }

        handler.write(value, cx).map_err(|err| {
            err.context(crate::err!(
                "writing field `{}` of property `{}`",
                field_name(cx.property),
                cx.property.name
            ))
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new([])
    }
}

impl<'a> Context<'a> {
    pub fn new(property: &'a Property, registry: &'a Registry, models: &'a app::Schema) -> Self {
        Self {
            property,
            item: None,
            registry,
            models,
        }
    }

    pub fn with_item(self, item: &'a Item) -> Self {
        Self {
            item: Some(item),
            ..self
        }
    }

    pub fn with_property(self, property: &'a Property) -> Self {
        Self { property, ..self }
    }

    /// The free-form setting declared on the property's field mapping.
    pub fn setting(&self) -> Option<&'a str> {
        self.property
            .mapping
            .as_field()
            .and_then(|field| field.setting.as_deref())
    }
}

fn field_name(property: &Property) -> &str {
    property.field_name().unwrap_or(&property.name)
}

/// Builds the conversion error for a value of the wrong kind.
fn wrong_kind(value: &Value, ty: impl fmt::Display) -> Error {
    Error::type_conversion(value, ty)
}

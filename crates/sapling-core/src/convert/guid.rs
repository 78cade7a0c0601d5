use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

use uuid::Uuid;

/// Formats an identifier the way item fields store them: braced and
/// upper-case.
pub fn format_id(id: Uuid) -> String {
    id.braced().to_string().to_uppercase()
}

pub(super) fn parse_id(raw: &str, ty: Type) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::conversion(raw, ty))
}

#[derive(Debug, Default)]
pub struct GuidHandler;

impl Handler for GuidHandler {
    fn ty(&self) -> Type {
        Type::Uuid
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        if raw.trim().is_empty() {
            return Ok(Value::Uuid(Uuid::nil()));
        }

        parse_id(raw, Type::Uuid).map(Value::Uuid)
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::Uuid(id) | Value::Item(id) => Ok(format_id(*id)),
            Value::Null => Ok(String::new()),
            other => Err(wrong_kind(other, Type::Uuid)),
        }
    }
}

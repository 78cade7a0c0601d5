use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

#[derive(Debug, Default)]
pub struct LongHandler;

impl Handler for LongHandler {
    fn ty(&self) -> Type {
        Type::I64
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Value::I64(0));
        }

        raw.parse::<i64>()
            .map(Value::I64)
            .map_err(|_| Error::conversion(raw, Type::I64))
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::I64(v) => Ok(v.to_string()),
            Value::I32(v) => Ok(v.to_string()),
            other => Err(wrong_kind(other, Type::I64)),
        }
    }
}

use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

#[derive(Debug, Default)]
pub struct IntegerHandler;

impl Handler for IntegerHandler {
    fn ty(&self) -> Type {
        Type::I32
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Value::I32(0));
        }

        raw.parse::<i32>()
            .map(Value::I32)
            .map_err(|_| Error::conversion(raw, Type::I32))
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::I32(v) => Ok(v.to_string()),
            other => Err(wrong_kind(other, Type::I32)),
        }
    }
}

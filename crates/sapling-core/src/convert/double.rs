use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

#[derive(Debug, Default)]
pub struct DoubleHandler;

impl Handler for DoubleHandler {
    fn ty(&self) -> Type {
        Type::F64
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Value::F64(0.0));
        }

        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Value::F64(v)),
            _ => Err(Error::conversion(raw, Type::F64)),
        }
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::F64(v) => Ok(v.to_string()),
            other => Err(wrong_kind(other, Type::F64)),
        }
    }
}

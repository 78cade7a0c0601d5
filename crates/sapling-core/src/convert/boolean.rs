use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

/// Checkbox fields: `"1"` is checked, `"0"` or empty is not.
#[derive(Debug, Default)]
pub struct BooleanHandler;

impl Handler for BooleanHandler {
    fn ty(&self) -> Type {
        Type::Bool
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        match raw.trim() {
            "" | "0" => Ok(Value::Bool(false)),
            "1" => Ok(Value::Bool(true)),
            other if other.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            other if other.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            _ => Err(Error::conversion(raw, Type::Bool)),
        }
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::Bool(true) => Ok("1".to_string()),
            Value::Bool(false) => Ok("0".to_string()),
            other => Err(wrong_kind(other, Type::Bool)),
        }
    }
}

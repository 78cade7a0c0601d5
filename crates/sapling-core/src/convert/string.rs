use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Result,
};

#[derive(Debug, Default)]
pub struct StringHandler;

impl Handler for StringHandler {
    fn ty(&self) -> Type {
        Type::String
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        Ok(Value::String(raw.to_string()))
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::String(v) => Ok(v.clone()),
            Value::Null => Ok(String::new()),
            other => Err(wrong_kind(other, Type::String)),
        }
    }
}

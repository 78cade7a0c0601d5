use super::{wrong_kind, Context, Handler};
use crate::{
    value::{Type, Value},
    Error, Result,
};

use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal fields, stored in invariant culture (`.` separator, no grouping).
#[derive(Debug, Default)]
pub struct DecimalHandler;

impl Handler for DecimalHandler {
    fn ty(&self) -> Type {
        Type::Decimal
    }

    fn read(&self, raw: &str, _cx: &Context<'_>) -> Result<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Value::Decimal(Decimal::ZERO));
        }

        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Value::Decimal)
            .map_err(|_| Error::conversion(raw, Type::Decimal))
    }

    fn write(&self, value: &Value, _cx: &Context<'_>) -> Result<String> {
        match value {
            Value::Decimal(v) => Ok(v.to_string()),
            other => Err(wrong_kind(other, Type::Decimal)),
        }
    }
}

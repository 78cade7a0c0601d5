use super::{Type, Value};
use crate::{Error, Result};

use rust_decimal::Decimal;
use uuid::Uuid;

/// A Rust type that can be stored in a mapped property.
pub trait Primitive: Sized {
    /// The property type this Rust type maps to.
    fn ty() -> Type;

    /// Returns `true` if the primitive represents a nullable type (e.g. `Option`).
    fn nullable() -> bool {
        false
    }

    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $variant:ident ),+ $(,)? ) => {
        $(
            impl Primitive for $t {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::type_conversion(&other, Type::$variant)),
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )+
    };
}

impl_primitive! {
    bool => Bool,
    i64 => I64,
    f64 => F64,
    Decimal => Decimal,
    String => String,
}

impl Primitive for i32 {
    fn ty() -> Type {
        Type::I32
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(&value, Type::I32)),
            other => Err(Error::type_conversion(&other, Type::I32)),
        }
    }

    fn into_value(self) -> Value {
        Value::I32(self)
    }
}

impl Primitive for Uuid {
    fn ty() -> Type {
        Type::Uuid
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(id) | Value::Item(id) => Ok(id),
            other => Err(Error::type_conversion(&other, Type::Uuid)),
        }
    }

    fn into_value(self) -> Value {
        Value::Uuid(self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn nullable() -> bool {
        true
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            Value::Null => Ok(vec![]),
            other => Err(Error::type_conversion(&other, Self::ty())),
        }
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Primitive::into_value).collect())
    }
}

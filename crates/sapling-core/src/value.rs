mod primitive;
pub use primitive::Primitive;

mod record;
pub use record::ValueRecord;

mod ty;
pub use ty::Type;

use rust_decimal::Decimal;
use uuid::Uuid;

/// A typed property value.
///
/// Handlers convert between a raw field string and a `Value`; models convert
/// between a `Value` and their own Rust fields through [`Primitive`].
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// Fixed-point decimal number
    Decimal(Decimal),

    /// String value
    String(String),

    /// A globally unique identifier stored as data
    Uuid(Uuid),

    /// A reference to another item, by identifier
    Item(Uuid),

    /// An ordered list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the identifier when the value is a `Uuid` or an item reference.
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(id) | Self::Item(id) => Some(*id),
            Self::String(v) => Uuid::parse_str(v).ok(),
            _ => None,
        }
    }

    /// Infers the type of the value.
    ///
    /// Lists infer their element type from the first element; empty lists
    /// and null infer [`Type::Unknown`].
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
            Self::Item(_) => Type::Item,
            Self::List(items) => Type::list(
                items
                    .first()
                    .map(Value::infer_ty)
                    .unwrap_or(Type::Unknown),
            ),
            Self::Null => Type::Unknown,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

use crate::Error;

use std::{fmt, str::FromStr};

/// The declared type of a mapped property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// Fixed-point decimal number
    Decimal,

    /// String type
    String,

    /// Globally unique identifier
    Uuid,

    /// An untyped reference to another item
    Item,

    /// A reference to an item mapped by the named model
    Model(String),

    /// A list of a single type
    List(Box<Type>),

    /// Matches any type. Handlers that inspect the outer shape of a property
    /// rather than a concrete value type declare this.
    Any,

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Returns the element type when this is a list.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Self::List(item) => Some(item),
            _ => None,
        }
    }

    /// Returns the model name this type references, looking through lists.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) => Some(name),
            Self::List(item) => item.model_name(),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::I32 => f.write_str("I32"),
            Self::I64 => f.write_str("I64"),
            Self::F64 => f.write_str("F64"),
            Self::Decimal => f.write_str("Decimal"),
            Self::String => f.write_str("String"),
            Self::Uuid => f.write_str("Uuid"),
            Self::Item => f.write_str("Item"),
            Self::Model(name) => write!(f, "Model<{name}>"),
            Self::List(item) => write!(f, "List<{item}>"),
            Self::Any => f.write_str("Any"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Parses the type names used by declarative mapping files, e.g. `string`,
/// `decimal`, `list<string>` or `model<Article>`. Matching is
/// case-insensitive except for model names.
impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        if let Some(inner) = generic_argument(s, "list") {
            return Ok(Type::list(inner.parse::<Type>()?));
        }

        if let Some(name) = generic_argument(s, "model") {
            if name.is_empty() {
                crate::bail!("model type `{s}` is missing a model name");
            }
            return Ok(Type::model(name));
        }

        Ok(match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Type::Bool,
            "i32" | "int" | "integer" => Type::I32,
            "i64" | "long" => Type::I64,
            "f64" | "double" => Type::F64,
            "decimal" => Type::Decimal,
            "string" => Type::String,
            "uuid" | "guid" => Type::Uuid,
            "item" => Type::Item,
            _ => crate::bail!("unknown property type `{s}`"),
        })
    }
}

impl TryFrom<String> for Type {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

fn generic_argument<'a>(s: &'a str, outer: &str) -> Option<&'a str> {
    let head = s.get(..outer.len())?;
    if !head.eq_ignore_ascii_case(outer) {
        return None;
    }
    s[outer.len()..]
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}

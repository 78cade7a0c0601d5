use super::Error;
use crate::value::Value;

/// Error when a value cannot be converted between its raw field form and a
/// typed property value.
///
/// This occurs when:
/// - A raw field value is present but malformed (`"abc"` read as a decimal)
/// - A typed value of the wrong kind is handed to a handler for writing
#[derive(Debug)]
pub(super) struct ConversionError {
    found: Box<str>,
    to_type: Box<str>,
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.found, self.to_type)
    }
}

impl Error {
    /// Creates a conversion error for a malformed raw field value.
    pub fn conversion(raw: &str, to_type: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            found: format!("{raw:?}").into(),
            to_type: to_type.to_string().into(),
        }))
    }

    /// Creates a conversion error for a typed value of the wrong kind.
    pub fn type_conversion(value: &Value, to_type: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            found: format!("{} value", value.infer_ty()).into(),
            to_type: to_type.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a conversion error.
    pub fn is_conversion(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::Conversion(_)))
    }
}

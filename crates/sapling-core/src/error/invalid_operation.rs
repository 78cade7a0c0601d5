use super::Error;

/// Error when a mapper operation is used outside its preconditions.
///
/// This occurs when:
/// - Creating an item for a model that has no template
/// - Creating under a parent that cannot be resolved to an item
/// - Deleting or saving an instance whose identifier is unset
/// - Hydrating a proxy whose item no longer exists
#[derive(Debug)]
pub(super) struct InvalidOperation {
    message: Box<str>,
}

impl std::error::Error for InvalidOperation {}

impl core::fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid operation: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidOperation(InvalidOperation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid operation error.
    pub fn is_invalid_operation(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidOperation(_)))
    }
}

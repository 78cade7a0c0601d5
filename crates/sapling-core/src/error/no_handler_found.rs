use super::Error;

/// Error when no registered handler accepts a field-backed property.
#[derive(Debug)]
pub(super) struct NoHandlerFound {
    property: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for NoHandlerFound {}

impl core::fmt::Display for NoHandlerFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no handler found for `{}` of type {}",
            self.property, self.ty
        )
    }
}

impl Error {
    /// Creates a no-handler-found error for `property` of type `ty`.
    pub fn no_handler_found(property: impl Into<String>, ty: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::NoHandlerFound(NoHandlerFound {
            property: property.into().into(),
            ty: ty.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a no-handler-found error.
    pub fn is_no_handler_found(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::NoHandlerFound(_)))
    }
}

use super::Error;

/// Error when a mapped type's metadata is inconsistent.
///
/// This occurs when:
/// - More than one property claims the identifier role
/// - A property name is declared twice
/// - A structural-info or identifier property has an incompatible type
/// - A relationship names a model that was never registered
///
/// The error is fatal to the offending model only; other models registered
/// alongside it are still built.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid configuration for `{}`: {}",
            self.model, self.message
        )
    }
}

impl Error {
    /// Creates an invalid configuration error for `model`.
    pub fn invalid_configuration(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(InvalidConfiguration {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidConfiguration(_)))
    }
}

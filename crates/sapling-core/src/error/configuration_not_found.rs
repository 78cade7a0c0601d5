use super::Error;

/// Error when a type is used with the mapper but was never registered.
#[derive(Debug)]
pub(super) struct ConfigurationNotFound {
    type_name: Box<str>,
}

impl std::error::Error for ConfigurationNotFound {}

impl core::fmt::Display for ConfigurationNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no configuration found for `{}`; did you forget to register it with `Mapper::builder()`?",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a configuration-not-found error.
    pub fn configuration_not_found(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConfigurationNotFound(
            ConfigurationNotFound {
                type_name: type_name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a configuration-not-found error.
    pub fn is_configuration_not_found(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ConfigurationNotFound(_)))
    }
}

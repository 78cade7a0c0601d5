use super::Error;

/// Error when a repository operation fails.
///
/// This wraps whatever the underlying repository raised: storage errors,
/// unknown templates, security or locking failures. The mapper never retries.
#[derive(Debug)]
pub(super) struct RepositoryOperationFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for RepositoryOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for RepositoryOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a repository operation failure.
    ///
    /// This is the preferred way for repository implementations to surface
    /// their own error types.
    pub fn repository_operation_failed(
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::RepositoryOperationFailed(
            RepositoryOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is a repository operation failure.
    pub fn is_repository_operation_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::RepositoryOperationFailed(_)))
    }
}

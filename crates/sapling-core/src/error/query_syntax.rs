use super::Error;

/// Error raised by a repository when a query expression is malformed.
#[derive(Debug)]
pub(super) struct QuerySyntax {
    query: Box<str>,
    message: Box<str>,
}

impl std::error::Error for QuerySyntax {}

impl core::fmt::Display for QuerySyntax {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query `{}`: {}", self.query, self.message)
    }
}

impl Error {
    /// Creates a query syntax error.
    pub fn query_syntax(query: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QuerySyntax(QuerySyntax {
            query: query.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a query syntax error.
    pub fn is_query_syntax(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::QuerySyntax(_)))
    }
}

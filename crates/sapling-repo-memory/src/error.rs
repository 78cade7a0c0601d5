use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the in-memory repository itself.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("template {0} is not registered")]
    UnknownTemplate(Uuid),

    #[error("item {0} does not exist")]
    ItemNotFound(Uuid),

    #[error("invalid item name `{0}`")]
    InvalidName(String),

    #[error("the root item cannot be deleted")]
    DeleteRoot,

    #[error("repository state is poisoned")]
    Poisoned,
}

impl From<MemoryError> for sapling_core::Error {
    fn from(err: MemoryError) -> Self {
        sapling_core::Error::repository_operation_failed(err)
    }
}

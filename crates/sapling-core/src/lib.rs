pub mod convert;
pub use convert::Registry;

mod error;
pub use error::{Error, IntoError};

pub mod repository;
pub use repository::Repository;

pub mod schema;
pub use schema::Schema;

pub mod value;
pub use value::Value;

pub type Result<T, E = Error> = core::result::Result<T, E>;

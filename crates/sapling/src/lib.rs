mod config;
pub use config::Config;

pub mod cursor;
pub use cursor::Cursor;

pub mod mapper;
pub use mapper::Mapper;

mod model;
pub use model::Model;

pub mod proxy;
pub use proxy::Proxy;

mod record;
pub use record::Record;

pub mod schema;

mod item_url;

pub use sapling_core::{
    bail,
    convert::{self, Handler},
    err,
    repository::{self, Item, Removal, Repository},
    value::{Primitive, Type, Value, ValueRecord},
    Error, Result,
};

mod item;
pub use item::Item;

mod removal;
pub use removal::Removal;

use crate::Result;

use std::fmt::Debug;
use uuid::Uuid;

/// The content repository the mapper reads from and writes to.
///
/// Calls are synchronous and single-attempt: the mapper never retries, and
/// concurrency control (locking, security) is the repository's concern.
pub trait Repository: Debug + Send + Sync + 'static {
    /// Returns the item at `path`, or `None` if there is no such item.
    fn item_by_path(&self, path: &str) -> Result<Option<Item>>;

    /// Returns the item with identifier `id`, or `None` if there is no such
    /// item.
    fn item_by_id(&self, id: Uuid) -> Result<Option<Item>>;

    /// Evaluates `query` and returns the matching items in repository order.
    ///
    /// An expression that matches nothing returns an empty list; a malformed
    /// expression fails with [`Error::query_syntax`](crate::Error::query_syntax).
    fn query(&self, query: &str) -> Result<Vec<Item>>;

    /// Returns the children of `item` in repository order.
    fn children(&self, item: &Item) -> Result<Vec<Item>>;

    /// Creates a child of `parent` named `name` using `template`.
    fn create_child(&self, parent: &Item, name: &str, template: Uuid) -> Result<Item>;

    /// Writes `value` into field `name` of `item`, refreshing the snapshot.
    fn set_field(&self, item: &mut Item, name: &str, value: &str) -> Result<()>;

    /// Removes `item` and its descendants.
    ///
    /// Returning `Ok` means the item is gone. Anything that went wrong after
    /// that point is reported through [`Removal`] rather than as an error.
    fn delete_item(&self, item: &Item) -> Result<Removal>;
}

use sapling_core::{
    repository::{Item, Removal},
    Repository, Result,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// A repository wrapper that logs every call for testing purposes
#[derive(Debug)]
pub struct LoggingRepository {
    /// The underlying repository that actually executes calls
    inner: Box<dyn Repository>,

    /// Log of all calls made through this repository
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<RepositoryOp>>>,
}

/// One repository call
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryOp {
    ItemByPath(String),
    ItemById(Uuid),
    Query(String),
    Children(Uuid),
    CreateChild {
        parent: Uuid,
        name: String,
        template: Uuid,
    },
    SetField {
        item: Uuid,
        name: String,
        value: String,
    },
    DeleteItem(Uuid),
}

impl LoggingRepository {
    pub fn new(repository: Box<dyn Repository>) -> Self {
        Self {
            inner: repository,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<RepositoryOp>>> {
        self.ops_log.clone()
    }

    fn log(&self, op: RepositoryOp) {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);
    }
}

impl Repository for LoggingRepository {
    fn item_by_path(&self, path: &str) -> Result<Option<Item>> {
        self.log(RepositoryOp::ItemByPath(path.to_string()));
        self.inner.item_by_path(path)
    }

    fn item_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        self.log(RepositoryOp::ItemById(id));
        self.inner.item_by_id(id)
    }

    fn query(&self, query: &str) -> Result<Vec<Item>> {
        self.log(RepositoryOp::Query(query.to_string()));
        self.inner.query(query)
    }

    fn children(&self, item: &Item) -> Result<Vec<Item>> {
        self.log(RepositoryOp::Children(item.id));
        self.inner.children(item)
    }

    fn create_child(&self, parent: &Item, name: &str, template: Uuid) -> Result<Item> {
        self.log(RepositoryOp::CreateChild {
            parent: parent.id,
            name: name.to_string(),
            template,
        });
        self.inner.create_child(parent, name, template)
    }

    fn set_field(&self, item: &mut Item, name: &str, value: &str) -> Result<()> {
        self.log(RepositoryOp::SetField {
            item: item.id,
            name: name.to_string(),
            value: value.to_string(),
        });
        self.inner.set_field(item, name, value)
    }

    fn delete_item(&self, item: &Item) -> Result<Removal> {
        self.log(RepositoryOp::DeleteItem(item.id));
        self.inner.delete_item(item)
    }
}

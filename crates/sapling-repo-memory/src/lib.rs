mod error;
pub use error::MemoryError;

mod query;
use query::Query;

mod tree;
use tree::Tree;

use sapling_core::{
    repository::{Item, Removal},
    Repository, Result,
};

use indexmap::IndexMap;
use std::{
    fmt,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use uuid::Uuid;

/// Template of the root item and of items created by [`Memory::create_path`].
pub const FOLDER_TEMPLATE: Uuid = Uuid::from_u128(0xA87A00B1_E6DB_45AB_8B54_636FEC3B5523);

type Listener = Box<dyn Fn(&Item) -> Result<()> + Send + Sync>;

/// An in-memory item tree.
///
/// The tree starts with a single root item at `/sitecore`. Items can only be
/// created from registered templates; [`FOLDER_TEMPLATE`] is always
/// registered.
pub struct Memory {
    tree: RwLock<Tree>,

    /// Template names by identifier
    templates: RwLock<IndexMap<Uuid, String>>,

    /// Called for every deleted item, after it has been removed
    listeners: RwLock<Vec<Listener>>,

    language: String,
}

impl Memory {
    pub fn new() -> Self {
        Self::with_language("en")
    }

    /// Creates a repository whose items are in `language`.
    pub fn with_language(language: impl Into<String>) -> Self {
        let language = language.into();
        let root = Item {
            id: Uuid::new_v4(),
            name: "sitecore".to_string(),
            path: "/sitecore".to_string(),
            template_id: FOLDER_TEMPLATE,
            parent_id: None,
            language: language.clone(),
            fields: IndexMap::new(),
        };

        let mut templates = IndexMap::new();
        templates.insert(FOLDER_TEMPLATE, "Folder".to_string());

        Self {
            tree: RwLock::new(Tree::new(root)),
            templates: RwLock::new(templates),
            listeners: RwLock::new(vec![]),
            language,
        }
    }

    /// Registers a template so items can be created from it.
    pub fn add_template(&self, id: Uuid, name: impl Into<String>) -> Result<()> {
        let mut templates = self.templates.write().map_err(|_| MemoryError::Poisoned)?;
        templates.insert(id, name.into());
        Ok(())
    }

    /// Registers a callback run for each deleted item.
    ///
    /// A failing callback does not undo the deletion; its error is reported in
    /// the [`Removal`].
    pub fn on_delete(&self, listener: impl Fn(&Item) -> Result<()> + Send + Sync + 'static) -> Result<()> {
        let mut listeners = self.listeners.write().map_err(|_| MemoryError::Poisoned)?;
        listeners.push(Box::new(listener));
        Ok(())
    }

    /// Returns the item at `path`, creating missing folder items on the way.
    pub fn create_path(&self, path: &str) -> Result<Item> {
        let mut tree = self.write()?;

        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let root = tree.root();
        match segments.next() {
            Some(first) if tree.get(root).is_some_and(|item| item.name.eq_ignore_ascii_case(first)) => {}
            _ => return Err(MemoryError::InvalidName(path.to_string()).into()),
        }

        let mut current = root;
        for segment in segments {
            current = match tree.child_named(current, segment) {
                Some(child) => child,
                None => {
                    let item = self.new_item(segment, FOLDER_TEMPLATE)?;
                    tree.insert_child(current, item)?.id
                }
            };
        }

        match tree.get(current) {
            Some(item) => Ok(item.clone()),
            None => Err(MemoryError::ItemNotFound(current).into()),
        }
    }

    /// Number of items in the tree, including the root.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    fn new_item(&self, name: &str, template: Uuid) -> Result<Item> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '[', ']']) || name == "." || name == ".." {
            return Err(MemoryError::InvalidName(name.to_string()).into());
        }

        Ok(Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            path: String::new(),
            template_id: template,
            parent_id: None,
            language: self.language.clone(),
            fields: IndexMap::new(),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tree>> {
        self.tree
            .read()
            .map_err(|_| MemoryError::Poisoned.into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tree>> {
        self.tree
            .write()
            .map_err(|_| MemoryError::Poisoned.into())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Memory");
        if let Ok(tree) = self.tree.read() {
            debug.field("items", &tree.len());
        }
        debug.field("language", &self.language).finish()
    }
}

impl Repository for Memory {
    fn item_by_path(&self, path: &str) -> Result<Option<Item>> {
        Ok(self.read()?.by_path(path).cloned())
    }

    fn item_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn query(&self, query: &str) -> Result<Vec<Item>> {
        let query = Query::parse(query)?;
        let tree = self.read()?;

        Ok(query
            .eval(&tree)
            .into_iter()
            .filter_map(|id| tree.get(id).cloned())
            .collect())
    }

    fn children(&self, item: &Item) -> Result<Vec<Item>> {
        let tree = self.read()?;

        if tree.get(item.id).is_none() {
            return Err(MemoryError::ItemNotFound(item.id).into());
        }

        Ok(tree
            .children(item.id)
            .iter()
            .filter_map(|id| tree.get(*id).cloned())
            .collect())
    }

    fn create_child(&self, parent: &Item, name: &str, template: Uuid) -> Result<Item> {
        {
            let templates = self.templates.read().map_err(|_| MemoryError::Poisoned)?;
            if !templates.contains_key(&template) {
                return Err(MemoryError::UnknownTemplate(template).into());
            }
        }

        let item = self.new_item(name, template)?;
        let item = self.write()?.insert_child(parent.id, item)?;
        tracing::trace!(path = %item.path, id = %item.id, "created item");
        Ok(item)
    }

    fn set_field(&self, item: &mut Item, name: &str, value: &str) -> Result<()> {
        let mut tree = self.write()?;

        let Some(stored) = tree.get_mut(item.id) else {
            return Err(MemoryError::ItemNotFound(item.id).into());
        };

        stored.fields.insert(name.to_string(), value.to_string());
        *item = stored.clone();
        Ok(())
    }

    fn delete_item(&self, item: &Item) -> Result<Removal> {
        let removed = self.write()?.remove(item.id)?;
        let mut removal = Removal::new(removed.len());

        let listeners = self.listeners.read().map_err(|_| MemoryError::Poisoned)?;
        for removed_item in &removed {
            for listener in listeners.iter() {
                if let Err(err) = listener(removed_item) {
                    removal.notification_failures.push(err);
                }
            }
        }

        tracing::trace!(path = %item.path, removed = removal.removed, "deleted item");
        Ok(removal)
    }
}

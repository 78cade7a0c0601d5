use crate::MemoryError;
use sapling_core::repository::Item;

use indexmap::IndexMap;
use uuid::Uuid;

/// Items stored as a tree, keyed by identifier.
#[derive(Debug)]
pub(crate) struct Tree {
    nodes: IndexMap<Uuid, Node>,
    root: Uuid,
}

#[derive(Debug)]
struct Node {
    item: Item,
    children: Vec<Uuid>,
}

impl Tree {
    pub(crate) fn new(root: Item) -> Self {
        let id = root.id;
        let mut nodes = IndexMap::new();
        nodes.insert(
            id,
            Node {
                item: root,
                children: vec![],
            },
        );
        Self { nodes, root: id }
    }

    pub(crate) fn root(&self) -> Uuid {
        self.root
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, id: Uuid) -> Option<&Item> {
        self.nodes.get(&id).map(|node| &node.item)
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.nodes.get_mut(&id).map(|node| &mut node.item)
    }

    pub(crate) fn children(&self, id: Uuid) -> &[Uuid] {
        self.nodes
            .get(&id)
            .map(|node| &node.children[..])
            .unwrap_or_default()
    }

    pub(crate) fn parent(&self, id: Uuid) -> Option<Uuid> {
        self.get(id)?.parent_id
    }

    /// Finds the first child of `parent` named `name`, ignoring case.
    pub(crate) fn child_named(&self, parent: Uuid, name: &str) -> Option<Uuid> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.get(*child).is_some_and(|item| item.name.eq_ignore_ascii_case(name)))
    }

    pub(crate) fn by_path(&self, path: &str) -> Option<&Item> {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());

        let root = self.get(self.root)?;
        if !segments.next()?.eq_ignore_ascii_case(&root.name) {
            return None;
        }

        let mut current = self.root;
        for segment in segments {
            current = self.child_named(current, segment)?;
        }

        self.get(current)
    }

    pub(crate) fn insert_child(&mut self, parent: Uuid, mut item: Item) -> Result<Item, MemoryError> {
        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            return Err(MemoryError::ItemNotFound(parent));
        };

        item.parent_id = Some(parent);
        item.path = format!("{}/{}", parent_node.item.path, item.name);
        parent_node.children.push(item.id);

        self.nodes.insert(
            item.id,
            Node {
                item: item.clone(),
                children: vec![],
            },
        );

        Ok(item)
    }

    /// Removes `id` and its descendants, returning the removed items with
    /// `id` first.
    pub(crate) fn remove(&mut self, id: Uuid) -> Result<Vec<Item>, MemoryError> {
        if id == self.root {
            return Err(MemoryError::DeleteRoot);
        }

        let Some(parent) = self.parent(id) else {
            return Err(MemoryError::ItemNotFound(id));
        };

        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|child| *child != id);
        }

        let mut removed = vec![];
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.shift_remove(&next) {
                pending.extend(node.children.iter().rev());
                removed.push(node.item);
            }
        }

        Ok(removed)
    }
}

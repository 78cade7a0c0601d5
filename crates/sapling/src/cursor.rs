use crate::{Item, Mapper, Result};

use std::fmt;

/// Items returned by a query, mapped one at a time as the cursor advances.
pub struct Cursor<M> {
    mapper: Mapper,
    items: std::vec::IntoIter<Item>,
    load: fn(&Mapper, Item) -> Result<M>,
}

impl<M> Cursor<M> {
    pub(crate) fn new(mapper: Mapper, items: Vec<Item>, load: fn(&Mapper, Item) -> Result<M>) -> Self {
        Self {
            mapper,
            items: items.into_iter(),
            load,
        }
    }

    /// Number of items not yet mapped.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Maps all remaining items, stopping at the first failure.
    pub fn collect_all(self) -> Result<Vec<M>> {
        self.collect()
    }
}

impl<M> Iterator for Cursor<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some((self.load)(&self.mapper, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<M> ExactSizeIterator for Cursor<M> {}

impl<M> fmt::Debug for Cursor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("remaining", &self.items.len())
            .finish()
    }
}

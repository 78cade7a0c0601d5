use crate::Error;

/// The outcome of a successful [`delete_item`](super::Repository::delete_item).
///
/// The item has been removed. Failures raised afterwards, e.g. by delete
/// listeners, are collected here so they can be reported without being
/// confused with a failed deletion.
#[derive(Debug, Default)]
pub struct Removal {
    /// Number of items removed, including descendants
    pub removed: usize,

    /// Failures raised after the item was removed
    pub notification_failures: Vec<Error>,
}

impl Removal {
    pub fn new(removed: usize) -> Self {
        Self {
            removed,
            notification_failures: vec![],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.notification_failures.is_empty()
    }
}

use indexmap::IndexMap;
use uuid::Uuid;

/// A snapshot of a repository item.
///
/// The repository owns the real item; this copy is what the mapper reads
/// fields and structural information from.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Globally unique identifier
    pub id: Uuid,

    /// The item name (last path segment)
    pub name: String,

    /// Full path from the tree root, e.g. `/content/home/news`
    pub path: String,

    /// Identifier of the template the item was created from
    pub template_id: Uuid,

    /// Parent item identifier; `None` for the root
    pub parent_id: Option<Uuid>,

    /// Content language of this snapshot
    pub language: String,

    /// Named string fields in the order they were first written
    pub fields: IndexMap<String, String>,
}

impl Item {
    /// Returns the raw value of field `name`, if it has one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the raw value of field `name`, or the empty string.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or_default()
    }
}

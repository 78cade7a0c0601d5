use serde::Deserialize;

/// How a property is bound to its item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mapping {
    /// The item identifier
    Id,

    /// A named item field, converted by a handler
    Field(FieldMapping),

    /// Structural information about the item (name, path, template, ...)
    Info(InfoMapping),

    /// Items returned by a query
    Query(QueryMapping),

    /// The item's children
    Children,

    /// The item's parent
    Parent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldMapping {
    /// Name of the item field
    #[serde(rename = "field")]
    pub field_name: String,

    /// When set, the property is never written back to the item
    #[serde(default)]
    pub read_only: bool,

    /// Free-form setting passed through to the handler
    #[serde(default)]
    pub setting: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoMapping {
    #[serde(rename = "info")]
    pub kind: InfoKind,

    /// Only meaningful for [`InfoKind::Url`]
    #[serde(default)]
    pub url_options: UrlOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoKind {
    Name,
    /// The `__Display name` field, falling back to the item name
    DisplayName,
    Path,
    /// The lower-cased item name
    Key,
    TemplateId,
    Language,
    Url,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Append the page extension to the last segment
    pub add_extension: bool,

    /// Prefix the configured server URL
    pub include_server_url: bool,

    /// Replace spaces in item names with `-`
    pub encode_names: bool,

    /// Lower-case the generated path
    pub lowercase: bool,

    pub language_embedding: LanguageEmbedding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageEmbedding {
    #[default]
    Never,
    /// Only when the item language differs from the default language
    AsNeeded,
    Always,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryMapping {
    pub query: String,

    /// Evaluate the query relative to the item's path
    #[serde(default)]
    pub relative: bool,
}

impl Mapping {
    pub fn field(field_name: impl Into<String>) -> Self {
        Self::Field(FieldMapping::new(field_name))
    }

    pub fn info(kind: InfoKind) -> Self {
        Self::Info(InfoMapping {
            kind,
            url_options: UrlOptions::default(),
        })
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self::Query(QueryMapping {
            query: query.into(),
            relative: false,
        })
    }

    pub fn relative_query(query: impl Into<String>) -> Self {
        Self::Query(QueryMapping {
            query: query.into(),
            relative: true,
        })
    }

    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id)
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn as_field(&self) -> Option<&FieldMapping> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_info(&self) -> Option<&InfoMapping> {
        match self {
            Self::Info(info) => Some(info),
            _ => None,
        }
    }

    /// Returns `true` for mappings whose value references other items.
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Children | Self::Parent)
    }
}

impl FieldMapping {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            read_only: false,
            setting: None,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = Some(setting.into());
        self
    }
}

impl InfoMapping {
    pub fn url(url_options: UrlOptions) -> Self {
        Self {
            kind: InfoKind::Url,
            url_options,
        }
    }
}

impl From<FieldMapping> for Mapping {
    fn from(value: FieldMapping) -> Self {
        Self::Field(value)
    }
}

impl From<InfoMapping> for Mapping {
    fn from(value: InfoMapping) -> Self {
        Self::Info(value)
    }
}

impl From<QueryMapping> for Mapping {
    fn from(value: QueryMapping) -> Self {
        Self::Query(value)
    }
}

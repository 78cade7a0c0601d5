use super::Model;
use crate::{Error, Result};

use serde::Deserialize;
use std::{path::Path, str::FromStr};

const MAPPING_FILE_VERSION: u32 = 1;

/// Model declarations read from a TOML file.
///
/// An entry replaces the code-first declaration of the registered model with
/// the same name.
///
/// ```toml
/// version = 1
///
/// [[model]]
/// name = "Article"
/// template = "{76036F5E-CBCE-46D1-AF0A-4143F9B557AA}"
///
/// [[model.property]]
/// name = "id"
/// type = "uuid"
/// kind = "id"
///
/// [[model.property]]
/// name = "title"
/// type = "string"
/// kind = "field"
/// field = "Title"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MappingFile {
    /// Mapping file format version
    version: u32,

    #[serde(default, rename = "model")]
    models: Vec<Model>,
}

impl MappingFile {
    /// Load a mapping file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::from(anyhow::Error::from(err))
                .context(crate::err!("reading mapping file `{}`", path.display()))
        })?;
        contents.parse()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    /// Returns the declaration for the model named `name`.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }
}

impl FromStr for MappingFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: MappingFile = toml::from_str(s).map_err(anyhow::Error::from)?;

        if file.version != MAPPING_FILE_VERSION {
            crate::bail!(
                "unsupported mapping file version: {}. Expected version {}",
                file.version,
                MAPPING_FILE_VERSION
            );
        }

        Ok(file)
    }
}

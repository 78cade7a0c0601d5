use crate::{Error, Result};

use serde::Deserialize;
use std::{path::Path, str::FromStr};
use url::Url;

/// Site-level settings the mapper needs to compute item information such as
/// URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the item that is the root of the site. Item URLs are relative
    /// to it.
    pub site_root: String,

    /// Absolute URL prefixed to item URLs when requested
    pub server_url: Option<Url>,

    /// Language items are read in when none is specified
    pub default_language: String,

    /// Extension appended to item URLs when requested, without the dot
    pub extension: String,
}

/// On-disk form of [`Config`]
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    site_root: String,
    server_url: Option<String>,
    default_language: String,
    extension: String,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::from(anyhow::Error::from(err))
                .context(crate::err!("reading configuration `{}`", path.display()))
        })?;
        contents.parse()
    }

    pub fn site_root(mut self, site_root: impl Into<String>) -> Self {
        self.site_root = normalize_root(site_root.into());
        self
    }

    /// Set the server URL. Fails if `server_url` is not an absolute URL.
    pub fn server_url(mut self, server_url: &str) -> Result<Self> {
        self.server_url = Some(parse_server_url(server_url)?);
        Ok(self)
    }

    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        Self {
            site_root: file.site_root,
            server_url: None,
            default_language: file.default_language,
            extension: file.extension,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            site_root: "/sitecore/content/home".to_string(),
            server_url: None,
            default_language: "en".to_string(),
            extension: "aspx".to_string(),
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s).map_err(anyhow::Error::from)?;

        let mut config = Config::new()
            .site_root(file.site_root)
            .default_language(file.default_language)
            .extension(file.extension);

        if let Some(server_url) = file.server_url {
            config = config.server_url(&server_url)?;
        }

        Ok(config)
    }
}

fn parse_server_url(server_url: &str) -> Result<Url> {
    let url = Url::parse(server_url).map_err(|err| {
        Error::from(anyhow::Error::from(err))
            .context(crate::err!("invalid server URL `{server_url}`"))
    })?;

    if url.cannot_be_a_base() {
        crate::bail!("invalid server URL `{server_url}`: not an absolute URL");
    }

    Ok(url)
}

fn normalize_root(root: String) -> String {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

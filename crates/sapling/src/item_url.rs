use crate::{
    schema::{LanguageEmbedding, UrlOptions},
    Config, Error, Item, Result,
};

/// Builds the public URL of `item`.
///
/// The URL path is the item path relative to the configured site root. Items
/// outside the site root keep their full path.
pub(crate) fn build(item: &Item, options: &UrlOptions, config: &Config) -> Result<String> {
    let mut path = site_relative_path(&item.path, &config.site_root);

    if options.encode_names {
        path = path.replace(' ', "-");
    }

    if options.add_extension && path != "/" && !config.extension.is_empty() {
        path.push('.');
        path.push_str(&config.extension);
    }

    let embed_language = match options.language_embedding {
        LanguageEmbedding::Never => false,
        LanguageEmbedding::AsNeeded => !item.language.eq_ignore_ascii_case(&config.default_language),
        LanguageEmbedding::Always => true,
    };

    if embed_language && !item.language.is_empty() {
        path = if path == "/" {
            format!("/{}", item.language)
        } else {
            format!("/{}{path}", item.language)
        };
    }

    if options.lowercase {
        path = path.to_lowercase();
    }

    if !options.include_server_url {
        return Ok(path);
    }

    let Some(server_url) = &config.server_url else {
        return Err(Error::invalid_operation(format!(
            "cannot build an absolute URL for `{}`: no server URL is configured",
            item.path
        )));
    };

    let url = server_url
        .join(&path)
        .map_err(|err| Error::from(anyhow::Error::from(err)))?;
    Ok(url.to_string())
}

fn site_relative_path(path: &str, site_root: &str) -> String {
    let root = site_root.trim_end_matches('/');

    let relative = match path.get(..root.len()) {
        Some(head) if !root.is_empty() && head.eq_ignore_ascii_case(root) => {
            let rest = &path[root.len()..];
            // `/content/home2` is not inside `/content/home`
            if rest.is_empty() || rest.starts_with('/') {
                rest
            } else {
                path
            }
        }
        _ => path,
    };

    let relative = relative.trim_end_matches('/');
    if relative.is_empty() {
        "/".to_string()
    } else if relative.starts_with('/') {
        relative.to_string()
    } else {
        format!("/{relative}")
    }
}

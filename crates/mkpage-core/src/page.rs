//! Page creation: resolve the output directory, ensure it exists, and write
//! the HTML fragment plus JSON metadata for one url.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::template;

/// Title used when a request carries none.
pub const DEFAULT_TITLE: &str = "New Page";

/// One page to scaffold: a slash-separated url path (optionally with a single
/// leading `/`) and an optional title.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub url: String,
    pub title: Option<String>,
}

impl PageRequest {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        PageRequest {
            url: url.into(),
            title,
        }
    }

    /// Effective title, falling back to [`DEFAULT_TITLE`].
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Strip exactly one leading `/`, if present. Internal slashes are kept for
/// directory nesting.
pub fn normalize_url(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// File stem for both artifacts: the normalized url with `/` turned into `_`.
pub fn base_name(normalized_url: &str) -> String {
    normalized_url.replace('/', "_")
}

/// Create the page directory under `pages_root` and write `<base>.html` and
/// `<base>.json` into it. Existing files are overwritten without warning and
/// directory creation is idempotent, so re-running on the same url is safe.
///
/// Returns the resolved (absolute) page directory.
pub fn create_page(pages_root: &Path, request: &PageRequest) -> Result<PathBuf> {
    let normalized = normalize_url(&request.url);
    let mut dir = pages_root.join(normalized);
    if dir.is_relative() {
        let cwd = std::env::current_dir().context("resolve current working directory")?;
        dir = cwd.join(dir);
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("create page directory {}", dir.display()))?;

    let stem = base_name(normalized);
    let title = request.title();

    let html_path = dir.join(format!("{stem}.html"));
    fs::write(&html_path, template::render_html(title))
        .with_context(|| format!("write {}", html_path.display()))?;

    let json_path = dir.join(format!("{stem}.json"));
    fs::write(&json_path, template::render_meta(title)?)
        .with_context(|| format!("write {}", json_path.display()))?;

    tracing::info!(
        url = normalized,
        title,
        dir = %dir.display(),
        "page scaffolded"
    );
    Ok(dir)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Resolves and caches the icon identified by `name`.
///
/// Implementations must be idempotent: rendering the same name twice leaves
/// the cache in the same state. Failures are the implementation's own and
/// are propagated to the caller untouched.
pub trait Renderer {
    fn render(&self, name: &str) -> Result<()>;
}

/// Default renderer: copies an icon's SVG source into the on-disk cache so
/// runtime lookups hit a warm cache.
#[derive(Debug)]
pub struct SvgRenderer {
    icon_dir: PathBuf,
    cache_dir: PathBuf,
}

impl SvgRenderer {
    pub fn new(icon_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    fn svg_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.svg", name))
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, name: &str) -> Result<()> {
        let source = Self::svg_path(&self.icon_dir, name);
        let contents = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read icon source: {}", source.display()))?;

        let target = Self::svg_path(&self.cache_dir, name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;
        }

        fs::write(&target, contents)
            .with_context(|| format!("Failed to write cached icon: {}", target.display()))
    }
}

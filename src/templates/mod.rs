//! Site template roots contributed by plugins.

use crate::internal;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Directory under a plugin's base path that holds its site templates.
pub const TEMPLATES_DIR: &str = "templates";

/// `handle -> directory`, as collected when the host resolves site template roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRoots {
    roots: BTreeMap<String, PathBuf>,
}

impl TemplateRoots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A later registration for the same handle replaces the earlier one.
    pub fn insert(&mut self, handle: impl Into<String>, dir: impl Into<PathBuf>) {
        self.roots.insert(handle.into(), dir.into());
    }

    #[must_use]
    pub fn get(&self, handle: &str) -> Option<&Path> {
        self.roots.get(handle).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.roots.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

/// Adds `<base_path>/templates` under `handle` when that directory exists.
/// Returns whether a root was added.
pub fn register_template_roots(roots: &mut TemplateRoots, handle: &str, base_path: &Path) -> bool {
    let dir = base_path.join(TEMPLATES_DIR);
    if !dir.is_dir() {
        internal::trace(
            "TEMPLATES",
            &format!("No template directory at {}", dir.display()),
        );
        return false;
    }
    internal::debug(
        "TEMPLATES",
        &format!("Registered {handle} -> {}", dir.display()),
    );
    roots.insert(handle, dir);
    true
}

//! Translation lookup with a fallback category.
//!
//! A plugin translates under its own category first. When that yields the source text
//! unchanged, the host-wide `app` category gets a chance.

use crate::context::Context;
use crate::fmt::interpolate;
use crate::internal;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Host-wide category consulted when the plugin category has no translation.
pub const APP_CATEGORY: &str = "app";

/// Message source. Returns `message` (interpolated) when nothing is found.
pub trait Catalog: Send + Sync {
    fn translate(
        &self,
        category: &str,
        message: &str,
        params: &Context,
        language: Option<&str>,
    ) -> String;
}

/// `category -> language -> source -> translation`
type Messages = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// In-memory catalog, loadable from TOML:
///
/// ```toml
/// [myplugin.de]
/// "Saved {count} entries" = "{count} Einträge gespeichert"
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    default_language: String,
    messages: Messages,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_language: "en".to_string(),
            messages: HashMap::new(),
        }
    }

    /// # Errors
    /// TOML that isn't a `category.language` table of strings.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let messages: Messages = toml::from_str(content)?;
        Ok(Self {
            messages,
            ..Self::new()
        })
    }

    /// # Errors
    /// I/O or parse failures.
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        internal::debug(
            "I18N",
            &format!(
                "Loaded {} categories from {}",
                catalog.messages.len(),
                path.display()
            ),
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    #[must_use]
    pub fn with(
        mut self,
        category: &str,
        language: &str,
        source: &str,
        translation: &str,
    ) -> Self {
        self.insert(category, language, source, translation);
        self
    }

    pub fn insert(&mut self, category: &str, language: &str, source: &str, translation: &str) {
        self.messages
            .entry(category.to_string())
            .or_default()
            .entry(language.to_string())
            .or_default()
            .insert(source.to_string(), translation.to_string());
    }

    fn lookup(&self, category: &str, language: &str, message: &str) -> Option<&str> {
        self.messages
            .get(category)?
            .get(language)?
            .get(message)
            .map(String::as_str)
    }
}

impl Catalog for MemoryCatalog {
    fn translate(
        &self,
        category: &str,
        message: &str,
        params: &Context,
        language: Option<&str>,
    ) -> String {
        let language = language.unwrap_or(&self.default_language);
        let text = self.lookup(category, language, message).unwrap_or(message);
        interpolate(text, params)
    }
}

/// Plugin-scoped translator.
#[derive(Clone)]
pub struct Translator {
    category: String,
    catalog: Arc<dyn Catalog>,
}

impl Translator {
    #[must_use]
    pub fn new(category: impl Into<String>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            category: category.into(),
            catalog,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Plugin category first, then [`APP_CATEGORY`] if the result equals `message`.
    #[must_use]
    pub fn t(&self, message: &str, params: &Context, language: Option<&str>) -> String {
        let translation = self
            .catalog
            .translate(&self.category, message, params, language);
        if translation == message {
            return self
                .catalog
                .translate(APP_CATEGORY, message, params, language);
        }
        translation
    }
}

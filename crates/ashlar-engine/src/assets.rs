//! Named asset registry.
//!
//! Lookup policy: a missing identifier fails loudly with the identifier in
//! the message. Silently substituting a placeholder hides broken content
//! until much later, which is worse than an early error.

use std::collections::HashMap;

use crate::error::ResourceLookupError;
use crate::text::FontCatalog;

/// Registry of decoded assets, keyed by name. Built once at startup by the
/// asset-loading collaborator and read from game logic afterwards.
#[derive(Default)]
pub struct AssetRegistry {
    fonts: HashMap<String, FontCatalog>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font catalog under `name`, replacing any previous entry.
    pub fn register_font(&mut self, name: impl Into<String>, catalog: FontCatalog) {
        let name = name.into();
        if self.fonts.insert(name.clone(), catalog).is_some() {
            log::warn!("font catalog `{name}` was re-registered");
        }
    }

    /// Looks up a font catalog by name.
    pub fn font(&self, name: &str) -> Result<&FontCatalog, ResourceLookupError> {
        self.fonts
            .get(name)
            .ok_or_else(|| ResourceLookupError(name.to_string()))
    }
}

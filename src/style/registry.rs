//! Style lookup by id
//!
//! Registration order is kept so listings stay stable; replacing an id keeps
//! its original slot.

use std::sync::Arc;

use tracing::debug;

use super::{builtin_styles, create_style, StyleGenerator, DEFAULT_STYLE};
use crate::error::{NickForgeError, Result};
use crate::types::StyleDescriptor;

#[derive(Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<(String, Arc<dyn StyleGenerator>)>,
}

impl StyleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in style with its built-in configuration
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        for id in builtin_styles() {
            registry.register(Arc::from(create_style(id)?))?;
        }
        Ok(registry)
    }

    /// Add a style, or replace the one already registered under its id.
    pub fn register(&mut self, style: Arc<dyn StyleGenerator>) -> Result<()> {
        let id = style.id().trim().to_string();
        if id.is_empty() {
            return Err(NickForgeError::invalid_request("Style id must not be blank"));
        }

        match self.styles.iter_mut().find(|(key, _)| *key == id) {
            Some(slot) => {
                debug!(style = %id, "Replacing registered style");
                slot.1 = style;
            }
            None => {
                debug!(style = %id, "Registering style");
                self.styles.push((id, style));
            }
        }
        Ok(())
    }

    pub fn register_all<I>(&mut self, styles: I) -> Result<()>
    where
        I: IntoIterator<Item = Arc<dyn StyleGenerator>>,
    {
        for style in styles {
            self.register(style)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn StyleGenerator>> {
        let id = id.trim();
        self.styles
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, style)| Arc::clone(style))
    }

    /// Look up a request's style; blank or missing means the default style.
    pub fn resolve(&self, id: Option<&str>) -> Result<Arc<dyn StyleGenerator>> {
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => DEFAULT_STYLE,
        };
        self.get(id).ok_or_else(|| {
            NickForgeError::invalid_request(format!(
                "Unknown style: {}. Available: {}",
                id,
                self.ids().join(", ")
            ))
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn descriptors(&self) -> Vec<StyleDescriptor> {
        self.styles.iter().map(|(_, style)| style.descriptor()).collect()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.styles.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry").field("styles", &self.ids()).finish()
    }
}

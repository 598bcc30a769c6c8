//! Nickname styles
//!
//! Each style turns a request context and a random stream into one raw
//! candidate. Styles are registered by id in a [`StyleRegistry`].

pub mod cs16_classic;
pub mod cs_pro;
pub mod dictionary;
pub mod dota;
pub mod minecraft;
pub mod registry;
pub mod transform;
pub mod words;

// Re-export main functionality
pub use cs16_classic::{Cs16ClassicConfig, Cs16ClassicStyle};
pub use cs_pro::{CsProConfig, CsProStyle};
pub use dictionary::{parse_grouped_words, DictionaryConfig, DictionaryStyle, LocaleWordBank};
pub use dota::{DotaProConfig, DotaProStyle};
pub use minecraft::{MinecraftConfig, MinecraftStyle};
pub use registry::StyleRegistry;

use rand::RngCore;

use crate::error::{NickForgeError, Result};
use crate::types::{RequestContext, StyleDescriptor};

pub const DICTIONARY: &str = "dictionary";
pub const MINECRAFT_YOUTUBER: &str = "minecraft-youtuber";
pub const COUNTER_STRIKE_PRO: &str = "cs-pro";
pub const DOTA_PRO: &str = "dota-pro";
pub const COUNTER_STRIKE_16_CLASSIC: &str = "cs16-classic";

/// Style used when a request names none
pub const DEFAULT_STYLE: &str = DICTIONARY;

/// Core trait for all nickname styles
pub trait StyleGenerator: Send + Sync {
    /// Registry key
    fn id(&self) -> &str;

    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Produce one raw candidate.
    ///
    /// Output depends only on the context and the draws taken from `rng`.
    /// An empty string means "discard and retry"; an error means the style
    /// cannot serve this context at all.
    fn generate(&self, context: &RequestContext, rng: &mut dyn RngCore) -> Result<String>;

    fn descriptor(&self) -> StyleDescriptor {
        StyleDescriptor {
            id: self.id().to_string(),
            display_name: self.display_name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Ids of the built-in styles, in registration order
pub fn builtin_styles() -> Vec<&'static str> {
    vec![
        DICTIONARY,
        MINECRAFT_YOUTUBER,
        COUNTER_STRIKE_PRO,
        DOTA_PRO,
        COUNTER_STRIKE_16_CLASSIC,
    ]
}

/// Create a built-in style with its built-in configuration
pub fn create_style(id: &str) -> Result<Box<dyn StyleGenerator>> {
    match id.trim() {
        DICTIONARY => Ok(Box::new(DictionaryStyle::builtin()?)),
        MINECRAFT_YOUTUBER => Ok(Box::new(MinecraftStyle::builtin()?)),
        COUNTER_STRIKE_PRO => Ok(Box::new(CsProStyle::builtin()?)),
        DOTA_PRO => Ok(Box::new(DotaProStyle::builtin()?)),
        COUNTER_STRIKE_16_CLASSIC => Ok(Box::new(Cs16ClassicStyle::builtin()?)),
        other => Err(NickForgeError::invalid_request(format!(
            "Unknown style: {}. Built-in styles: {}",
            other,
            builtin_styles().join(", ")
        ))),
    }
}

//! Nick Forge - styled, unique nickname generation
//!
//! Pluggable nickname styles, a retry-until-unique engine on top of them and
//! optional splicing of a user-chosen word into every generated nickname.

pub mod config;
pub mod engine;
pub mod error;
pub mod random;
pub mod style;
pub mod text;
pub mod types;
pub mod userword;

// Re-export commonly used types
pub use config::{CharMap, EngineConfig};
pub use error::{NickForgeError, Result};
pub use types::{
    option_keys, GenerationMetrics, GenerationRequest, MetricsSnapshot, NicknameLocale,
    NicknameResult, NicknameTemplate, RequestContext, StyleDescriptor,
};

// Re-export main functionality
pub use engine::UniqueCandidateEngine;
pub use style::{StyleGenerator, StyleRegistry};
pub use userword::{UserWordPosition, UserWordStyle, UserWordStyler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

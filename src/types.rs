//! Core types and structures for nick-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::NickForgeError;

/// Option keys recognised in [`GenerationRequest::options`]
pub mod option_keys {
    pub const USER_WORD: &str = "userWord";
    pub const USER_WORD_POSITION: &str = "userWordPosition";
    pub const USER_WORD_STYLE: &str = "userWordStyle";

    /// Every key a request may carry
    pub const ALL: &[&str] = &[USER_WORD, USER_WORD_POSITION, USER_WORD_STYLE];
}

/// Vocabulary locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NicknameLocale {
    En,
    Ru,
}

impl NicknameLocale {
    pub const ALL: [NicknameLocale; 2] = [NicknameLocale::En, NicknameLocale::Ru];
}

impl std::fmt::Display for NicknameLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NicknameLocale::En => write!(f, "en"),
            NicknameLocale::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for NicknameLocale {
    type Err = NickForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(NicknameLocale::En),
            "ru" => Ok(NicknameLocale::Ru),
            _ => Err(NickForgeError::invalid_request(format!(
                "Unsupported locale: {}. Allowed: en, ru",
                s
            ))),
        }
    }
}

/// Slot template used by the dictionary style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NicknameTemplate {
    AdjNoun,
    NounVerb,
    AdjNounNumber,
}

impl NicknameTemplate {
    pub const ALL: [NicknameTemplate; 3] = [
        NicknameTemplate::AdjNoun,
        NicknameTemplate::NounVerb,
        NicknameTemplate::AdjNounNumber,
    ];
}

impl std::fmt::Display for NicknameTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NicknameTemplate::AdjNoun => write!(f, "adj_noun"),
            NicknameTemplate::NounVerb => write!(f, "noun_verb"),
            NicknameTemplate::AdjNounNumber => write!(f, "adj_noun_number"),
        }
    }
}

impl FromStr for NicknameTemplate {
    type Err = NickForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "adj_noun" => Ok(NicknameTemplate::AdjNoun),
            "noun_verb" => Ok(NicknameTemplate::NounVerb),
            "adj_noun_number" => Ok(NicknameTemplate::AdjNounNumber),
            _ => Err(NickForgeError::invalid_request(format!(
                "Unsupported template: {}. Allowed: adj_noun, noun_verb, adj_noun_number",
                s
            ))),
        }
    }
}

/// One call's worth of generation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub count: usize,
    pub locale: NicknameLocale,
    pub template: NicknameTemplate,
    pub seed: Option<u64>,
    /// Blank or missing falls back to the canonical dictionary style
    pub style_id: Option<String>,
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl GenerationRequest {
    pub fn new(count: usize, locale: NicknameLocale, template: NicknameTemplate) -> Self {
        Self {
            count,
            locale,
            template,
            seed: None,
            style_id: None,
            options: HashMap::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Request context handed to a style generator
    pub fn context(&self) -> RequestContext {
        RequestContext {
            locale: self.locale,
            template: self.template,
            options: self.options.clone(),
        }
    }
}

/// What a style generator sees of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub locale: NicknameLocale,
    pub template: NicknameTemplate,
    pub options: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(locale: NicknameLocale, template: NicknameTemplate) -> Self {
        Self {
            locale,
            template,
            options: HashMap::new(),
        }
    }
}

/// Generated nickname
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicknameResult {
    pub value: String,
    pub locale: NicknameLocale,
    pub template: NicknameTemplate,
    pub style_id: String,
    pub generated_at: DateTime<Utc>,
}

impl NicknameResult {
    pub fn new(
        value: String,
        locale: NicknameLocale,
        template: NicknameTemplate,
        style_id: impl Into<String>,
    ) -> Self {
        Self {
            value,
            locale,
            template,
            style_id: style_id.into(),
            generated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for NicknameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Presentation data for a registered style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub id: String,
    pub display_name: String,
    pub description: String,
}

impl std::fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Engine counters, shared across calls on one engine
#[derive(Debug, Default)]
pub struct GenerationMetrics {
    calls: AtomicU64,
    attempts: AtomicU64,
    accepted: AtomicU64,
    duplicates: AtomicU64,
    blank_candidates: AtomicU64,
    exhausted: AtomicU64,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_calls(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_attempts(&self, attempts: u64) {
        self.attempts.fetch_add(attempts, Ordering::Relaxed);
    }

    pub fn add_accepted(&self, accepted: u64) {
        self.accepted.fetch_add(accepted, Ordering::Relaxed);
    }

    pub fn add_duplicates(&self, duplicates: u64) {
        self.duplicates.fetch_add(duplicates, Ordering::Relaxed);
    }

    pub fn add_blank_candidates(&self, blanks: u64) {
        self.blank_candidates.fetch_add(blanks, Ordering::Relaxed);
    }

    pub fn increment_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            calls: self.calls.load(Ordering::Relaxed),
            attempts: self.attempts.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            duplicates: self.duplicates.load(Ordering::Relaxed),
            blank_candidates: self.blank_candidates.load(Ordering::Relaxed),
            exhausted: self.exhausted.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`GenerationMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub calls: u64,
    pub attempts: u64,
    pub accepted: u64,
    pub duplicates: u64,
    pub blank_candidates: u64,
    pub exhausted: u64,
}

impl MetricsSnapshot {
    /// Share of attempts that produced an accepted nickname
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

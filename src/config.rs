//! Configuration loading and validation helpers
//!
//! Style configurations are resolved once and never mutated afterwards.
//! Everything here fails with [`NickForgeError::Config`] so a broken style
//! is rejected before it serves a single request.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{NickForgeError, Result};

/// Defaults for the retry budget
pub const DEFAULT_MIN_ATTEMPTS: usize = 100;
pub const DEFAULT_ATTEMPTS_PER_NICKNAME: usize = 50;

/// Retry budget of the uniqueness engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub min_attempts: usize,
    pub attempts_per_nickname: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_attempts: DEFAULT_MIN_ATTEMPTS,
            attempts_per_nickname: DEFAULT_ATTEMPTS_PER_NICKNAME,
        }
    }
}

impl EngineConfig {
    pub fn new(min_attempts: usize, attempts_per_nickname: usize) -> Result<Self> {
        let config = Self {
            min_attempts,
            attempts_per_nickname,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from `NICKFORGE_MIN_ATTEMPTS` and
    /// `NICKFORGE_ATTEMPTS_PER_NICKNAME`, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = env_usize("NICKFORGE_MIN_ATTEMPTS")? {
            config.min_attempts = value;
        }
        if let Some(value) = env_usize("NICKFORGE_ATTEMPTS_PER_NICKNAME")? {
            config.attempts_per_nickname = value;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_attempts < 1 {
            return Err(NickForgeError::config("minAttempts must be positive"));
        }
        if self.attempts_per_nickname < 1 {
            return Err(NickForgeError::config("attemptsPerNickname must be positive"));
        }
        Ok(())
    }

    /// `max(min_attempts, count * attempts_per_nickname)`
    pub fn max_attempts(&self, count: usize) -> usize {
        count
            .saturating_mul(self.attempts_per_nickname)
            .max(self.min_attempts)
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| NickForgeError::config(format!("Invalid integer config key: {}={}", key, raw))),
        _ => Ok(None),
    }
}

/// Single-character remap table, written as `"a:4, e:3"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharMap(HashMap<char, char>);

impl CharMap {
    pub fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self(pairs.iter().copied().collect())
    }

    pub fn get(&self, symbol: char) -> Option<char> {
        self.0.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for CharMap {
    type Err = NickForgeError;

    fn from_str(raw: &str) -> Result<Self> {
        let mut mapping = HashMap::new();
        for pair in raw.split(',') {
            let trimmed = pair.trim();
            if trimmed.is_empty() {
                continue;
            }
            let parts: Vec<&str> = trimmed.split(':').collect();
            let (from, to) = match parts.as_slice() {
                [from, to] => (single_char(from), single_char(to)),
                _ => (None, None),
            };
            match (from, to) {
                (Some(from), Some(to)) => {
                    mapping.insert(from, to);
                }
                _ => {
                    return Err(NickForgeError::config(format!(
                        "Invalid mapping entry: {}",
                        trimmed
                    )))
                }
            }
        }

        if mapping.is_empty() {
            return Err(NickForgeError::config("Mapping must contain at least one entry"));
        }
        Ok(Self(mapping))
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl TryFrom<String> for CharMap {
    type Error = NickForgeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CharMap> for String {
    fn from(map: CharMap) -> Self {
        let mut pairs: Vec<(char, char)> = map.0.into_iter().collect();
        pairs.sort();
        pairs
            .iter()
            .map(|(from, to)| format!("{}:{}", from, to))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Read any configuration struct from a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NickForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    serde_json::from_str(&content).map_err(|e| NickForgeError::parse(e.to_string(), Some(content)))
}

pub(crate) fn require_text(value: &str, key: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NickForgeError::config(format!("Missing required config key: {}", key)));
    }
    Ok(())
}

pub(crate) fn require_words(words: &[String], key: &str) -> Result<()> {
    if words.is_empty() {
        return Err(NickForgeError::config(format!("Word list is empty: {}", key)));
    }
    Ok(())
}

/// Like [`require_words`] but every entry must also be non-blank
pub(crate) fn require_non_blank_words(words: &[String], key: &str) -> Result<()> {
    require_words(words, key)?;
    if words.iter().any(|w| w.trim().is_empty()) {
        return Err(NickForgeError::config(format!("Word list contains a blank entry: {}", key)));
    }
    Ok(())
}

pub(crate) fn require_percent(value: u32, key: &str) -> Result<()> {
    if value > 100 {
        return Err(NickForgeError::config(format!(
            "Config key out of range: {}={}, expected 0..100",
            key, value
        )));
    }
    Ok(())
}

/// Mutually exclusive outcomes may not claim more than the whole roll
pub(crate) fn require_percent_sum(values: &[(u32, &str)]) -> Result<()> {
    for (value, key) in values {
        require_percent(*value, key)?;
    }
    let total: u32 = values.iter().map(|(v, _)| v).sum();
    if total > 100 {
        let keys: Vec<&str> = values.iter().map(|(_, k)| *k).collect();
        return Err(NickForgeError::config(format!(
            "{} must be <= 100 in total (got {})",
            keys.join("/"),
            total
        )));
    }
    Ok(())
}

pub(crate) fn require_range(min: u32, max: u32, min_key: &str, max_key: &str) -> Result<()> {
    if min > max {
        return Err(NickForgeError::config(format!(
            "{} must be <= {} ({} > {})",
            min_key, max_key, min, max
        )));
    }
    Ok(())
}

pub(crate) fn require_weights(weights: &[u32], key: &str) -> Result<()> {
    if weights.iter().any(|w| *w > 1000) {
        return Err(NickForgeError::config(format!("{} weights must be <= 1000", key)));
    }
    if weights.iter().sum::<u32>() < 1 {
        return Err(NickForgeError::config(format!(
            "At least one {} weight must be > 0",
            key
        )));
    }
    Ok(())
}

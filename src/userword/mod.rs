//! Splicing a user-chosen word into a generated candidate
//!
//! The word either replaces one token of the candidate or is glued to it,
//! and in match mode it is restyled after the token it lands next to:
//! same script, similar leet density, same letter-case shape.

pub mod casing;
pub mod translit;

pub use casing::CasePattern;

use std::collections::HashMap;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::config::CharMap;
use crate::error::{NickForgeError, Result};
use crate::style::transform::leet_replace;
use crate::text::{first_letter_script, normalize_word, split_number_suffix};
use crate::types::option_keys;

/// Match-mode leet chance: base, per reference digit, ceiling
const LEET_BASE_PERCENT: u32 = 25;
const LEET_PERCENT_PER_DIGIT: u32 = 15;
const LEET_MAX_PERCENT: u32 = 85;

/// Leet table used when matching a reference that contains digits
const LEET_PAIRS: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('b', '8'),
    ('z', '2'),
    ('а', '4'),
    ('е', '3'),
    ('о', '0'),
    ('с', '5'),
    ('т', '7'),
    ('в', '8'),
    ('з', '2'),
];

/// Explicit token separators, in lookup order
const SEPARATORS: &[char] = &['_', '-', '.'];

/// Where the word goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserWordPosition {
    /// Front or back, decided by a coin flip per candidate
    #[default]
    Smart,
    Start,
    End,
}

impl FromStr for UserWordPosition {
    type Err = NickForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" | "prefix" | "first" => Ok(UserWordPosition::Start),
            "end" | "suffix" | "last" => Ok(UserWordPosition::End),
            "smart" | "auto" | "random" => Ok(UserWordPosition::Smart),
            _ => Err(NickForgeError::invalid_request(format!(
                "Unsupported userWordPosition: {}. Allowed: start, end, smart",
                s
            ))),
        }
    }
}

/// How the word is restyled before it goes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserWordStyle {
    #[default]
    Plain,
    Match,
}

impl FromStr for UserWordStyle {
    type Err = NickForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "raw" => Ok(UserWordStyle::Plain),
            "match" | "styled" | "style" => Ok(UserWordStyle::Match),
            _ => Err(NickForgeError::invalid_request(format!(
                "Unsupported userWordStyle: {}. Allowed: plain, match",
                s
            ))),
        }
    }
}

fn option<'a>(options: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    options
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// Normalized user word, `None` when missing or blank after normalization
pub fn resolve_user_word(options: &HashMap<String, String>) -> Option<String> {
    option(options, option_keys::USER_WORD)
        .map(normalize_word)
        .filter(|word| !word.is_empty())
}

pub fn resolve_position(options: &HashMap<String, String>) -> Result<UserWordPosition> {
    option(options, option_keys::USER_WORD_POSITION)
        .map(str::parse)
        .unwrap_or(Ok(UserWordPosition::default()))
}

pub fn resolve_style(options: &HashMap<String, String>) -> Result<UserWordStyle> {
    option(options, option_keys::USER_WORD_STYLE)
        .map(str::parse)
        .unwrap_or(Ok(UserWordStyle::default()))
}

/// Splices one normalized word into candidates
#[derive(Debug, Clone)]
pub struct UserWordStyler {
    word: String,
    position: UserWordPosition,
    style: UserWordStyle,
    leet_map: CharMap,
}

impl UserWordStyler {
    pub fn new(word: impl Into<String>, position: UserWordPosition, style: UserWordStyle) -> Self {
        Self {
            word: word.into(),
            position,
            style,
            leet_map: CharMap::from_pairs(LEET_PAIRS),
        }
    }

    /// Styler for a request's options, `None` when no user word is set.
    /// Position and style values are validated even without a word.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Option<Self>> {
        let position = resolve_position(options)?;
        let style = resolve_style(options)?;
        Ok(resolve_user_word(options).map(|word| Self::new(word, position, style)))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn position(&self) -> UserWordPosition {
        self.position
    }

    pub fn style(&self) -> UserWordStyle {
        self.style
    }

    pub fn apply(&self, candidate: &str, rng: &mut dyn RngCore) -> String {
        if candidate.trim().is_empty() || self.word.trim().is_empty() {
            return candidate.to_string();
        }
        if candidate.to_lowercase().contains(&self.word.to_lowercase()) {
            return candidate.to_string();
        }

        let (base, suffix) = split_number_suffix(candidate);
        if base.trim().is_empty() {
            return self.stylize(candidate, rng) + suffix;
        }

        if let Some(separator) = SEPARATORS.iter().copied().find(|s| base.contains(*s)) {
            let mut tokens: Vec<String> = base.split(separator).map(str::to_string).collect();
            let index = self.token_index(tokens.len(), rng);
            let reference = if tokens[index].trim().is_empty() {
                base.to_string()
            } else {
                tokens[index].clone()
            };
            tokens[index] = self.stylize(&reference, rng);
            let glue = separator.to_string();
            return tokens.join(glue.as_str()) + suffix;
        }

        if let Some(split) = second_token_start(base) {
            let (first, tail) = base.split_at(split);
            let mut position = self.position;
            if position == UserWordPosition::Smart && rng.gen_bool(0.5) {
                position = UserWordPosition::End;
            }

            let styled = self.stylize(first, rng);
            return if position == UserWordPosition::End {
                join(first, &styled) + suffix
            } else {
                join(&styled, tail) + suffix
            };
        }

        let at_end = match self.position {
            UserWordPosition::End => true,
            UserWordPosition::Smart => rng.gen_bool(0.5),
            UserWordPosition::Start => false,
        };
        let styled = self.stylize(base, rng);
        if at_end {
            join(base, &styled) + suffix
        } else {
            join(&styled, base) + suffix
        }
    }

    fn token_index(&self, count: usize, rng: &mut dyn RngCore) -> usize {
        if count < 2 {
            return 0;
        }
        match self.position {
            UserWordPosition::Start => 0,
            UserWordPosition::End => count - 1,
            UserWordPosition::Smart => {
                if rng.gen_bool(0.5) {
                    0
                } else {
                    count - 1
                }
            }
        }
    }

    /// Match mode: script, then leet, then case, all taken from `reference`
    fn stylize(&self, reference: &str, rng: &mut dyn RngCore) -> String {
        if self.style == UserWordStyle::Plain || reference.trim().is_empty() {
            return self.word.clone();
        }

        let word = match translit::dominant_script(reference) {
            Some(script) => translit::transliterate(&self.word, script),
            None => self.word.clone(),
        };

        let digits = reference.chars().filter(|c| c.is_ascii_digit()).count() as u32;
        let word = if digits == 0 {
            word
        } else {
            let percent = LEET_BASE_PERCENT
                .saturating_add(digits.saturating_mul(LEET_PERCENT_PER_DIGIT))
                .min(LEET_MAX_PERCENT);
            leet_replace(&word, &self.leet_map, percent, rng)
        };

        CasePattern::of(reference).apply(&word)
    }
}

/// Glue two pieces; `_` only between different scripts
fn join(left: &str, right: &str) -> String {
    match (first_letter_script(left), first_letter_script(right)) {
        (Some(a), Some(b)) if a != b => format!("{}_{}", left, right),
        _ => format!("{}{}", left, right),
    }
}

/// Byte offset of the first lower->upper or digit->letter transition
fn second_token_start(base: &str) -> Option<usize> {
    let mut previous: Option<char> = None;
    for (offset, current) in base.char_indices() {
        if let Some(prev) = previous {
            if (prev.is_lowercase() && current.is_uppercase())
                || (prev.is_ascii_digit() && current.is_alphabetic())
            {
                return Some(offset);
            }
        }
        previous = Some(current);
    }
    None
}

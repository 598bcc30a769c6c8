//! Building blocks shared by the style generators
//!
//! Every function draws from the supplied random source only, so identical
//! draw sequences always yield identical output.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::CharMap;
use crate::text::{alternating_case, capitalize, has_mixed_scripts};

/// Uniform pick; an empty list yields an empty string
pub fn pick<'a>(words: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    words.choose(rng).map(String::as_str).unwrap_or("")
}

/// Uniform integer in `min..=max`
pub fn random_between(rng: &mut dyn RngCore, min: u32, max: u32) -> u32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Draw in `[0, 100)` and compare against `percent`
pub fn chance(rng: &mut dyn RngCore, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}

/// Percent-interval pick over ordered outcomes.
///
/// One draw in `[0, 100)` walks the outcomes in declaration order,
/// subtracting each percentage; the interval containing the draw wins and
/// the unallocated remainder maps to `fallback`. Reordering `outcomes`
/// changes which draws map to which outcome.
pub fn percent_pick<T: Copy>(outcomes: &[(T, u32)], fallback: T, rng: &mut dyn RngCore) -> T {
    let mut roll = rng.gen_range(0..100u32);
    for (outcome, percent) in outcomes {
        if roll < *percent {
            return *outcome;
        }
        roll -= percent;
    }
    fallback
}

/// Same walk as [`percent_pick`] but over the total weight instead of 100
pub fn weighted_pick<T: Copy>(outcomes: &[(T, u32)], rng: &mut dyn RngCore) -> Option<T> {
    let total: u32 = outcomes.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for (outcome, weight) in outcomes {
        if roll < *weight {
            return Some(*outcome);
        }
        roll -= weight;
    }
    None
}

/// Per-letter digit substitution. Lookup is on the lower-cased letter, the
/// draw only happens for mapped letters and untouched letters keep their case.
pub fn leet_replace(token: &str, leet_map: &CharMap, percent: u32, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(token.len());
    for symbol in token.chars() {
        let lower = symbol.to_lowercase().next().unwrap_or(symbol);
        match leet_map.get(lower) {
            Some(digit) if chance(rng, percent) => out.push(digit),
            _ => out.push(symbol),
        }
    }
    out
}

/// Swap individual letters for look-alikes of the other script, one
/// independent draw per character.
pub fn mix_scripts(
    token: &str,
    latin_to_cyr: &CharMap,
    cyr_to_latin: &CharMap,
    percent: u32,
    rng: &mut dyn RngCore,
) -> String {
    let mut out = String::with_capacity(token.len());
    for symbol in token.chars() {
        if !chance(rng, percent) {
            out.push(symbol);
            continue;
        }
        let swapped = latin_to_cyr
            .get(symbol)
            .or_else(|| cyr_to_latin.get(symbol))
            .unwrap_or(symbol);
        out.push(swapped);
    }
    out
}

/// [`mix_scripts`] for styles that must keep each token in one script:
/// a token that ends up mixed is returned unmixed.
pub fn mix_scripts_consistent(
    token: &str,
    latin_to_cyr: &CharMap,
    cyr_to_latin: &CharMap,
    percent: u32,
    rng: &mut dyn RngCore,
) -> String {
    let mixed = mix_scripts(token, latin_to_cyr, cyr_to_latin, percent, rng);
    if has_mixed_scripts(&mixed) && !has_mixed_scripts(token) {
        token.to_string()
    } else {
        mixed
    }
}

/// Whole-token casing applied by the styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    Upper,
    Lower,
    /// Upper/lower flip per letter, starting upper
    Alternating,
    /// First half lower, second half upper
    Contrast,
    Capitalized,
    /// Last two characters upper, the rest lower
    TailUpper,
}

impl CaseStyle {
    pub fn apply(self, token: &str) -> String {
        match self {
            CaseStyle::Upper => token.to_uppercase(),
            CaseStyle::Lower => token.to_lowercase(),
            CaseStyle::Alternating => alternating_case(token, true),
            CaseStyle::Contrast => contrast_case(token),
            CaseStyle::Capitalized => capitalize(token),
            CaseStyle::TailUpper => tail_upper_case(token),
        }
    }
}

fn contrast_case(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 2 {
        return token.to_uppercase();
    }
    let split = chars.len() / 2;
    let head: String = chars[..split].iter().collect();
    let tail: String = chars[split..].iter().collect();
    head.to_lowercase() + &tail.to_uppercase()
}

fn tail_upper_case(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 2 {
        return token.to_string();
    }
    let split = chars.len() - 2;
    let head: String = chars[..split].iter().collect();
    let tail: String = chars[split..].iter().collect();
    head.to_lowercase() + &tail.to_uppercase()
}

/// Separators that produce nonsense when nested
pub fn is_aggressive_separator(separator: &str) -> bool {
    separator == "/" || separator == "|"
}

pub fn contains_hard_separator(token: &str) -> bool {
    token.contains('/') || token.contains('|') || token.contains("::") || token.contains("__")
}

/// Replace the first `separator` occurrence with `symbol`
pub fn inject_at_separator(nickname: &str, separator: &str, symbol: &str) -> String {
    if separator.is_empty() {
        return nickname.to_string();
    }
    match nickname.find(separator) {
        Some(index) => format!(
            "{}{}{}",
            &nickname[..index],
            symbol,
            &nickname[index + separator.len()..]
        ),
        None => nickname.to_string(),
    }
}

//! Character-level helpers shared by the styles and the user-word styler

use regex::Regex;
use std::sync::OnceLock;

/// Writing system of a letter, as far as nicknames care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
    Other,
}

/// Script of `symbol`, or `None` for non-letters
pub fn script_of(symbol: char) -> Option<Script> {
    if !symbol.is_alphabetic() {
        return None;
    }
    let script = match symbol {
        'a'..='z' | 'A'..='Z' => Script::Latin,
        '\u{00C0}'..='\u{024F}' if symbol != '\u{00D7}' && symbol != '\u{00F7}' => Script::Latin,
        '\u{1E00}'..='\u{1EFF}' => Script::Latin,
        '\u{0400}'..='\u{052F}' | '\u{1C80}'..='\u{1C8F}' | '\u{2DE0}'..='\u{2DFF}'
        | '\u{A640}'..='\u{A69F}' => Script::Cyrillic,
        _ => Script::Other,
    };
    Some(script)
}

/// Script of the first letter in `value`
pub fn first_letter_script(value: &str) -> Option<Script> {
    value.chars().find_map(script_of)
}

/// Whether a token holds both Latin and Cyrillic letters
pub fn has_mixed_scripts(token: &str) -> bool {
    let mut latin = false;
    let mut cyrillic = false;
    for symbol in token.chars() {
        match script_of(symbol) {
            Some(Script::Latin) => latin = true,
            Some(Script::Cyrillic) => cyrillic = true,
            _ => {}
        }
        if latin && cyrillic {
            return true;
        }
    }
    false
}

fn word_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_\-]+").expect("static regex"))
}

fn token_delimiters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static regex"))
}

/// Alphanumeric runs of a candidate, split on everything else
pub fn alphanumeric_tokens(value: &str) -> impl Iterator<Item = &str> {
    token_delimiters().split(value).filter(|t| !t.is_empty())
}

/// Any alphanumeric run of `value` mixes Latin and Cyrillic
pub fn has_mixed_script_token(value: &str) -> bool {
    alphanumeric_tokens(value).any(has_mixed_scripts)
}

pub fn push_upper(out: &mut String, symbol: char) {
    out.extend(symbol.to_uppercase());
}

pub fn push_lower(out: &mut String, symbol: char) {
    out.extend(symbol.to_lowercase());
}

/// First letter upper, rest lower
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            push_upper(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// `"night_owl-rider x"` -> `"NightOwlRiderX"`
pub fn normalize_word(raw: &str) -> String {
    word_separators()
        .split(raw.trim())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Flip case letter by letter; non-letters pass through without
/// breaking the flip sequence.
pub fn alternating_case(value: &str, start_upper: bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper = start_upper;
    for symbol in value.chars() {
        if !symbol.is_alphabetic() {
            out.push(symbol);
            continue;
        }
        if upper {
            push_upper(&mut out, symbol);
        } else {
            push_lower(&mut out, symbol);
        }
        upper = !upper;
    }
    out
}

/// Trailing run of ASCII digits split off: `"Phantom806"` -> `("Phantom", "806")`
pub fn split_number_suffix(value: &str) -> (&str, &str) {
    let end = value.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    value.split_at(end)
}

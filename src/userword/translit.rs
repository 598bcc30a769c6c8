//! Approximate Latin <-> Cyrillic transliteration
//!
//! Lossy on purpose: digraphs collapse to one letter one way and expand the
//! other way, so lengths are not preserved.

use crate::text::{script_of, Script};

/// Latin sequences, longest first
const LATIN_TO_CYRILLIC: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sh", "ш"),
    ("ch", "ч"),
    ("zh", "ж"),
    ("ts", "ц"),
    ("kh", "х"),
    ("ya", "я"),
    ("yu", "ю"),
    ("yo", "ё"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "дж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "й"),
    ("z", "з"),
];

const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
];

/// Majority script of a reference's letters; ties go to Latin, no Latin or
/// Cyrillic letters at all gives `None`.
pub fn dominant_script(reference: &str) -> Option<Script> {
    let (mut latin, mut cyrillic) = (0usize, 0usize);
    for symbol in reference.chars() {
        match script_of(symbol) {
            Some(Script::Latin) => latin += 1,
            Some(Script::Cyrillic) => cyrillic += 1,
            _ => {}
        }
    }
    match (latin, cyrillic) {
        (0, 0) => None,
        (l, c) if c > l => Some(Script::Cyrillic),
        _ => Some(Script::Latin),
    }
}

/// Rewrite `word` in `target` script; letters already in it pass through
pub fn transliterate(word: &str, target: Script) -> String {
    match target {
        Script::Latin => to_latin(word),
        Script::Cyrillic => to_cyrillic(word),
        Script::Other => word.to_string(),
    }
}

/// Upper-case the first letter of `mapped` when `source` started upper
fn carry_case(mapped: &str, upper: bool, out: &mut String) {
    let mut chars = mapped.chars();
    match chars.next() {
        Some(first) if upper => {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        _ => out.push_str(mapped),
    }
}

pub fn to_cyrillic(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut out = String::with_capacity(word.len() * 2);
    let mut index = 0;
    while index < chars.len() {
        let matched = LATIN_TO_CYRILLIC.iter().find(|(latin, _)| {
            let len = latin.chars().count();
            index + len <= lower.len() && latin.chars().eq(lower[index..index + len].iter().copied())
        });

        match matched {
            Some((latin, cyrillic)) => {
                carry_case(cyrillic, chars[index].is_uppercase(), &mut out);
                index += latin.chars().count();
            }
            None => {
                out.push(chars[index]);
                index += 1;
            }
        }
    }
    out
}

pub fn to_latin(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for symbol in word.chars() {
        let lower = symbol.to_lowercase().next().unwrap_or(symbol);
        match CYRILLIC_TO_LATIN.iter().find(|(cyrillic, _)| *cyrillic == lower) {
            Some((_, latin)) => carry_case(latin, symbol.is_uppercase(), &mut out),
            None => out.push(symbol),
        }
    }
    out
}

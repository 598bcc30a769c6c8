//! Letter-case patterns lifted from a reference token

use crate::text::{alternating_case, push_lower, push_upper};

/// Upper/lower shape of a reference's letters, non-letters ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasePattern {
    /// Reference has no letters; the word is left alone
    Empty,
    AllUpper,
    AllLower,
    /// At least three letters, no two neighbours share a case
    Alternating { start_upper: bool },
    /// Anything else, applied cyclically over the word's letters
    Periodic(Vec<bool>),
}

impl CasePattern {
    pub fn of(reference: &str) -> Self {
        let pattern: Vec<bool> = reference
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(char::is_uppercase)
            .collect();

        if pattern.is_empty() {
            CasePattern::Empty
        } else if pattern.iter().all(|upper| *upper) {
            CasePattern::AllUpper
        } else if pattern.iter().all(|upper| !*upper) {
            CasePattern::AllLower
        } else if pattern.len() >= 3 && pattern.windows(2).all(|pair| pair[0] != pair[1]) {
            CasePattern::Alternating {
                start_upper: pattern[0],
            }
        } else {
            CasePattern::Periodic(pattern)
        }
    }

    pub fn apply(&self, word: &str) -> String {
        match self {
            CasePattern::Empty => word.to_string(),
            CasePattern::AllUpper => word.to_uppercase(),
            CasePattern::AllLower => word.to_lowercase(),
            CasePattern::Alternating { start_upper } => alternating_case(word, *start_upper),
            CasePattern::Periodic(pattern) => {
                let mut out = String::with_capacity(word.len());
                let mut letter = 0;
                for symbol in word.chars() {
                    if !symbol.is_alphabetic() {
                        out.push(symbol);
                        continue;
                    }
                    if pattern[letter % pattern.len()] {
                        push_upper(&mut out, symbol);
                    } else {
                        push_lower(&mut out, symbol);
                    }
                    letter += 1;
                }
                out
            }
        }
    }
}

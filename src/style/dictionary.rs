//! Grouped-vocabulary template composition
//!
//! Each locale's words are partitioned into semantic groups per part of
//! speech. A two-slot template only draws from groups present in both
//! slots, so "stormy" is never paired with a verb group that lacks it.

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::transform::{pick, random_between};
use super::words::{self, GroupedWords};
use super::{StyleGenerator, DICTIONARY};
use crate::config::{require_non_blank_words, require_range, require_text};
use crate::error::{NickForgeError, Result};
use crate::text::normalize_word;
use crate::types::{NicknameLocale, NicknameTemplate, RequestContext};

/// Group name -> words. Ordered so the group draw is reproducible.
pub type GroupedBank = BTreeMap<String, Vec<String>>;

/// All words of one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleWordBank {
    pub adjectives: GroupedBank,
    pub nouns: GroupedBank,
    pub verbs: GroupedBank,
}

impl LocaleWordBank {
    pub fn from_groups(adjectives: GroupedWords, nouns: GroupedWords, verbs: GroupedWords) -> Self {
        Self {
            adjectives: to_bank(adjectives),
            nouns: to_bank(nouns),
            verbs: to_bank(verbs),
        }
    }

    /// Read `adjectives.txt`, `nouns.txt` and `verbs.txt` from `dir`,
    /// each in the `group|word` line format.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<GroupedBank> {
            let path = dir.join(name);
            let source = path.to_string_lossy().to_string();
            let content = std::fs::read_to_string(&path)
                .map_err(|e| NickForgeError::io(e.to_string(), Some(source.clone())))?;
            parse_grouped_words(&source, &content)
        };

        let bank = Self {
            adjectives: read("adjectives.txt")?,
            nouns: read("nouns.txt")?,
            verbs: read("verbs.txt")?,
        };
        bank.validate("bank")?;
        Ok(bank)
    }

    pub fn validate(&self, key: &str) -> Result<()> {
        validate_groups(&self.adjectives, &format!("{}.adjectives", key))?;
        validate_groups(&self.nouns, &format!("{}.nouns", key))?;
        validate_groups(&self.verbs, &format!("{}.verbs", key))
    }

    fn slots(&self, template: NicknameTemplate) -> (&GroupedBank, &GroupedBank) {
        match template {
            NicknameTemplate::AdjNoun | NicknameTemplate::AdjNounNumber => {
                (&self.adjectives, &self.nouns)
            }
            NicknameTemplate::NounVerb => (&self.nouns, &self.verbs),
        }
    }
}

fn to_bank(groups: GroupedWords) -> GroupedBank {
    groups
        .iter()
        .map(|(group, list)| (group.to_string(), words::owned(list)))
        .collect()
}

fn validate_groups(bank: &GroupedBank, key: &str) -> Result<()> {
    if bank.is_empty() {
        return Err(NickForgeError::config(format!("Dictionary has no groups: {}", key)));
    }
    for (group, list) in bank {
        if group.trim().is_empty() {
            return Err(NickForgeError::config(format!("Blank group name in {}", key)));
        }
        require_non_blank_words(list, &format!("{}.{}", key, group))?;
    }
    Ok(())
}

/// Parse `group|word` lines. Blank lines and `#` comments are skipped.
pub fn parse_grouped_words(source: &str, content: &str) -> Result<GroupedBank> {
    let mut bank = GroupedBank::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let entry = trimmed
            .split_once('|')
            .map(|(group, word)| (group.trim(), word.trim()))
            .filter(|(group, word)| !group.is_empty() && !word.is_empty());

        match entry {
            Some((group, word)) => bank
                .entry(group.to_string())
                .or_default()
                .push(word.to_string()),
            None => {
                return Err(NickForgeError::config(format!(
                    "Malformed word entry in {} line {}: {}",
                    source,
                    index + 1,
                    trimmed
                )))
            }
        }
    }
    Ok(bank)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub display_name: String,
    pub description: String,
    pub number_min: u32,
    pub number_max: u32,
    pub banks: BTreeMap<NicknameLocale, LocaleWordBank>,
}

impl DictionaryConfig {
    pub fn builtin() -> Self {
        let mut banks = BTreeMap::new();
        banks.insert(
            NicknameLocale::En,
            LocaleWordBank::from_groups(words::EN_ADJECTIVES, words::EN_NOUNS, words::EN_VERBS),
        );
        banks.insert(
            NicknameLocale::Ru,
            LocaleWordBank::from_groups(words::RU_ADJECTIVES, words::RU_NOUNS, words::RU_VERBS),
        );

        Self {
            display_name: "Dictionary".to_string(),
            description: "Adjective, noun and verb pairs from themed word groups".to_string(),
            number_min: 10,
            number_max: 9999,
            banks,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.display_name, "display_name")?;
        require_range(self.number_min, self.number_max, "number_min", "number_max")?;
        if self.banks.is_empty() {
            return Err(NickForgeError::config("Dictionary needs at least one locale bank"));
        }
        for (locale, bank) in &self.banks {
            bank.validate(&locale.to_string())?;
        }
        Ok(())
    }
}

pub struct DictionaryStyle {
    config: DictionaryConfig,
}

impl DictionaryStyle {
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(DictionaryConfig::builtin())
    }

    fn compose(
        &self,
        bank: &LocaleWordBank,
        context: &RequestContext,
        rng: &mut dyn RngCore,
    ) -> Result<String> {
        let (left, right) = bank.slots(context.template);
        let groups: Vec<&String> = left.keys().filter(|g| right.contains_key(*g)).collect();

        let group = groups.choose(rng).copied().ok_or_else(|| {
            NickForgeError::config(format!(
                "No shared word groups for template {} in locale {}",
                context.template, context.locale
            ))
        })?;

        let first = pick(&left[group], rng);
        let second = pick(&right[group], rng);
        Ok(normalize_word(first) + &normalize_word(second))
    }
}

impl StyleGenerator for DictionaryStyle {
    fn id(&self) -> &str {
        DICTIONARY
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn generate(&self, context: &RequestContext, rng: &mut dyn RngCore) -> Result<String> {
        let bank = self.config.banks.get(&context.locale).ok_or_else(|| {
            NickForgeError::config(format!("No dictionary for locale: {}", context.locale))
        })?;

        let mut value = self.compose(bank, context, rng)?;
        if context.template == NicknameTemplate::AdjNounNumber {
            let number = random_between(rng, self.config.number_min, self.config.number_max);
            value.push_str(&number.to_string());
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_source;
    use regex::Regex;
    use std::io::Write;

    fn context(locale: NicknameLocale, template: NicknameTemplate) -> RequestContext {
        RequestContext::new(locale, template)
    }

    #[test]
    fn test_english_templates() {
        let style = DictionaryStyle::builtin().unwrap();
        let mut rng = random_source(Some(11));
        let pair = Regex::new(r"^[A-Z][a-z]+[A-Z][a-z]+$").unwrap();
        let numbered = Regex::new(r"^[A-Z][a-z]+[A-Z][a-z]+\d{2,4}$").unwrap();

        for _ in 0..50 {
            let adj_noun = style
                .generate(&context(NicknameLocale::En, NicknameTemplate::AdjNoun), &mut rng)
                .unwrap();
            assert!(pair.is_match(&adj_noun), "{}", adj_noun);

            let noun_verb = style
                .generate(&context(NicknameLocale::En, NicknameTemplate::NounVerb), &mut rng)
                .unwrap();
            assert!(pair.is_match(&noun_verb), "{}", noun_verb);

            let with_number = style
                .generate(&context(NicknameLocale::En, NicknameTemplate::AdjNounNumber), &mut rng)
                .unwrap();
            assert!(numbered.is_match(&with_number), "{}", with_number);
        }
    }

    #[test]
    fn test_russian_bank() {
        let style = DictionaryStyle::builtin().unwrap();
        let mut rng = random_source(Some(12));
        for template in NicknameTemplate::ALL {
            let value = style.generate(&context(NicknameLocale::Ru, template), &mut rng).unwrap();
            assert!(!value.trim().is_empty());
            assert!(value.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let style = DictionaryStyle::builtin().unwrap();
        let ctx = context(NicknameLocale::En, NicknameTemplate::AdjNounNumber);
        let mut first = random_source(Some(99));
        let mut second = random_source(Some(99));
        for _ in 0..20 {
            assert_eq!(
                style.generate(&ctx, &mut first).unwrap(),
                style.generate(&ctx, &mut second).unwrap()
            );
        }
    }

    fn tiny_config() -> DictionaryConfig {
        let mut config = DictionaryConfig::builtin();
        config.banks.clear();
        config.banks.insert(
            NicknameLocale::En,
            LocaleWordBank::from_groups(
                &[("nature", &["silent"])],
                &[("nature", &["forest"])],
                &[("nature", &["flows"])],
            ),
        );
        config
    }

    #[test]
    fn test_missing_locale_is_config_error() {
        let style = DictionaryStyle::new(tiny_config()).unwrap();
        let mut rng = random_source(Some(1));
        let err = style
            .generate(&context(NicknameLocale::Ru, NicknameTemplate::AdjNoun), &mut rng)
            .unwrap_err();
        assert!(matches!(err, NickForgeError::Config { .. }));
    }

    #[test]
    fn test_empty_intersection_is_config_error() {
        let mut config = tiny_config();
        config.banks.insert(
            NicknameLocale::En,
            LocaleWordBank::from_groups(
                &[("weather", &["stormy"])],
                &[("nature", &["forest"])],
                &[("music", &["plays"])],
            ),
        );
        let style = DictionaryStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));

        for template in NicknameTemplate::ALL {
            let err = style
                .generate(&context(NicknameLocale::En, template), &mut rng)
                .unwrap_err();
            assert!(err.to_string().contains("No shared word groups"), "{}", err);
        }
    }

    #[test]
    fn test_tiny_bank_single_candidate() {
        let style = DictionaryStyle::new(tiny_config()).unwrap();
        let mut rng = random_source(Some(3));
        let ctx = context(NicknameLocale::En, NicknameTemplate::AdjNoun);
        assert_eq!(style.generate(&ctx, &mut rng).unwrap(), "SilentForest");
        assert_eq!(style.generate(&ctx, &mut rng).unwrap(), "SilentForest");
    }

    #[test]
    fn test_validation() {
        let mut config = tiny_config();
        config.number_min = 100;
        config.number_max = 10;
        assert!(DictionaryStyle::new(config).is_err());

        let mut config = tiny_config();
        if let Some(bank) = config.banks.get_mut(&NicknameLocale::En) {
            bank.nouns.insert("empty".to_string(), Vec::new());
        }
        assert!(DictionaryStyle::new(config).is_err());

        let mut config = tiny_config();
        config.banks.clear();
        assert!(DictionaryStyle::new(config).is_err());
    }

    #[test]
    fn test_parse_grouped_words() {
        let content = "# nature words\nnature|silent\n\n nature | misty \ntech|neon\n";
        let bank = parse_grouped_words("adjectives.txt", content).unwrap();
        assert_eq!(bank["nature"], vec!["silent".to_string(), "misty".to_string()]);
        assert_eq!(bank["tech"], vec!["neon".to_string()]);

        let err = parse_grouped_words("nouns.txt", "nature|forest\nbroken line\n").unwrap_err();
        assert!(err.to_string().contains("nouns.txt line 2"), "{}", err);
        assert!(parse_grouped_words("nouns.txt", "|forest").is_err());
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in [
            ("adjectives.txt", "space|cosmic\n"),
            ("nouns.txt", "space|comet\n"),
            ("verbs.txt", "space|orbits\n"),
        ] {
            let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(content.as_bytes()).unwrap();
        }

        let bank = LocaleWordBank::load_dir(dir.path()).unwrap();
        assert_eq!(bank.verbs["space"], vec!["orbits".to_string()]);

        let missing = LocaleWordBank::load_dir(&dir.path().join("nope"));
        assert!(matches!(missing, Err(NickForgeError::Io { .. })));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "display_name": "Tiny",
            "description": "",
            "number_min": 10,
            "number_max": 99,
            "banks": {"en": {"adjectives": {"a": ["swift"]}, "nouns": {"a": ["fox"]}, "verbs": {"a": ["naps"]}}}
        }"#;
        let config: DictionaryConfig = serde_json::from_str(json).unwrap();
        let style = DictionaryStyle::new(config).unwrap();
        let mut rng = random_source(Some(4));
        let value = style
            .generate(&context(NicknameLocale::En, NicknameTemplate::NounVerb), &mut rng)
            .unwrap();
        assert_eq!(value, "FoxNaps");
    }
}

//! Dota pro-scene style
//!
//! Three looks, picked by percent in this order: shouted base with a
//! repeated filler (`TINKERZZZ42`), Cyrillic base and role (`Стас_Роамер`),
//! and the Latin fallback (`VikinPhantom806`).

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::transform::{chance, percent_pick, pick, random_between};
use super::words;
use super::{StyleGenerator, DOTA_PRO};
use crate::config::{
    require_non_blank_words, require_percent, require_percent_sum, require_range, require_text,
};
use crate::error::{NickForgeError, Result};
use crate::types::RequestContext;

const MAX_REPEAT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    UpperRepeat,
    Cyrillic,
    Latin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotaProConfig {
    pub display_name: String,
    pub description: String,
    pub latin_bases: Vec<String>,
    pub latin_suffixes: Vec<String>,
    pub cyrillic_bases: Vec<String>,
    pub cyrillic_suffixes: Vec<String>,
    pub upper_repeat_chance_percent: u32,
    pub cyrillic_chance_percent: u32,
    pub repeat_char: char,
    pub repeat_min: u32,
    pub repeat_max: u32,
    pub upper_number_min: u32,
    pub upper_number_max: u32,
    pub cyrillic_underscore_chance_percent: u32,
    pub latin_number_chance_percent: u32,
    pub latin_number_min: u32,
    pub latin_number_max: u32,
}

impl DotaProConfig {
    pub fn builtin() -> Self {
        Self {
            display_name: "Dota Pro".to_string(),
            description: "Pub and pro-scene Dota handles in Latin or Cyrillic".to_string(),
            latin_bases: words::owned(words::DOTA_LATIN_BASES),
            latin_suffixes: words::owned(words::DOTA_LATIN_SUFFIXES),
            cyrillic_bases: words::owned(words::DOTA_CYRILLIC_BASES),
            cyrillic_suffixes: words::owned(words::DOTA_CYRILLIC_SUFFIXES),
            upper_repeat_chance_percent: 20,
            cyrillic_chance_percent: 35,
            repeat_char: 'Z',
            repeat_min: 1,
            repeat_max: 4,
            upper_number_min: 1,
            upper_number_max: 99,
            cyrillic_underscore_chance_percent: 50,
            latin_number_chance_percent: 45,
            latin_number_min: 1,
            latin_number_max: 999,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.display_name, "display_name")?;
        require_non_blank_words(&self.latin_bases, "latin_bases")?;
        require_non_blank_words(&self.latin_suffixes, "latin_suffixes")?;
        require_non_blank_words(&self.cyrillic_bases, "cyrillic_bases")?;
        require_non_blank_words(&self.cyrillic_suffixes, "cyrillic_suffixes")?;
        require_percent_sum(&[
            (self.upper_repeat_chance_percent, "upper_repeat_chance_percent"),
            (self.cyrillic_chance_percent, "cyrillic_chance_percent"),
        ])?;
        require_percent(
            self.cyrillic_underscore_chance_percent,
            "cyrillic_underscore_chance_percent",
        )?;
        require_percent(self.latin_number_chance_percent, "latin_number_chance_percent")?;
        if self.repeat_char.is_whitespace() {
            return Err(NickForgeError::config("repeat_char must be visible"));
        }
        require_range(self.repeat_min, self.repeat_max, "repeat_min", "repeat_max")?;
        if self.repeat_max > MAX_REPEAT {
            return Err(NickForgeError::config(format!(
                "repeat_max must be <= {}",
                MAX_REPEAT
            )));
        }
        require_range(
            self.upper_number_min,
            self.upper_number_max,
            "upper_number_min",
            "upper_number_max",
        )?;
        require_range(
            self.latin_number_min,
            self.latin_number_max,
            "latin_number_min",
            "latin_number_max",
        )
    }
}

pub struct DotaProStyle {
    config: DotaProConfig,
}

impl DotaProStyle {
    pub fn new(config: DotaProConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(DotaProConfig::builtin())
    }
}

impl StyleGenerator for DotaProStyle {
    fn id(&self) -> &str {
        DOTA_PRO
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn generate(&self, _context: &RequestContext, rng: &mut dyn RngCore) -> Result<String> {
        let config = &self.config;
        let pattern = percent_pick(
            &[
                (Pattern::UpperRepeat, config.upper_repeat_chance_percent),
                (Pattern::Cyrillic, config.cyrillic_chance_percent),
            ],
            Pattern::Latin,
            rng,
        );

        let value = match pattern {
            Pattern::UpperRepeat => {
                let mut value = pick(&config.latin_bases, rng).to_uppercase();
                let repeat = random_between(rng, config.repeat_min, config.repeat_max);
                value.extend(std::iter::repeat(config.repeat_char).take(repeat as usize));
                let number = random_between(rng, config.upper_number_min, config.upper_number_max);
                value.push_str(&number.to_string());
                value
            }
            Pattern::Cyrillic => {
                let mut value = pick(&config.cyrillic_bases, rng).to_string();
                if chance(rng, config.cyrillic_underscore_chance_percent) {
                    value.push('_');
                }
                value.push_str(pick(&config.cyrillic_suffixes, rng));
                value
            }
            Pattern::Latin => {
                let mut value = pick(&config.latin_bases, rng).to_string();
                value.push_str(pick(&config.latin_suffixes, rng));
                if chance(rng, config.latin_number_chance_percent) {
                    let number =
                        random_between(rng, config.latin_number_min, config.latin_number_max);
                    value.push_str(&number.to_string());
                }
                value
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_source;
    use crate::text::has_mixed_script_token;
    use crate::types::{NicknameLocale, NicknameTemplate};
    use regex::Regex;

    fn ctx() -> RequestContext {
        RequestContext::new(NicknameLocale::En, NicknameTemplate::AdjNoun)
    }

    fn single_words() -> DotaProConfig {
        let mut config = DotaProConfig::builtin();
        config.latin_bases = vec!["Vikin".to_string()];
        config.latin_suffixes = vec!["Phantom".to_string()];
        config.cyrillic_bases = vec!["Стас".to_string()];
        config.cyrillic_suffixes = vec!["Роамер".to_string()];
        config
    }

    #[test]
    fn test_upper_repeat_pattern() {
        let mut config = single_words();
        config.upper_repeat_chance_percent = 100;
        config.cyrillic_chance_percent = 0;
        let style = DotaProStyle::new(config).unwrap();
        let mut rng = random_source(Some(6));
        let shape = Regex::new(r"^VIKINZ{1,4}\d{1,2}$").unwrap();
        for _ in 0..30 {
            let value = style.generate(&ctx(), &mut rng).unwrap();
            assert!(shape.is_match(&value), "{}", value);
        }
    }

    #[test]
    fn test_cyrillic_pattern() {
        let mut config = single_words();
        config.upper_repeat_chance_percent = 0;
        config.cyrillic_chance_percent = 100;
        config.cyrillic_underscore_chance_percent = 100;
        let style = DotaProStyle::new(config).unwrap();
        let mut rng = random_source(Some(6));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "Стас_Роамер");
    }

    #[test]
    fn test_latin_fallback() {
        let mut config = single_words();
        config.upper_repeat_chance_percent = 0;
        config.cyrillic_chance_percent = 0;
        config.latin_number_chance_percent = 100;
        config.latin_number_min = 806;
        config.latin_number_max = 806;
        config.upper_number_min = 1;
        config.upper_number_max = 1;
        let style = DotaProStyle::new(config).unwrap();
        let mut rng = random_source(Some(6));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "VikinPhantom806");
    }

    #[test]
    fn test_builtin_tokens_stay_in_one_script() {
        let style = DotaProStyle::builtin().unwrap();
        let mut rng = random_source(Some(31));
        for _ in 0..300 {
            let value = style.generate(&ctx(), &mut rng).unwrap();
            assert!(!has_mixed_script_token(&value), "{}", value);
        }
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut config = DotaProConfig::builtin();
        config.upper_repeat_chance_percent = 70;
        config.cyrillic_chance_percent = 40;
        assert!(DotaProStyle::new(config).is_err());

        let mut config = DotaProConfig::builtin();
        config.repeat_max = 20;
        assert!(DotaProStyle::new(config).is_err());

        let mut config = DotaProConfig::builtin();
        config.repeat_char = ' ';
        assert!(DotaProStyle::new(config).is_err());

        let mut config = DotaProConfig::builtin();
        config.upper_number_min = 50;
        config.upper_number_max = 5;
        assert!(DotaProStyle::new(config).is_err());
    }

    #[test]
    fn test_number_ranges_are_per_pattern() {
        let mut config = single_words();
        config.upper_number_min = 7;
        config.upper_number_max = 7;
        config.latin_number_min = 806;
        config.latin_number_max = 806;
        config.latin_number_chance_percent = 100;
        config.repeat_min = 2;
        config.repeat_max = 2;

        let mut upper = config.clone();
        upper.upper_repeat_chance_percent = 100;
        upper.cyrillic_chance_percent = 0;
        let style = DotaProStyle::new(upper).unwrap();
        let mut rng = random_source(Some(9));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "VIKINZZ7");

        let mut latin = config;
        latin.upper_repeat_chance_percent = 0;
        latin.cyrillic_chance_percent = 0;
        let style = DotaProStyle::new(latin).unwrap();
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "VikinPhantom806");
    }
}

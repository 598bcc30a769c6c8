//! Counter-Strike 1.6 classic style
//!
//! Builds `xXx_K1LL3R|NoOb_xXx`-looking handles out of one to a few tokens.
//! Every token stays in one script: a look-alike swap that leaves a token
//! half Latin and half Cyrillic is undone, differing scripts are never glued
//! together without a separator, and a decoration that would fuse two
//! scripts is left off.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::transform::{
    chance, contains_hard_separator, inject_at_separator, is_aggressive_separator, leet_replace,
    mix_scripts_consistent, percent_pick, pick, random_between, weighted_pick, CaseStyle,
};
use super::words;
use super::{StyleGenerator, COUNTER_STRIKE_16_CLASSIC};
use crate::config::{
    require_non_blank_words, require_percent, require_percent_sum, require_range, require_text,
    require_weights, require_words, CharMap,
};
use crate::error::{NickForgeError, Result};
use crate::text::{first_letter_script, has_mixed_script_token, has_mixed_scripts, Script};
use crate::types::RequestContext;

const MAX_TOKENS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Core,
    Game,
    Meme,
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cs16ClassicConfig {
    pub display_name: String,
    pub description: String,
    pub core_words: Vec<String>,
    pub game_words: Vec<String>,
    pub meme_words: Vec<String>,
    pub random_words: Vec<String>,
    /// May contain `""` for glued tokens
    pub separators: Vec<String>,
    pub decorations: Vec<String>,
    pub math_symbols: Vec<String>,
    pub leet_map: CharMap,
    pub latin_to_cyrillic: CharMap,
    pub cyrillic_to_latin: CharMap,
    pub token_min: u32,
    pub token_max: u32,
    pub core_percent: u32,
    pub game_percent: u32,
    pub meme_percent: u32,
    pub script_mix_chance_percent: u32,
    pub leet_chance_percent: u32,
    pub math_symbol_chance_percent: u32,
    pub decoration_chance_percent: u32,
    pub number_chance_percent: u32,
    pub number_min: u32,
    pub number_max: u32,
    pub upper_case_weight: u32,
    pub lower_case_weight: u32,
    pub alternating_case_weight: u32,
    pub contrast_case_weight: u32,
}

impl Cs16ClassicConfig {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            display_name: "CS 1.6 Classic".to_string(),
            description: "Old-school club handles: leet, decorations and mixed separators"
                .to_string(),
            core_words: words::owned(words::CS16_CORE_WORDS),
            game_words: words::owned(words::CS16_GAME_WORDS),
            meme_words: words::owned(words::CS16_MEME_WORDS),
            random_words: words::owned(words::CS16_RANDOM_WORDS),
            separators: words::owned(words::CS16_SEPARATORS),
            decorations: words::owned(words::CS16_DECORATIONS),
            math_symbols: words::owned(words::CS16_MATH_SYMBOLS),
            leet_map: words::CS16_LEET_MAP.parse()?,
            latin_to_cyrillic: words::LATIN_TO_CYR_MAP.parse()?,
            cyrillic_to_latin: words::CYR_TO_LATIN_MAP.parse()?,
            token_min: 1,
            token_max: 3,
            core_percent: 35,
            game_percent: 25,
            meme_percent: 20,
            script_mix_chance_percent: 15,
            leet_chance_percent: 20,
            math_symbol_chance_percent: 15,
            decoration_chance_percent: 20,
            number_chance_percent: 35,
            number_min: 1,
            number_max: 99,
            upper_case_weight: 30,
            lower_case_weight: 30,
            alternating_case_weight: 20,
            contrast_case_weight: 20,
        })
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.display_name, "display_name")?;
        require_non_blank_words(&self.core_words, "core_words")?;
        require_non_blank_words(&self.game_words, "game_words")?;
        require_non_blank_words(&self.meme_words, "meme_words")?;
        require_non_blank_words(&self.random_words, "random_words")?;
        require_words(&self.separators, "separators")?;
        require_non_blank_words(&self.decorations, "decorations")?;
        require_non_blank_words(&self.math_symbols, "math_symbols")?;

        require_range(self.token_min, self.token_max, "token_min", "token_max")?;
        if self.token_min < 1 || self.token_max > MAX_TOKENS {
            return Err(NickForgeError::config(format!(
                "token range must lie within 1..={} (got {}..={})",
                MAX_TOKENS, self.token_min, self.token_max
            )));
        }

        require_percent_sum(&[
            (self.core_percent, "core_percent"),
            (self.game_percent, "game_percent"),
            (self.meme_percent, "meme_percent"),
        ])?;
        require_percent(self.script_mix_chance_percent, "script_mix_chance_percent")?;
        require_percent(self.leet_chance_percent, "leet_chance_percent")?;
        require_percent(self.math_symbol_chance_percent, "math_symbol_chance_percent")?;
        require_percent(self.decoration_chance_percent, "decoration_chance_percent")?;
        require_percent(self.number_chance_percent, "number_chance_percent")?;
        require_range(self.number_min, self.number_max, "number_min", "number_max")?;
        require_weights(&self.case_weights().map(|(_, w)| w), "case")
    }

    fn case_weights(&self) -> [(CaseStyle, u32); 4] {
        [
            (CaseStyle::Upper, self.upper_case_weight),
            (CaseStyle::Lower, self.lower_case_weight),
            (CaseStyle::Alternating, self.alternating_case_weight),
            (CaseStyle::Contrast, self.contrast_case_weight),
        ]
    }

    fn source_weights(&self) -> [(Source, u32); 3] {
        [
            (Source::Core, self.core_percent),
            (Source::Game, self.game_percent),
            (Source::Meme, self.meme_percent),
        ]
    }

    fn words(&self, source: Source) -> &[String] {
        match source {
            Source::Core => &self.core_words,
            Source::Game => &self.game_words,
            Source::Meme => &self.meme_words,
            Source::Random => &self.random_words,
        }
    }
}

pub struct Cs16ClassicStyle {
    config: Cs16ClassicConfig,
}

impl Cs16ClassicStyle {
    pub fn new(config: Cs16ClassicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(Cs16ClassicConfig::builtin()?)
    }

    /// source pick, then [`Self::transform`]
    fn token(&self, rng: &mut dyn RngCore) -> String {
        let config = &self.config;
        let source = percent_pick(&config.source_weights(), Source::Random, rng);
        let word = pick(config.words(source), rng);
        self.transform(word, rng)
    }

    /// script mix -> leet -> case
    fn transform(&self, word: &str, rng: &mut dyn RngCore) -> String {
        let config = &self.config;
        let mixed = mix_scripts_consistent(
            word,
            &config.latin_to_cyrillic,
            &config.cyrillic_to_latin,
            config.script_mix_chance_percent,
            rng,
        );
        let leeted = leet_replace(&mixed, &config.leet_map, config.leet_chance_percent, rng);
        let case = weighted_pick(&config.case_weights(), rng).unwrap_or(CaseStyle::Upper);
        case.apply(&leeted)
    }
}

/// Hard separators inside a token become `_`; nothing left means `X`
fn neutralize(token: &str) -> String {
    let cleaned: String = token
        .chars()
        .map(|c| if matches!(c, '/' | '|' | ':') { '_' } else { c })
        .collect();
    if cleaned.trim_matches('_').trim().is_empty() {
        "X".to_string()
    } else {
        cleaned
    }
}

/// Join tokens; an empty separator between tokens of different scripts
/// turns into `_` so the result never fuses Latin and Cyrillic.
fn join_tokens(tokens: &[String], separator: &str) -> String {
    let mut nickname = String::new();
    let mut run: Option<Script> = None;
    for (index, token) in tokens.iter().enumerate() {
        let script = first_letter_script(token);
        if index > 0 {
            if !separator.is_empty() {
                nickname.push_str(separator);
                run = None;
            } else if matches!((run, script), (Some(a), Some(b)) if a != b) {
                nickname.push('_');
                run = None;
            }
        }
        nickname.push_str(token);
        run = run.or(script);
    }
    nickname
}

impl StyleGenerator for Cs16ClassicStyle {
    fn id(&self) -> &str {
        COUNTER_STRIKE_16_CLASSIC
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn generate(&self, _context: &RequestContext, rng: &mut dyn RngCore) -> Result<String> {
        let config = &self.config;
        let mut token_count = random_between(rng, config.token_min, config.token_max);
        let mut separator = pick(&config.separators, rng).to_string();
        let aggressive = is_aggressive_separator(&separator);
        if aggressive {
            token_count = token_count.min(2);
        }

        let mut tokens: Vec<String> = (0..token_count)
            .map(|_| self.token(rng))
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.is_empty() {
            let word = pick(&config.core_words, rng);
            tokens.push(self.transform(word, rng));
        }

        if contains_hard_separator(&tokens[0]) {
            tokens.truncate(2);
            tokens = tokens.iter().map(|t| neutralize(t)).collect();
            separator = "_".to_string();
        } else if aggressive && tokens.len() > 1 && contains_hard_separator(&tokens[1]) {
            separator = "_".to_string();
        }

        let mut nickname = join_tokens(&tokens, &separator);

        if tokens.len() > 1 && chance(rng, config.math_symbol_chance_percent) {
            let symbol = pick(&config.math_symbols, rng);
            nickname = inject_at_separator(&nickname, &separator, symbol);
        }

        if chance(rng, config.decoration_chance_percent) {
            let decoration = pick(&config.decorations, rng);
            let decorated = format!("{}{}{}", decoration, nickname, decoration);
            if !has_mixed_script_token(&decorated) {
                nickname = decorated;
            }
        }

        if chance(rng, config.number_chance_percent) {
            let number = random_between(rng, config.number_min, config.number_max);
            nickname.push_str(&number.to_string());
        }

        if has_mixed_script_token(&nickname) {
            let clean: Vec<&str> = tokens
                .iter()
                .map(String::as_str)
                .filter(|t| !has_mixed_scripts(t))
                .collect();
            nickname = if clean.is_empty() {
                pick(&config.core_words, rng).to_string()
            } else {
                clean.join("_")
            };
        }

        Ok(nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_source;
    use crate::types::{NicknameLocale, NicknameTemplate};

    fn ctx() -> RequestContext {
        RequestContext::new(NicknameLocale::En, NicknameTemplate::AdjNoun)
    }

    /// Deterministic config: one word per source, every gate closed
    fn plain() -> Cs16ClassicConfig {
        let mut config = Cs16ClassicConfig::builtin().unwrap();
        config.core_words = vec!["Killer".to_string()];
        config.game_words = vec!["Bomb".to_string()];
        config.meme_words = vec!["Noob".to_string()];
        config.random_words = vec!["Вася".to_string()];
        config.core_percent = 100;
        config.game_percent = 0;
        config.meme_percent = 0;
        config.script_mix_chance_percent = 0;
        config.leet_chance_percent = 0;
        config.math_symbol_chance_percent = 0;
        config.decoration_chance_percent = 0;
        config.number_chance_percent = 0;
        config.upper_case_weight = 1;
        config.lower_case_weight = 0;
        config.alternating_case_weight = 0;
        config.contrast_case_weight = 0;
        config
    }

    #[test]
    fn test_plain_tokens() {
        let mut config = plain();
        config.token_min = 2;
        config.token_max = 2;
        config.separators = vec!["-".to_string()];
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "KILLER-KILLER");
    }

    #[test]
    fn test_transform_runs_leet_then_case() {
        let mut config = plain();
        config.leet_chance_percent = 100;
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.transform("Killer", &mut rng), "K1LL3R");
        assert_eq!(style.token(&mut rng), "K1LL3R");
    }

    #[test]
    fn test_aggressive_separator_caps_tokens() {
        let mut config = plain();
        config.token_min = 5;
        config.token_max = 5;
        config.separators = vec!["|".to_string()];
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "KILLER|KILLER");
    }

    #[test]
    fn test_hard_separator_inside_token() {
        let mut config = plain();
        config.core_words = vec!["a/b".to_string()];
        config.token_min = 3;
        config.token_max = 3;
        config.separators = vec![".".to_string()];
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "A_B_A_B");
    }

    #[test]
    fn test_math_decoration_number_order() {
        let mut config = plain();
        config.token_min = 2;
        config.token_max = 2;
        config.separators = vec!["_".to_string()];
        config.math_symbols = vec!["+".to_string()];
        config.decorations = vec!["~".to_string()];
        config.math_symbol_chance_percent = 100;
        config.decoration_chance_percent = 100;
        config.number_chance_percent = 100;
        config.number_min = 7;
        config.number_max = 7;
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "~KILLER+KILLER~7");
    }

    #[test]
    fn test_glued_scripts_get_a_separator() {
        let mut config = plain();
        config.core_percent = 50;
        config.token_min = 2;
        config.token_max = 2;
        config.separators = vec!["".to_string()];
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(4));
        for _ in 0..100 {
            let value = style.generate(&ctx(), &mut rng).unwrap();
            assert!(!has_mixed_script_token(&value), "{}", value);
        }
    }

    #[test]
    fn test_foreign_decoration_is_skipped() {
        let mut config = plain();
        config.core_percent = 0;
        config.token_min = 1;
        config.token_max = 1;
        config.decorations = vec!["xXx".to_string()];
        config.decoration_chance_percent = 100;
        let style = Cs16ClassicStyle::new(config).unwrap();
        let mut rng = random_source(Some(1));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "ВАСЯ");
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec!["K1LL3R".to_string(), "8055".to_string(), "ВАСЯ".to_string()];
        assert_eq!(join_tokens(&tokens, ""), "K1LL3R8055_ВАСЯ");
        assert_eq!(join_tokens(&tokens, "."), "K1LL3R.8055.ВАСЯ");
        assert_eq!(neutralize("||"), "X");
        assert_eq!(neutralize("a::b"), "a__b");
    }

    #[test]
    fn test_builtin_never_mixes_scripts_in_a_token() {
        let style = Cs16ClassicStyle::builtin().unwrap();
        let mut rng = random_source(Some(2026));
        for _ in 0..1000 {
            let value = style.generate(&ctx(), &mut rng).unwrap();
            assert!(!value.trim().is_empty());
            assert!(!has_mixed_script_token(&value), "{}", value);
        }
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut config = Cs16ClassicConfig::builtin().unwrap();
        config.core_percent = 60;
        config.game_percent = 30;
        config.meme_percent = 20;
        assert!(Cs16ClassicStyle::new(config).is_err());

        let mut config = Cs16ClassicConfig::builtin().unwrap();
        config.token_min = 0;
        assert!(Cs16ClassicStyle::new(config).is_err());

        let mut config = Cs16ClassicConfig::builtin().unwrap();
        config.token_max = 11;
        assert!(Cs16ClassicStyle::new(config).is_err());

        let mut config = Cs16ClassicConfig::builtin().unwrap();
        config.token_min = 3;
        config.token_max = 2;
        assert!(Cs16ClassicStyle::new(config).is_err());
    }
}

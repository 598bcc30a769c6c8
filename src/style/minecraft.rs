//! Minecraft-youtuber style: `SkyMiner`, `DreamCraft42`, `Bedrock`

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::transform::{chance, pick, random_between};
use super::words;
use super::{StyleGenerator, MINECRAFT_YOUTUBER};
use crate::config::{require_non_blank_words, require_percent, require_range, require_text};
use crate::error::Result;
use crate::types::RequestContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinecraftConfig {
    pub display_name: String,
    pub description: String,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub single_words: Vec<String>,
    pub single_word_chance_percent: u32,
    pub number_suffix_chance_percent: u32,
    pub number_min: u32,
    pub number_max: u32,
}

impl MinecraftConfig {
    pub fn builtin() -> Self {
        Self {
            display_name: "Minecraft YouTuber".to_string(),
            description: "Channel-style handles glued from a prefix and a suffix".to_string(),
            prefixes: words::owned(words::MC_PREFIXES),
            suffixes: words::owned(words::MC_SUFFIXES),
            single_words: words::owned(words::MC_SINGLE_WORDS),
            single_word_chance_percent: 15,
            number_suffix_chance_percent: 40,
            number_min: 1,
            number_max: 999,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.display_name, "display_name")?;
        require_non_blank_words(&self.prefixes, "prefixes")?;
        require_non_blank_words(&self.suffixes, "suffixes")?;
        require_non_blank_words(&self.single_words, "single_words")?;
        require_percent(self.single_word_chance_percent, "single_word_chance_percent")?;
        require_percent(self.number_suffix_chance_percent, "number_suffix_chance_percent")?;
        require_range(self.number_min, self.number_max, "number_min", "number_max")
    }
}

pub struct MinecraftStyle {
    config: MinecraftConfig,
}

impl MinecraftStyle {
    pub fn new(config: MinecraftConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(MinecraftConfig::builtin())
    }
}

impl StyleGenerator for MinecraftStyle {
    fn id(&self) -> &str {
        MINECRAFT_YOUTUBER
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn generate(&self, _context: &RequestContext, rng: &mut dyn RngCore) -> Result<String> {
        let config = &self.config;
        if chance(rng, config.single_word_chance_percent) {
            return Ok(pick(&config.single_words, rng).to_string());
        }

        let mut value = String::new();
        value.push_str(pick(&config.prefixes, rng));
        value.push_str(pick(&config.suffixes, rng));
        if chance(rng, config.number_suffix_chance_percent) {
            let number = random_between(rng, config.number_min, config.number_max);
            value.push_str(&number.to_string());
        }
        Ok(value)
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

    #[test]
    fn test_single_word_only() {
        let mut config = MinecraftConfig::builtin();
        config.single_word_chance_percent = 100;
        let style = MinecraftStyle::new(config).unwrap();
        let mut rng = random_source(Some(8));
        for _ in 0..30 {
            let value = style.generate(&ctx(), &mut rng).unwrap();
            assert!(words::MC_SINGLE_WORDS.contains(&value.as_str()), "{}", value);
        }
    }

    #[test]
    fn test_prefix_suffix_number() {
        let mut config = MinecraftConfig::builtin();
        config.single_word_chance_percent = 0;
        config.number_suffix_chance_percent = 100;
        config.prefixes = vec!["Sky".to_string()];
        config.suffixes = vec!["Miner".to_string()];
        config.number_min = 7;
        config.number_max = 7;
        let style = MinecraftStyle::new(config).unwrap();
        let mut rng = random_source(Some(8));
        assert_eq!(style.generate(&ctx(), &mut rng).unwrap(), "SkyMiner7");
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut config = MinecraftConfig::builtin();
        config.single_word_chance_percent = 120;
        assert!(MinecraftStyle::new(config).is_err());

        let mut config = MinecraftConfig::builtin();
        config.suffixes.clear();
        assert!(MinecraftStyle::new(config).is_err());

        let mut config = MinecraftConfig::builtin();
        config.prefixes.push("  ".to_string());
        assert!(MinecraftStyle::new(config).is_err());
    }
}

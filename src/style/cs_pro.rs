//! Counter-Strike pro-scene style: short stems, light leet, odd casing

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::transform::{chance, leet_replace, pick, random_between, weighted_pick, CaseStyle};
use super::words;
use super::{StyleGenerator, COUNTER_STRIKE_PRO};
use crate::config::{
    require_non_blank_words, require_percent, require_range, require_text, require_weights,
    require_words, CharMap,
};
use crate::error::{NickForgeError, Result};
use crate::types::RequestContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsProConfig {
    pub display_name: String,
    pub description: String,
    pub stems: Vec<String>,
    /// An empty entry is the slot for a bare number
    pub suffixes: Vec<String>,
    pub leet_map: CharMap,
    pub leet_chance_percent: u32,
    pub bare_number_chance_percent: u32,
    pub number_min: u32,
    pub number_max: u32,
    pub lower_case_weight: u32,
    pub upper_case_weight: u32,
    pub capitalized_weight: u32,
    pub tail_upper_weight: u32,
}

impl CsProConfig {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            display_name: "CS Pro".to_string(),
            description: "Pro-scene Counter-Strike handles with a pinch of leet".to_string(),
            stems: words::owned(words::CS_STEMS),
            suffixes: words::owned(words::CS_SUFFIXES),
            leet_map: words::CS_LEET_MAP.parse()?,
            leet_chance_percent: 20,
            bare_number_chance_percent: 35,
            number_min: 1,
            number_max: 99,
            lower_case_weight: 50,
            upper_case_weight: 15,
            capitalized_weight: 25,
            tail_upper_weight: 10,
        })
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.display_name, "display_name")?;
        require_non_blank_words(&self.stems, "stems")?;
        require_words(&self.suffixes, "suffixes")?;
        if self.leet_map.is_empty() {
            return Err(NickForgeError::config("leet_map must contain at least one entry"));
        }
        require_percent(self.leet_chance_percent, "leet_chance_percent")?;
        require_percent(self.bare_number_chance_percent, "bare_number_chance_percent")?;
        require_range(self.number_min, self.number_max, "number_min", "number_max")?;
        require_weights(&self.case_weights().map(|(_, w)| w), "case")
    }

    fn case_weights(&self) -> [(CaseStyle, u32); 4] {
        [
            (CaseStyle::Lower, self.lower_case_weight),
            (CaseStyle::Upper, self.upper_case_weight),
            (CaseStyle::Capitalized, self.capitalized_weight),
            (CaseStyle::TailUpper, self.tail_upper_weight),
        ]
    }
}

pub struct CsProStyle {
    config: CsProConfig,
}

impl CsProStyle {
    pub fn new(config: CsProConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(CsProConfig::builtin()?)
    }
}

impl StyleGenerator for CsProStyle {
    fn id(&self) -> &str {
        COUNTER_STRIKE_PRO
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn generate(&self, _context: &RequestContext, rng: &mut dyn RngCore) -> Result<String> {
        let config = &self.config;
        let stem = pick(&config.stems, rng);
        let leeted = leet_replace(stem, &config.leet_map, config.leet_chance_percent, rng);
        let case = weighted_pick(&config.case_weights(), rng).unwrap_or(CaseStyle::Lower);
        let mut value = case.apply(&leeted);

        let suffix = pick(&config.suffixes, rng);
        if suffix.is_empty() {
            if chance(rng, config.bare_number_chance_percent) {
                let number = random_between(rng, config.number_min, config.number_max);
                value.push_str(&number.to_string());
            }
        } else {
            value.push_str(suffix);
        }
        Ok(value)
    }
}

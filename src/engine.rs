//! Retry-until-unique sampling over the registered styles

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::error::{NickForgeError, Result};
use crate::random::random_source;
use crate::style::{StyleGenerator, StyleRegistry};
use crate::types::{
    option_keys, GenerationMetrics, GenerationRequest, MetricsSnapshot, NicknameResult,
    StyleDescriptor,
};
use crate::userword::UserWordStyler;

/// Upper bound on what a call reserves before anything is accepted
const MAX_PREALLOCATED: usize = 1024;

/// Per-call counters, folded into [`GenerationMetrics`] once the call ends
#[derive(Debug, Default)]
struct DrawStats {
    attempts: usize,
    duplicates: usize,
    blanks: usize,
}

/// Generates distinct nicknames; nothing it returns is ever returned again
/// by the same instance.
///
/// Calls on one engine are serialized: the seen-set lock is held for the
/// whole draw/check/accept sequence.
pub struct UniqueCandidateEngine {
    registry: StyleRegistry,
    config: EngineConfig,
    seen: Mutex<HashSet<String>>,
    metrics: Arc<GenerationMetrics>,
}

impl UniqueCandidateEngine {
    /// Engine over the built-in styles with default retry budget
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(StyleRegistry::with_defaults()?))
    }

    pub fn with_registry(registry: StyleRegistry) -> Self {
        Self {
            registry,
            config: EngineConfig::default(),
            seen: Mutex::new(HashSet::new()),
            metrics: Arc::new(GenerationMetrics::new()),
        }
    }

    pub fn with_config(registry: StyleRegistry, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::with_registry(registry);
        engine.config = config;
        Ok(engine)
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Styles a front-end can offer
    pub fn available_styles(&self) -> Vec<StyleDescriptor> {
        self.registry.descriptors()
    }

    /// Nicknames handed out so far by this instance
    pub fn seen_count(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn metrics(&self) -> Arc<GenerationMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }

    /// Produce exactly `request.count` distinct nicknames, or fail without
    /// returning (or remembering) any of them.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Vec<NicknameResult>> {
        let started = Instant::now();
        self.metrics.increment_calls();

        if let Err(e) = validate_request(request) {
            debug!(error = %e, "Rejected generation request");
            return Err(e);
        }
        let style = self.registry.resolve(request.style_id.as_deref()).map_err(|e| {
            debug!(error = %e, "Rejected generation request");
            e
        })?;
        let styler = UserWordStyler::from_options(&request.options).map_err(|e| {
            debug!(error = %e, "Rejected generation request");
            e
        })?;

        let mut stats = DrawStats::default();
        let result = self.draw(request, style.as_ref(), styler.as_ref(), &mut stats);

        self.metrics.add_attempts(stats.attempts as u64);
        self.metrics.add_duplicates(stats.duplicates as u64);
        self.metrics.add_blank_candidates(stats.blanks as u64);

        match &result {
            Ok(results) => {
                self.metrics.add_accepted(results.len() as u64);
                info!(
                    style = %style.id(),
                    count = %results.len(),
                    attempts = %stats.attempts,
                    duration_ms = %started.elapsed().as_millis(),
                    "Nickname generation completed"
                );
            }
            Err(NickForgeError::NotEnoughUnique { .. }) => {
                self.metrics.increment_exhausted();
                warn!(
                    style = %style.id(),
                    requested = %request.count,
                    attempts = %stats.attempts,
                    duplicates = %stats.duplicates,
                    "Retry budget exhausted"
                );
            }
            Err(e) => {
                warn!(style = %style.id(), error = %e, "Nickname generation failed");
            }
        }

        result
    }

    fn draw(
        &self,
        request: &GenerationRequest,
        style: &dyn StyleGenerator,
        styler: Option<&UserWordStyler>,
        stats: &mut DrawStats,
    ) -> Result<Vec<NicknameResult>> {
        let context = request.context();
        let mut rng = random_source(request.seed);
        let max_attempts = self.config.max_attempts(request.count);
        let style_id = style.id().trim().to_string();

        let mut seen = self.seen.lock();
        let reserve = request.count.min(max_attempts).min(MAX_PREALLOCATED);
        let mut fresh: HashSet<String> = HashSet::with_capacity(reserve);
        let mut results = Vec::with_capacity(reserve);

        while results.len() < request.count {
            if stats.attempts >= max_attempts {
                return Err(NickForgeError::not_enough_unique(
                    request.count,
                    results.len(),
                    stats.attempts,
                ));
            }
            stats.attempts += 1;

            let candidate = style.generate(&context, &mut rng)?;
            if candidate.trim().is_empty() {
                stats.blanks += 1;
                trace!(style = %style_id, "Discarding blank candidate");
                continue;
            }

            let value = match styler {
                Some(styler) => styler.apply(&candidate, &mut rng),
                None => candidate,
            };
            if seen.contains(&value) || !fresh.insert(value.clone()) {
                stats.duplicates += 1;
                trace!(style = %style_id, candidate = %value, "Discarding duplicate candidate");
                continue;
            }

            results.push(NicknameResult::new(
                value,
                request.locale,
                request.template,
                style_id.as_str(),
            ));
        }

        seen.extend(fresh);
        Ok(results)
    }
}

impl std::fmt::Debug for UniqueCandidateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueCandidateEngine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("seen", &self.seen_count())
            .finish()
    }
}

fn validate_request(request: &GenerationRequest) -> Result<()> {
    if request.count < 1 {
        return Err(NickForgeError::invalid_request("count must be >= 1"));
    }
    if let Some(key) = request
        .options
        .keys()
        .find(|key| !option_keys::ALL.contains(&key.as_str()))
    {
        return Err(NickForgeError::invalid_request(format!(
            "Unsupported option: {}. Allowed: {}",
            key,
            option_keys::ALL.join(", ")
        )));
    }
    Ok(())
}

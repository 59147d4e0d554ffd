//! Two-tier classification engine.

use super::cache::DecisionCache;
use super::llm::LlmClassifier;
use crate::profile::FocusProfile;
use crate::scoring;

/// Which classifier backs the verdict. Callers pick `Llm` only when a
/// credential is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierMode {
    Keywords,
    Llm,
}

/// Produces the final relevance verdict for a piece of text.
///
/// In `Llm` mode the remote classifier is consulted first and keyword scoring
/// picks up its abstentions, so [`classify`](Self::classify) always yields a
/// concrete verdict even when the remote side is unreachable, rate-limited,
/// or misconfigured.
pub struct ClassificationEngine {
    llm: LlmClassifier,
    cache: DecisionCache,
}

impl ClassificationEngine {
    pub fn new(cache: DecisionCache) -> Self {
        Self {
            llm: LlmClassifier::new(),
            cache,
        }
    }

    /// Build around a specific remote classifier. Tests point it at a mock
    /// server.
    pub fn with_llm(llm: LlmClassifier, cache: DecisionCache) -> Self {
        Self { llm, cache }
    }

    pub async fn classify(
        &mut self,
        mode: ClassifierMode,
        profile: &FocusProfile,
        credential: Option<&str>,
        text: &str,
    ) -> bool {
        if mode == ClassifierMode::Llm {
            if let Some(api_key) = credential {
                if let Some(verdict) = self.llm.decide(profile, api_key, text, &mut self.cache).await
                {
                    return verdict;
                }
            }
        }
        scoring::is_relevant(profile, text)
    }

    pub fn cache(&self) -> &DecisionCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut DecisionCache {
        &mut self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FocusState, Role, Strictness};

    fn profile() -> FocusProfile {
        let state = FocusState::new("learn rust ownership", Role::Programmer, Strictness::Medium);
        FocusProfile::build(&state).unwrap()
    }

    // An endpoint that refuses connections: any attempt to actually reach
    // the network abstains immediately.
    fn unreachable_engine(cache: DecisionCache) -> ClassificationEngine {
        ClassificationEngine::with_llm(LlmClassifier::with_base_url("http://127.0.0.1:1"), cache)
    }

    #[tokio::test]
    async fn keywords_mode_never_touches_the_llm() {
        let mut engine = unreachable_engine(DecisionCache::unbounded());
        let p = profile();
        assert!(
            engine
                .classify(ClassifierMode::Keywords, &p, None, "Rust Ownership Tutorial")
                .await
        );
        assert!(engine.cache().is_empty());
    }

    #[tokio::test]
    async fn llm_mode_without_credential_falls_back_to_keywords() {
        let mut engine = unreachable_engine(DecisionCache::unbounded());
        let p = profile();
        assert!(
            engine
                .classify(ClassifierMode::Llm, &p, None, "Rust Ownership Tutorial")
                .await
        );
        assert!(engine.cache().is_empty());
    }

    #[tokio::test]
    async fn cached_verdict_wins_over_keywords() {
        let mut engine = unreachable_engine(DecisionCache::unbounded());
        let p = profile();
        // The remote side once called this off-topic; keywords would say
        // on-topic.
        engine
            .cache_mut()
            .insert(&p.task, "Rust Ownership Tutorial", Some(false));
        assert!(
            !engine
                .classify(ClassifierMode::Llm, &p, Some("key"), "Rust Ownership Tutorial")
                .await
        );
    }

    #[tokio::test]
    async fn cached_abstention_reruns_keyword_fallback() {
        let mut engine = unreachable_engine(DecisionCache::unbounded());
        let p = profile();
        engine
            .cache_mut()
            .insert(&p.task, "Rust Ownership Tutorial", None);
        engine.cache_mut().insert(&p.task, "Funny Cat Compilation", None);

        assert!(
            engine
                .classify(ClassifierMode::Llm, &p, Some("key"), "Rust Ownership Tutorial")
                .await
        );
        assert!(
            !engine
                .classify(ClassifierMode::Llm, &p, Some("key"), "Funny Cat Compilation")
                .await
        );
        // Still two entries: the abstentions were not replaced.
        assert_eq!(engine.cache().len(), 2);
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_and_caches_the_abstention() {
        let mut engine = unreachable_engine(DecisionCache::unbounded());
        let p = profile();
        assert!(
            engine
                .classify(ClassifierMode::Llm, &p, Some("key"), "Rust Ownership Tutorial")
                .await
        );
        assert_eq!(
            engine.cache().get(&p.task, "Rust Ownership Tutorial"),
            Some(None)
        );
    }
}

//! Remote LLM classifier.
//!
//! One HTTP POST per uncached (task, text) pair. The remote model is asked to
//! answer with exactly one of two literal tokens; anything that goes wrong on
//! the way -- transport failure, non-success status, unexpected payload shape
//! -- becomes an abstention rather than an error, so the classifier can never
//! crash the evaluation pipeline. Abstentions are cached like real decisions:
//! a failed pair is never retried within the process lifetime.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::cache::{Decision, DecisionCache};
use crate::profile::FocusProfile;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-1.5-flash-latest";

/// Asks a Gemini-style `generateContent` endpoint for a binary verdict.
pub struct LlmClassifier {
    http: Client,
    base_url: String,
}

/// Accepted response shape. Decoding fails closed: any mismatch abstains.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl LlmClassifier {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the classifier at a different endpoint. Tests use a local mock
    /// server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the remote model whether `text` is on-topic for the profile's
    /// task. Consults the cache first; both verdicts and abstentions are
    /// written back under the same key before returning.
    pub async fn decide(
        &self,
        profile: &FocusProfile,
        api_key: &str,
        text: &str,
        cache: &mut DecisionCache,
    ) -> Decision {
        if let Some(cached) = cache.get(&profile.task, text) {
            return cached;
        }

        let decision = match self.request_answer(profile, api_key, text).await {
            Ok(answer) => {
                let answer = answer.to_lowercase();
                // A truncated or rambling completion can contain both
                // markers; that counts as off-topic, not as an abstention.
                Some(answer.contains("on-topic") && !answer.contains("off-topic"))
            }
            Err(err) => {
                tracing::warn!("remote classification failed, falling back to keywords: {err}");
                None
            }
        };

        cache.insert(&profile.task, text, decision);
        decision
    }

    fn prompt(profile: &FocusProfile, text: &str) -> String {
        [
            "You are a strict focus assistant.".to_string(),
            "Given a user's current task and role, decide if an item with this title will genuinely help with that task right now.".to_string(),
            "Respond with exactly one word: 'on-topic' or 'off-topic'.".to_string(),
            String::new(),
            format!("User role: {}.", profile.role),
            format!("Current task: {}.", profile.task),
            format!("Item title: {}.", text),
            String::new(),
            "Is this item on-topic for their current task?".to_string(),
        ]
        .join("\n")
    }

    async fn request_answer(
        &self,
        profile: &FocusProfile,
        api_key: &str,
        text: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let body = json!({
            "contents": [
                { "parts": [{ "text": Self::prompt(profile, text) }] }
            ],
            "generationConfig": { "temperature": 0 },
        });

        let url = format!("{}/v1beta/models/{MODEL}:generateContent", self.base_url);
        let resp = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(format!("classifier endpoint returned HTTP {}", resp.status()).into());
        }

        let decoded: GenerateResponse = resp.json().await?;
        decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| "classifier response missing answer text".into())
    }
}

impl Default for LlmClassifier {
    fn default() -> Self {
        Self::new()
    }
}

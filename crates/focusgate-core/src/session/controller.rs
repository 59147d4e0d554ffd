//! Session controller: one idempotent evaluation cycle.
//!
//! Every external trigger re-invokes [`SessionController::evaluate`]. The
//! cycle is safe to repeat and to overlap with itself: timer advancement is a
//! pure function of the persisted record, classification is cache-checked,
//! and the only write is the best-effort timer write-back (last writer wins
//! between concurrent callers, e.g. two browser tabs).
//!
//! Ordering inside one cycle is fixed: the timer is evaluated before any
//! classification, so a break phase short-circuits filtering entirely.

use chrono::{DateTime, Utc};

use crate::classifier::{ClassificationEngine, ClassifierMode};
use crate::error::Result;
use crate::profile::FocusProfile;
use crate::state::{FocusState, Role, Strictness};
use crate::storage::{CredentialStore, FocusStateStore};
use crate::timer::{Phase, TimerRecord};

/// Candidate texts supplied by the presentation layer for one cycle.
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    /// One entry per browsable item.
    pub items: Vec<String>,
    /// The item currently being consumed, if any. An off-topic current item
    /// asks the presentation layer to prompt the user.
    pub current: Option<String>,
}

/// Relevance verdict for a single candidate item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVerdict {
    pub text: String,
    pub relevant: bool,
}

/// Outcome of one evaluation cycle, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// No task configured, or the task yields no usable keywords: apply no
    /// treatment at all.
    Disabled,
    /// Break phase: suspend all filtering and render the countdown only.
    OnBreak { timer: TimerRecord },
    /// Focus filtering ran.
    Filtered {
        verdicts: Vec<ItemVerdict>,
        /// The current item looked off-topic: prompt the user.
        intervene: bool,
        timer: Option<TimerRecord>,
    },
}

pub struct SessionController<S, C> {
    states: S,
    credentials: C,
    engine: ClassificationEngine,
}

impl<S: FocusStateStore, C: CredentialStore> SessionController<S, C> {
    pub fn new(states: S, credentials: C, engine: ClassificationEngine) -> Self {
        Self {
            states,
            credentials,
            engine,
        }
    }

    /// Run one evaluation cycle against the current wall clock.
    pub async fn evaluate(&mut self, view: &ViewSnapshot) -> Result<Evaluation> {
        self.evaluate_at(view, Utc::now()).await
    }

    /// Evaluation with an injectable clock.
    pub async fn evaluate_at(&mut self, view: &ViewSnapshot, now: DateTime<Utc>) -> Result<Evaluation> {
        let Some(mut state) = self.states.load().await? else {
            return Ok(Evaluation::Disabled);
        };

        let mut timer = None;
        if state.timer_enabled {
            if let Some(record) = state.timer.clone() {
                let advanced = record.advance(now);
                if advanced != record {
                    // Best-effort write-back; a racing caller may overwrite
                    // it and both converge on the same transition anyway.
                    state.timer = Some(advanced.clone());
                    if let Err(err) = self.states.save(&state).await {
                        tracing::warn!("failed to persist advanced timer: {err}");
                    }
                }
                if advanced.phase == Phase::Break {
                    return Ok(Evaluation::OnBreak { timer: advanced });
                }
                timer = Some(advanced);
            }
        }

        let Some(profile) = FocusProfile::build(&state) else {
            return Ok(Evaluation::Disabled);
        };
        if profile.keywords.is_empty() {
            return Ok(Evaluation::Disabled);
        }

        let credential = self
            .credentials
            .api_key()
            .await?
            .filter(|key| !key.is_empty());
        let mode = if credential.is_some() {
            ClassifierMode::Llm
        } else {
            ClassifierMode::Keywords
        };
        let credential = credential.as_deref();

        let mut verdicts = Vec::with_capacity(view.items.len());
        for text in &view.items {
            let relevant = self.engine.classify(mode, &profile, credential, text).await;
            verdicts.push(ItemVerdict {
                text: text.clone(),
                relevant,
            });
        }

        let mut intervene = false;
        if let Some(current) = view.current.as_deref() {
            intervene = !self.engine.classify(mode, &profile, credential, current).await;
        }

        Ok(Evaluation::Filtered {
            verdicts,
            intervene,
            timer,
        })
    }

    // ── Configuration surface ────────────────────────────────────────

    pub async fn focus_state(&self) -> Result<Option<FocusState>> {
        Ok(self.states.load().await?)
    }

    /// Overwrite the persisted focus configuration wholesale, preserving a
    /// running timer record.
    pub async fn set_focus(
        &mut self,
        task: impl Into<String>,
        role: Role,
        strictness: Strictness,
        timer_enabled: bool,
        focus_duration: u64,
        break_duration: u64,
    ) -> Result<FocusState> {
        let previous = self.states.load().await?;
        let state = FocusState {
            task: task.into(),
            role,
            strictness,
            timer_enabled,
            focus_duration,
            break_duration,
            updated_at: Utc::now(),
            timer: previous.and_then(|s| s.timer),
        };
        self.states.save(&state).await?;
        Ok(state)
    }

    pub async fn clear_focus(&mut self) -> Result<()> {
        self.states.clear().await?;
        Ok(())
    }

    /// Start a session: focus phase beginning now. Enables the timer and
    /// records the durations for subsequent phases.
    pub async fn start_timer(
        &mut self,
        focus_duration: u64,
        break_duration: u64,
    ) -> Result<TimerRecord> {
        let now = Utc::now();
        let record = TimerRecord::start(now, focus_duration, break_duration);

        let mut state = self.states.load().await?.unwrap_or_default();
        state.timer_enabled = true;
        state.focus_duration = focus_duration;
        state.break_duration = break_duration;
        state.timer = Some(record.clone());
        state.updated_at = now;
        self.states.save(&state).await?;

        Ok(record)
    }

    /// Clear the running session. The rest of the configuration is kept.
    pub async fn stop_timer(&mut self) -> Result<()> {
        if let Some(mut state) = self.states.load().await? {
            state.timer = None;
            state.updated_at = Utc::now();
            self.states.save(&state).await?;
        }
        Ok(())
    }

    /// Current timer record, advanced past any expired phase and persisted
    /// if it changed.
    pub async fn timer_status(&mut self) -> Result<Option<TimerRecord>> {
        let now = Utc::now();
        let Some(mut state) = self.states.load().await? else {
            return Ok(None);
        };
        let Some(record) = state.timer.clone() else {
            return Ok(None);
        };

        let advanced = record.advance(now);
        if advanced != record {
            state.timer = Some(advanced.clone());
            self.states.save(&state).await?;
        }
        Ok(Some(advanced))
    }

    // ── Credential surface ───────────────────────────────────────────

    pub async fn set_api_key(&mut self, key: &str) -> Result<()> {
        self.credentials.set_api_key(key).await?;
        Ok(())
    }

    pub async fn clear_api_key(&mut self) -> Result<()> {
        self.credentials.clear_api_key().await?;
        Ok(())
    }

    pub async fn has_api_key(&self) -> Result<bool> {
        Ok(self
            .credentials
            .api_key()
            .await?
            .is_some_and(|key| !key.is_empty()))
    }
}

//! # Focusgate Core Library
//!
//! Core decision logic for Focusgate: a content-relevance filter paired with
//! a focus/break session timer, keeping a user's browsing aligned with a
//! declared task. The library is presentation-agnostic -- DOM scanning,
//! styling, and rendering live in whatever shell embeds it; the bundled CLI
//! is one such shell.
//!
//! ## Architecture
//!
//! - **Relevance engine**: a keyword profile derived from the user's task and
//!   role, scored against candidate texts, with an optional remote-LLM
//!   classifier layered on top. The keyword path is the availability floor:
//!   every remote failure degrades to it silently.
//! - **Session timer**: a pure wall-clock state machine persisted next to the
//!   focus configuration. Readers advance stale records lazily; concurrent
//!   uncoordinated callers converge on the same transition.
//! - **Session controller**: one idempotent evaluation cycle per external
//!   trigger, with a coalescing dispatcher collapsing trigger bursts.
//! - **Storage**: async store traits with TOML-file and OS-keyring
//!   implementations.
//!
//! ## Key Components
//!
//! - [`SessionController`]: runs evaluation cycles and the configuration surface
//! - [`ClassificationEngine`]: two-tier relevance verdicts
//! - [`TimerRecord`]: the persisted timer state machine
//! - [`FocusProfile`]: keyword derivation from task + role

pub mod classifier;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod state;
pub mod storage;
pub mod timer;

pub use classifier::{ClassificationEngine, ClassifierMode, Decision, DecisionCache, Eviction, LlmClassifier};
pub use error::{CoreError, StoreError};
pub use profile::FocusProfile;
pub use session::{
    evaluation_queue, Dispatcher, Evaluation, EvaluationQueue, ItemVerdict, SessionController,
    Trigger, ViewSnapshot,
};
pub use state::{FocusState, Role, Strictness};
pub use storage::{ApiKeyStore, CredentialStore, FileStore, FocusStateStore, MemoryStore};
pub use timer::{Phase, TimerRecord};

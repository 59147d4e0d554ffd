//! Persisted focus configuration.
//!
//! [`FocusState`] is created and overwritten wholesale by the configuration
//! surface (CLI or any other embedder). The evaluation path reads it on every
//! cycle and only ever writes back an advanced timer record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::timer::TimerRecord;

/// The user's declared role. Contributes bonus keywords to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Programmer,
    Teacher,
    Researcher,
    Other,
}

impl Role {
    /// Parse a role name; anything unrecognized maps to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "student" => Role::Student,
            "programmer" => Role::Programmer,
            "teacher" => Role::Teacher,
            "researcher" => Role::Researcher,
            _ => Role::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Programmer => "programmer",
            Role::Teacher => "teacher",
            Role::Researcher => "researcher",
            Role::Other => "other",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Other
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Role::from_name(&name))
    }
}

/// How many keyword hits a text needs before it counts as relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Low,
    Medium,
    High,
}

impl Strictness {
    /// Parse a strictness name; anything unrecognized maps to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Strictness::Low,
            "high" => Strictness::High,
            _ => Strictness::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Low => "low",
            Strictness::Medium => "medium",
            Strictness::High => "high",
        }
    }
}

impl Default for Strictness {
    fn default() -> Self {
        Strictness::Medium
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Strictness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Strictness::from_name(&name))
    }
}

/// Persisted focus configuration.
///
/// The `timer` field must stay last: the TOML store emits it as a table, and
/// tables cannot precede plain values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusState {
    pub task: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub strictness: Strictness,
    #[serde(default)]
    pub timer_enabled: bool,
    /// Focus phase length in minutes.
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u64,
    /// Break phase length in minutes.
    #[serde(default = "default_break_duration")]
    pub break_duration: u64,
    #[serde(default = "default_updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Running session, if any. Absence means the timer is disabled.
    #[serde(default)]
    pub timer: Option<TimerRecord>,
}

fn default_focus_duration() -> u64 {
    25
}

fn default_break_duration() -> u64 {
    10
}

fn default_updated_at() -> DateTime<Utc> {
    Utc::now()
}

impl FocusState {
    pub fn new(task: impl Into<String>, role: Role, strictness: Strictness) -> Self {
        Self {
            task: task.into(),
            role,
            strictness,
            timer_enabled: false,
            focus_duration: default_focus_duration(),
            break_duration: default_break_duration(),
            updated_at: Utc::now(),
            timer: None,
        }
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new("", Role::Other, Strictness::Medium)
    }
}

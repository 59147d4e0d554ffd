//! Keyword profile derivation.
//!
//! A [`FocusProfile`] is rebuilt fresh from the persisted state on every
//! evaluation cycle; it has no lifecycle of its own.

use crate::state::{FocusState, Role, Strictness};

/// Bonus terms appended to the task keywords for each role.
fn role_terms(role: Role) -> &'static [&'static str] {
    match role {
        Role::Student => &["lecture", "tutorial", "study", "exam", "practice"],
        Role::Programmer => &["tutorial", "course", "walkthrough", "coding", "programming"],
        Role::Teacher => &["lesson", "classroom", "explained"],
        Role::Researcher => &["talk", "conference", "seminar", "paper"],
        Role::Other => &[],
    }
}

/// Normalized keyword set derived from the user's task and role.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusProfile {
    /// Lower-cased, deduplicated, insertion order. Task tokens of length
    /// two or less are dropped before the role terms are appended.
    pub keywords: Vec<String>,
    pub strictness: Strictness,
    pub task: String,
    pub role: Role,
}

impl FocusProfile {
    /// Derive a profile from persisted state. `None` when no task is set;
    /// callers treat that as "filtering disabled". A task whose every token
    /// is too short can still yield an empty keyword list (when the role
    /// contributes nothing), which callers also treat as disabled.
    pub fn build(state: &FocusState) -> Option<Self> {
        if state.task.trim().is_empty() {
            return None;
        }

        let mut keywords: Vec<String> = Vec::new();
        for token in state.task.split_whitespace() {
            let token = token.to_lowercase();
            if token.len() <= 2 {
                continue;
            }
            if !keywords.contains(&token) {
                keywords.push(token);
            }
        }
        for term in role_terms(state.role) {
            if !keywords.iter().any(|k| k == term) {
                keywords.push((*term).to_string());
            }
        }

        Some(Self {
            keywords,
            strictness: state.strictness,
            task: state.task.clone(),
            role: state.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_task_yields_no_profile() {
        assert!(FocusProfile::build(&FocusState::default()).is_none());
        let blank = FocusState::new("   ", Role::Student, Strictness::Medium);
        assert!(FocusProfile::build(&blank).is_none());
    }

    #[test]
    fn tokens_are_lowercased_deduped_and_length_filtered() {
        let state = FocusState::new("Learn RUST rust ownership of it", Role::Other, Strictness::Medium);
        let profile = FocusProfile::build(&state).unwrap();
        assert_eq!(profile.keywords, vec!["learn", "rust", "ownership"]);
    }

    #[test]
    fn role_terms_are_appended_without_duplicates() {
        let state = FocusState::new("tutorial basics", Role::Programmer, Strictness::Medium);
        let profile = FocusProfile::build(&state).unwrap();
        assert_eq!(
            profile.keywords,
            vec!["tutorial", "basics", "course", "walkthrough", "coding", "programming"]
        );
    }

    #[test]
    fn programmer_profile_for_rust_task() {
        let state = FocusState::new("learn rust ownership", Role::Programmer, Strictness::Medium);
        let profile = FocusProfile::build(&state).unwrap();
        assert_eq!(
            profile.keywords,
            vec![
                "learn",
                "rust",
                "ownership",
                "tutorial",
                "course",
                "walkthrough",
                "coding",
                "programming"
            ]
        );
    }

    #[test]
    fn unknown_role_contributes_nothing() {
        let state = FocusState::new("ship the report", Role::Other, Strictness::Medium);
        let profile = FocusProfile::build(&state).unwrap();
        assert_eq!(profile.keywords, vec!["ship", "the", "report"]);
    }

    #[test]
    fn short_tokens_only_and_no_role_terms_leaves_keywords_empty() {
        let state = FocusState::new("go to it", Role::Other, Strictness::Medium);
        let profile = FocusProfile::build(&state).unwrap();
        assert!(profile.keywords.is_empty());
    }
}

//! Keyword relevance scoring.
//!
//! A heuristic, monotone-in-keyword-overlap decision: deterministic and
//! side-effect-free. The remote classifier falls back to this path, so it is
//! the availability floor for every verdict.

use crate::profile::FocusProfile;
use crate::state::Strictness;

/// Count of profile keywords occurring as case-insensitive substrings of
/// `text`. The target is lower-cased only; no stemming or tokenization.
pub fn relevance_score(profile: &FocusProfile, text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }
    let target = text.to_lowercase();
    profile
        .keywords
        .iter()
        .filter(|kw| !kw.is_empty() && target.contains(kw.as_str()))
        .count() as u32
}

/// Fixed strictness-to-threshold table.
pub fn threshold(strictness: Strictness) -> f64 {
    match strictness {
        Strictness::Low => 0.5,
        Strictness::Medium => 1.0,
        Strictness::High => 2.0,
    }
}

/// A text is relevant iff its score meets the profile's threshold.
pub fn is_relevant(profile: &FocusProfile, text: &str) -> bool {
    f64::from(relevance_score(profile, text)) >= threshold(profile.strictness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FocusState, Role};

    fn profile(task: &str, role: Role, strictness: Strictness) -> FocusProfile {
        FocusProfile::build(&FocusState::new(task, role, strictness)).unwrap()
    }

    #[test]
    fn threshold_table_is_exact() {
        assert_eq!(threshold(Strictness::Low), 0.5);
        assert_eq!(threshold(Strictness::Medium), 1.0);
        assert_eq!(threshold(Strictness::High), 2.0);
    }

    #[test]
    fn empty_keyword_set_is_never_relevant() {
        for strictness in [Strictness::Low, Strictness::Medium, Strictness::High] {
            // Every task token is too short and the role adds nothing.
            let p = profile("go to it", Role::Other, strictness);
            assert!(p.keywords.is_empty());
            assert_eq!(relevance_score(&p, "anything at all"), 0);
            assert!(!is_relevant(&p, "anything at all"));
        }
    }

    #[test]
    fn full_keyword_overlap_is_relevant_at_any_strictness() {
        for strictness in [Strictness::Low, Strictness::Medium, Strictness::High] {
            let p = profile("rust ownership", Role::Other, strictness);
            let text = "Understanding Rust ownership in depth";
            assert_eq!(relevance_score(&p, text), p.keywords.len() as u32);
            assert!(is_relevant(&p, text));
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let p = profile("rust ownership", Role::Other, Strictness::Medium);
        assert_eq!(relevance_score(&p, "RUST for beginners"), 1);
        // Substring, not word match: "ownership" inside "co-ownership".
        assert_eq!(relevance_score(&p, "co-OWNERSHIP dispute"), 1);
        assert_eq!(relevance_score(&p, ""), 0);
    }

    #[test]
    fn single_hit_fails_high_strictness() {
        let p = profile("rust ownership", Role::Other, Strictness::High);
        assert!(!is_relevant(&p, "Rust streams explained"));
        let p = profile("rust ownership", Role::Other, Strictness::Low);
        assert!(is_relevant(&p, "Rust streams explained"));
    }

    #[test]
    fn rust_tutorial_scenario() {
        let p = profile("learn rust ownership", Role::Programmer, Strictness::Medium);
        let on_topic = "Rust Ownership Tutorial for Beginners";
        assert!(relevance_score(&p, on_topic) >= 3);
        assert!(is_relevant(&p, on_topic));

        let off_topic = "Funny Cat Compilation 2024";
        assert_eq!(relevance_score(&p, off_topic), 0);
        assert!(!is_relevant(&p, off_topic));
    }
}

//! Decision cache for remote classifier verdicts.

use std::collections::{HashMap, VecDeque};

/// A classifier verdict. `None` means the classifier abstained and the
/// caller must fall back to keyword scoring.
pub type Decision = Option<bool>;

/// Eviction policy for the decision cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eviction {
    /// Keep every entry for the lifetime of the process.
    Unbounded,
    /// Keep at most this many entries, dropping the oldest insertion first.
    MaxEntries(usize),
}

/// Cache of classifier decisions keyed by `(task, text)`.
///
/// A hit is returned verbatim, including cached abstentions: a stored `None`
/// never triggers a fresh network attempt, so callers must re-run the keyword
/// fallback themselves when they see one.
///
/// The key deliberately omits role and strictness. Changing either without
/// changing the task serves stale decisions; see DESIGN.md before touching
/// the key shape.
#[derive(Debug)]
pub struct DecisionCache {
    entries: HashMap<String, Decision>,
    order: VecDeque<String>,
    eviction: Eviction,
}

impl DecisionCache {
    pub fn new(eviction: Eviction) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            eviction,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(Eviction::Unbounded)
    }

    fn key(task: &str, text: &str) -> String {
        format!("{task}|{text}")
    }

    /// Outer `None` is a miss; `Some(decision)` is a hit, where the decision
    /// may itself be an abstention.
    pub fn get(&self, task: &str, text: &str) -> Option<Decision> {
        self.entries.get(&Self::key(task, text)).copied()
    }

    pub fn insert(&mut self, task: &str, text: &str, decision: Decision) {
        let key = Self::key(task, text);
        if self.entries.insert(key.clone(), decision).is_some() {
            return;
        }
        self.order.push_back(key);
        if let Eviction::MaxEntries(max) = self.eviction {
            while self.entries.len() > max {
                match self.order.pop_front() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_and_hit() {
        let mut cache = DecisionCache::unbounded();
        assert_eq!(cache.get("task", "title"), None);

        cache.insert("task", "title", Some(true));
        assert_eq!(cache.get("task", "title"), Some(Some(true)));
        assert_eq!(cache.get("other task", "title"), None);
    }

    #[test]
    fn cached_abstention_is_returned_verbatim() {
        let mut cache = DecisionCache::unbounded();
        cache.insert("task", "title", None);
        assert_eq!(cache.get("task", "title"), Some(None));
    }

    #[test]
    fn bounded_cache_evicts_oldest_insertion() {
        let mut cache = DecisionCache::new(Eviction::MaxEntries(2));
        cache.insert("t", "a", Some(true));
        cache.insert("t", "b", Some(false));
        cache.insert("t", "c", None);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("t", "a"), None);
        assert_eq!(cache.get("t", "b"), Some(Some(false)));
        assert_eq!(cache.get("t", "c"), Some(None));
    }

    #[test]
    fn overwriting_a_key_does_not_evict() {
        let mut cache = DecisionCache::new(Eviction::MaxEntries(2));
        cache.insert("t", "a", None);
        cache.insert("t", "b", Some(true));
        cache.insert("t", "a", Some(false));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("t", "a"), Some(Some(false)));
        assert_eq!(cache.get("t", "b"), Some(Some(true)));
    }

    #[test]
    fn unbounded_cache_never_evicts() {
        let mut cache = DecisionCache::unbounded();
        for i in 0..1000 {
            cache.insert("t", &i.to_string(), Some(i % 2 == 0));
        }
        assert_eq!(cache.len(), 1000);
        assert_eq!(cache.get("t", "0"), Some(Some(true)));
    }
}

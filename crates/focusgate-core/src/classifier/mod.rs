pub mod cache;
pub mod engine;
pub mod llm;

pub use cache::{Decision, DecisionCache, Eviction};
pub use engine::{ClassificationEngine, ClassifierMode};
pub use llm::LlmClassifier;

pub mod controller;
pub mod dispatcher;

pub use controller::{Evaluation, ItemVerdict, SessionController, ViewSnapshot};
pub use dispatcher::{evaluation_queue, Dispatcher, EvaluationQueue, Trigger};

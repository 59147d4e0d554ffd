pub mod classify;
pub mod evaluate;
pub mod focus;
pub mod key;
pub mod timer;

use focusgate_core::{
    ApiKeyStore, ClassificationEngine, DecisionCache, FileStore, SessionController,
};

/// Controller over the default file-backed state store and OS keyring.
pub(crate) fn controller(
) -> Result<SessionController<FileStore, ApiKeyStore>, Box<dyn std::error::Error>> {
    let states = FileStore::open_default()?;
    let credentials = ApiKeyStore::new();
    let engine = ClassificationEngine::new(DecisionCache::unbounded());
    Ok(SessionController::new(states, credentials, engine))
}

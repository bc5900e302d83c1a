use std::sync::Mutex;

use admission_core::{session::SessionManager, storage::LocalStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store and session manager backed by a unique directory.
pub fn setup_test_env() -> (LocalStore, SessionManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = LocalStore::open(base).expect("open local store");
    let session = SessionManager::new(store.clone()).expect("create session manager");
    (store, session)
}

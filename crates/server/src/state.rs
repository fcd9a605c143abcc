use std::sync::{Arc, RwLock};

use store::directory::Directory;

/// Process-wide directory handle shared across request handlers.
///
/// One lock guards both collections, so the room existence check, the
/// overlap scan and the insert in booking creation all observe a consistent
/// snapshot.
pub type SharedDirectory = Arc<RwLock<Directory>>;

pub fn new_shared_directory() -> SharedDirectory {
    Arc::new(RwLock::new(Directory::new()))
}

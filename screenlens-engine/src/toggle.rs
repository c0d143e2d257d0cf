use crate::traits::FlagStore;
use parking_lot::Mutex;
use screenlens_core::flags::FlagKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-negate-write on a persisted flag.
///
/// Each flag has its own critical section: two toggles of the same flag
/// cannot interleave their read and write, while toggles of different flags
/// proceed independently.
pub struct FlagToggler {
    store: Arc<dyn FlagStore>,
    locks: Mutex<HashMap<FlagKey, Arc<Mutex<()>>>>,
}

impl FlagToggler {
    pub fn new(store: Arc<dyn FlagStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_for(&self, key: FlagKey) -> Arc<Mutex<()>> {
        self.locks.lock().entry(key).or_default().clone()
    }

    /// Flips `key` in the store. A store failure aborts the invocation;
    /// there is no recovery path for a broken preferences file.
    pub fn toggle(&self, key: FlagKey) -> anyhow::Result<()> {
        let lock = self.lock_for(key);
        let _guard = lock.lock();

        let current = self.store.get(key)?;
        self.store.set(key, !current)
    }
}

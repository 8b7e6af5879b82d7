use std::sync::{Mutex, MutexGuard, OnceLock};

mod mode_test;
mod repo_test;

// Les tests qui touchent aux variables d'environnement se sérialisent ici.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .expect("lock poisoned")
}

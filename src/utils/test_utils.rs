use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets process environment variables for one test and restores them on drop.
///
/// Holds a global lock for its lifetime so tests touching the environment
/// never interleave.
pub struct TestEnvVarGuard {
    saved: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl TestEnvVarGuard {
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner()),
        }
    }

    pub fn set_var(&mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) {
        self.remember(key.as_ref());
        std::env::set_var(key, value);
    }

    pub fn remove_var(&mut self, key: impl AsRef<OsStr>) {
        self.remember(key.as_ref());
        std::env::remove_var(key);
    }

    fn remember(&mut self, key: &OsStr) {
        if self.saved.iter().all(|(saved, _)| saved != key) {
            self.saved.push((key.to_os_string(), std::env::var_os(key)));
        }
    }
}

impl Drop for TestEnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

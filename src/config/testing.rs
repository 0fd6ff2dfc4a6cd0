//! Test doubles for the config file source.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::config::loader::ConfigError;
use crate::config::sources::ConfigFileSource;

/// A config file held in memory, with a read counter.
pub(crate) struct FakeFiles {
    exists: AtomicBool,
    content: Mutex<Result<Value, String>>,
    reads: AtomicUsize,
}

impl FakeFiles {
    pub(crate) fn missing() -> Self {
        Self {
            exists: AtomicBool::new(false),
            content: Mutex::new(Ok(Value::Null)),
            reads: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_json(value: Value) -> Self {
        let files = Self::missing();
        files.set_json(value);
        files
    }

    pub(crate) fn with_error(message: &str) -> Self {
        let files = Self::missing();
        files.exists.store(true, Ordering::SeqCst);
        *files.content.lock().unwrap_or_else(PoisonError::into_inner) = Err(message.to_string());
        files
    }

    pub(crate) fn set_json(&self, value: Value) {
        self.exists.store(true, Ordering::SeqCst);
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Ok(value);
    }

    pub(crate) fn set_exists(&self, exists: bool) {
        self.exists.store(exists, Ordering::SeqCst);
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ConfigFileSource for FakeFiles {
    fn exists(&self, _path: &Path) -> bool {
        self.exists.load(Ordering::SeqCst)
    }

    fn read_json(&self, path: &Path) -> Result<Value, ConfigError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .map_err(|message| ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            })
    }
}

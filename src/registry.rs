//! Explicit facade registry, keyed by name.
//!
//! Replaces an implicit process-global logger table: the process owns a
//! `Registry` and passes it where needed. Repeat construction under a name
//! returns the existing facade instead of attaching a second set of sinks,
//! so records are never emitted twice for the same logical stream.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    sink::SinkError,
    stack::{LogStack, StackConfig},
};

/// Name-keyed collection of [`LogStack`] facades with get-or-create semantics.
#[derive(Default)]
pub struct Registry {
    inner: Mutex<HashMap<String, Arc<LogStack>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the facade registered under `name`, creating it with `config`
    /// on first use. A second call with the same name returns the same
    /// facade; the config argument is ignored then.
    ///
    /// # Errors
    ///
    /// [`SinkError::Attach`] if first-use creation cannot open the log file.
    /// Nothing is registered in that case; a later call may retry.
    pub fn get_or_create(
        &self,
        name: &str,
        config: StackConfig,
    ) -> Result<Arc<LogStack>, SinkError> {
        let mut map = self.lock();
        if let Some(existing) = map.get(name) {
            return Ok(Arc::clone(existing));
        }
        let stack = Arc::new(LogStack::create_with(name, config)?);
        map.insert(name.to_string(), Arc::clone(&stack));
        Ok(stack)
    }

    /// Looks up a facade without creating one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<LogStack>> {
        self.lock().get(name).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<LogStack>>> {
        // A poisoned map is still structurally valid; keep serving it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

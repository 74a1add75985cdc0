//! Handler registry keyed by (state, event key).

use crate::core::{Event, Outcome, State};
use crate::machine::Machine;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Type alias for registered handler functions.
///
/// A handler receives the machine (so it can read the state and mutate the
/// context) and the event, and returns the next state either immediately or
/// as a future.
pub type Handler<S, E, C> =
    Arc<dyn for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync>;

/// Wrap a closure into a shareable [`Handler`].
///
/// Going through this function (rather than `Arc::new`) lets the compiler
/// infer the closure's higher-ranked signature.
pub fn handler<S, E, C, F>(f: F) -> Handler<S, E, C>
where
    S: State,
    E: Event,
    F: for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Mapping from `(state, event key)` to the handler for that pair.
///
/// A key maps to at most one handler. Registering over an existing key
/// silently replaces the previous handler.
///
/// The table sits behind a lock so a registry shared between machines (see
/// [`Machine::on`]) can still take registrations. The lock is only held for
/// a lookup or an insert, never while a handler runs.
pub struct Registry<S: State, E: Event, C> {
    handlers: RwLock<HashMap<(S, E::Key), Handler<S, E, C>>>,
}

impl<S: State, E: Event, C> Registry<S, E, C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler for `(state, key)`, replacing any previous one.
    pub fn register<F>(&self, state: S, key: E::Key, handler: F)
    where
        F: for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync + 'static,
    {
        self.insert(state, key, self::handler(handler));
    }

    /// Register an already shared handler for `(state, key)`.
    ///
    /// Useful when one handler serves several keys.
    pub fn insert(&self, state: S, key: E::Key, handler: Handler<S, E, C>) {
        tracing::trace!(state = state.name(), event = ?key, "registering handler");
        let replaced = self.write().insert((state, key), handler).is_some();
        if replaced {
            tracing::trace!(replaced, "previous handler replaced");
        }
    }

    /// Find the handler for `(state, key)`.
    pub fn lookup(&self, state: &S, key: &E::Key) -> Option<Handler<S, E, C>> {
        self.read()
            .get(&(state.clone(), key.clone()))
            .map(Arc::clone)
    }

    /// Check whether a handler is registered for `(state, key)`.
    pub fn contains(&self, state: &S, key: &E::Key) -> bool {
        self.read().contains_key(&(state.clone(), key.clone()))
    }

    /// Number of registered `(state, key)` pairs.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Handlers never run under the lock, so a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<(S, E::Key), Handler<S, E, C>>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<(S, E::Key), Handler<S, E, C>>> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: State, E: Event, C> Default for Registry<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a registry copies the table: the copy holds the same handler
/// functions, but later registrations on either side stay local to it.
impl<S: State, E: Event, C> Clone for Registry<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            handlers: RwLock::new(self.read().clone()),
        }
    }
}

impl<S: State, E: Event, C> fmt::Debug for Registry<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.read();
        let mut keys: Vec<String> = handlers
            .keys()
            .map(|(state, key)| format!("({}, {})", state.name(), E::key_name(key)))
            .collect();
        keys.sort();
        f.debug_struct("Registry").field("handlers", &keys).finish()
    }
}

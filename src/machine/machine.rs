//! State machine that dispatches events to registered handlers.

use crate::core::{Event, Outcome, State};
use crate::machine::error::DispatchError;
use crate::machine::registry::{Handler, Registry};
use std::fmt;
use std::sync::Arc;

/// A running state machine: current state, caller-owned context and the
/// handler registry it dispatches through.
///
/// The registry is reference-counted. Clones of a machine share it, and a
/// handler registered through any of them with [`Machine::on`] is visible to
/// all of them.
pub struct Machine<S: State, E: Event, C> {
    pub(crate) state: S,
    pub(crate) context: C,
    pub(crate) registry: Arc<Registry<S, E, C>>,
    pub(crate) label: Option<String>,
}

impl<S: State, E: Event, C> Machine<S, E, C> {
    /// Create a machine with an empty registry.
    pub fn new(state: S, context: C) -> Self {
        Self::with_registry(state, context, Arc::new(Registry::new()))
    }

    /// Create a machine that dispatches through an existing registry.
    pub fn with_registry(state: S, context: C, registry: Arc<Registry<S, E, C>>) -> Self {
        Self {
            state,
            context,
            registry,
            label: None,
        }
    }

    /// Name this machine in log output.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get current state
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn registry(&self) -> &Arc<Registry<S, E, C>> {
        &self.registry
    }

    /// True if both machines dispatch through the same registry.
    pub fn shares_registry_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }

    /// Register a handler for `(state, key)`.
    ///
    /// The registry is shared with every clone of this machine, so the
    /// handler becomes visible to all of them. Registering over an existing
    /// key replaces the previous handler.
    pub fn on<F>(&self, state: S, key: E::Key, handler: F) -> &Self
    where
        F: for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync + 'static,
    {
        self.registry.register(state, key, handler);
        self
    }

    /// Swap the context in place, returning the previous one.
    ///
    /// State and registry are left untouched.
    pub fn replace_context(&mut self, context: C) -> C {
        tracing::debug!(machine = self.log_name(), "context replaced");
        std::mem::replace(&mut self.context, context)
    }

    /// Dispatch an event, awaiting the handler if it returns a pending result.
    ///
    /// Returns the committed state. If this future is dropped while the
    /// handler is pending, the state is unchanged but any context mutation
    /// the handler already made stays in place.
    pub async fn dispatch(&mut self, event: E) -> Result<S, DispatchError> {
        let handler = self.resolve(&event)?;
        let from = self.state.clone();

        let next = match handler(&mut *self, &event) {
            Outcome::Ready(next) => next,
            Outcome::Pending(pending) => pending.await,
        };

        Ok(self.commit(&from, &event, next))
    }

    /// Dispatch an event whose handler must return immediately.
    ///
    /// A pending result is rejected with [`DispatchError::Suspended`] and the
    /// future is dropped without being polled; the state does not change.
    pub fn dispatch_sync(&mut self, event: E) -> Result<S, DispatchError> {
        let handler = self.resolve(&event)?;
        let from = self.state.clone();

        let next = match handler(&mut *self, &event) {
            Outcome::Ready(next) => Some(next),
            Outcome::Pending(_) => None,
        };
        let Some(next) = next else {
            let err = DispatchError::Suspended {
                state: from.name().to_string(),
                event: E::key_name(&event.key()),
            };
            tracing::debug!(machine = self.log_name(), error = %err, "dispatch rejected");
            return Err(err);
        };

        Ok(self.commit(&from, &event, next))
    }

    fn resolve(&self, event: &E) -> Result<Handler<S, E, C>, DispatchError> {
        let key = event.key();
        match self.registry.lookup(&self.state, &key) {
            Some(handler) => Ok(handler),
            None => {
                let err = DispatchError::NoHandler {
                    state: self.state.name().to_string(),
                    event: E::key_name(&key),
                };
                tracing::debug!(machine = self.log_name(), error = %err, "dispatch failed");
                Err(err)
            }
        }
    }

    fn commit(&mut self, from: &S, event: &E, next: S) -> S {
        tracing::debug!(
            machine = self.log_name(),
            from = from.name(),
            to = next.name(),
            event = %E::key_name(&event.key()),
            "transition committed"
        );
        self.state = next.clone();
        next
    }

    pub(crate) fn log_name(&self) -> &str {
        self.label.as_deref().unwrap_or("unnamed")
    }
}

/// Clone the machine: same state, an independent copy of the context, and
/// the *same* registry.
///
/// The context is copied with `C::clone`, so owned data is duplicated and any
/// `Rc`/`Arc` the caller put in the context stays shared.
impl<S: State, E: Event, C: Clone> Clone for Machine<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            context: self.context.clone(),
            registry: Arc::clone(&self.registry),
            label: self.label.clone(),
        }
    }
}

impl<S: State, E: Event, C: fmt::Debug> fmt::Debug for Machine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("context", &self.context)
            .field("registry", &self.registry)
            .finish()
    }
}

//! Builder that collects handlers before any context exists.

use crate::core::{Event, Outcome, State};
use crate::machine::{Machine, Registry};
use std::sync::Arc;

/// Builder for stamping out machines that share one handler table layout.
///
/// Handlers are registered against the builder's own registry. Each call to
/// [`stamp`](Self::stamp) gives the new machine its own copy of that
/// registry, so registrations made on the builder afterwards do not reach
/// machines that were already stamped.
pub struct MachineBuilder<S: State, E: Event, C> {
    initial: S,
    registry: Registry<S, E, C>,
    label: Option<String>,
}

impl<S: State, E: Event, C> MachineBuilder<S, E, C> {
    /// Create a builder whose machines start in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            registry: Registry::new(),
            label: None,
        }
    }

    /// Label every stamped machine for log output.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a handler for `(state, key)`, replacing any previous one.
    pub fn on<F>(mut self, state: S, key: E::Key, handler: F) -> Self
    where
        F: for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync + 'static,
    {
        self.register(state, key, handler);
        self
    }

    /// Add a handler without consuming the builder.
    pub fn register<F>(&mut self, state: S, key: E::Key, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut Machine<S, E, C>, &'a E) -> Outcome<'a, S> + Send + Sync + 'static,
    {
        self.registry.register(state, key, handler);
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn registry(&self) -> &Registry<S, E, C> {
        &self.registry
    }

    /// Build a machine in the initial state around `context`.
    pub fn stamp(&self, context: C) -> Machine<S, E, C> {
        let registry = Arc::new(self.registry.clone());
        let mut machine = Machine::with_registry(self.initial.clone(), context, registry);
        machine.label = self.label.clone();
        tracing::debug!(
            machine = machine.log_name(),
            state = machine.state.name(),
            handlers = machine.registry.len(),
            "stamped machine"
        );
        machine
    }
}

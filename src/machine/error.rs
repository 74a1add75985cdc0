//! Dispatch errors.

use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// Both kinds leave the machine's state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Nothing is registered for the current state and the event's key.
    #[error("No handler for ({state}, {event})")]
    NoHandler { state: String, event: String },

    /// A handler returned a pending result to `dispatch_sync`.
    #[error(
        "Handler for ({state}, {event}) returned a pending result. Use dispatch() instead of dispatch_sync()"
    )]
    Suspended { state: String, event: String },
}

impl DispatchError {
    /// Name of the state the machine was in when dispatch failed.
    pub fn state(&self) -> &str {
        match self {
            Self::NoHandler { state, .. } | Self::Suspended { state, .. } => state,
        }
    }

    /// Human-readable identifier of the event key that failed.
    pub fn event(&self) -> &str {
        match self {
            Self::NoHandler { event, .. } | Self::Suspended { event, .. } => event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_handler_message_names_state_and_event() {
        let err = DispatchError::NoHandler {
            state: "Locked".into(),
            event: "Lock".into(),
        };
        assert_eq!(err.to_string(), "No handler for (Locked, Lock)");
        assert_eq!(err.state(), "Locked");
        assert_eq!(err.event(), "Lock");
    }

    #[test]
    fn suspended_message_points_to_async_dispatch() {
        let err = DispatchError::Suspended {
            state: "Idle".into(),
            event: "Start".into(),
        };
        assert!(err.to_string().contains("Use dispatch()"));
        assert_eq!(err.state(), "Idle");
        assert_eq!(err.event(), "Start");
    }
}

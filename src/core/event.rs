//! Event identity resolution.
//!
//! Handlers are registered against an event *key*, not an event value. The
//! [`Event`] trait is the one place an incoming event is reduced to that key,
//! and the same key type is what callers pass at registration time.
//!
//! Two shapes of event are supported:
//!
//! - closed enumerations without payload, where the key is the value itself
//!   (`type Key = Self`)
//! - tagged unions whose variants carry data, where the key is a fieldless
//!   companion "kind" enum naming the variant
//!
//! The [`event_enum!`](crate::event_enum) macro generates either form.

use std::fmt::Debug;
use std::hash::Hash;

/// An input to a state machine.
///
/// Two events resolve to the same handler iff their keys are equal.
/// [`key_name`](Event::key_name) renders a key for dispatch errors and log
/// fields; it defaults to the key's `Debug` output, which is the bare
/// variant name for fieldless enums. Override it for keys whose `Debug`
/// output is not a plain name, such as strings.
///
/// # Example
///
/// ```rust
/// use genfsm::core::Event;
///
/// #[derive(Debug)]
/// enum DoorEvent {
///     Unlock { code: String },
///     Lock,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorEventKind {
///     Unlock,
///     Lock,
/// }
///
/// impl Event for DoorEvent {
///     type Key = DoorEventKind;
///
///     fn key(&self) -> DoorEventKind {
///         match self {
///             Self::Unlock { .. } => DoorEventKind::Unlock,
///             Self::Lock => DoorEventKind::Lock,
///         }
///     }
/// }
///
/// let a = DoorEvent::Unlock { code: "1234".into() };
/// let b = DoorEvent::Unlock { code: "0000".into() };
/// assert_eq!(a.key(), b.key());
/// assert_ne!(a.key(), DoorEvent::Lock.key());
/// ```
pub trait Event: Send + Sync {
    /// Lookup key shared by all events that should reach the same handler.
    type Key: Clone + Eq + Hash + Debug + Send + Sync;

    /// Resolve this event to its registry key.
    fn key(&self) -> Self::Key;

    /// Human-readable name of a key.
    fn key_name(key: &Self::Key) -> String {
        format!("{key:?}")
    }
}

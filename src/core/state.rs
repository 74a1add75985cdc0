//! Core State trait for state machine states.
//!
//! Every machine state type implements this trait. States are plain values:
//! the dispatcher replaces the current one wholesale on each transition and
//! uses it as half of every handler registry key.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the builder copies its initial state into every stamped machine
/// - `Eq` + `Hash`: states key the handler registry
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use genfsm::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

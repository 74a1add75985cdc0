//! Genfsm: a minimal typed finite state machine engine
//!
//! A machine holds a current state, a caller-owned context, and a registry
//! of handlers keyed by `(state, event key)`. Dispatching an event looks up
//! the handler for the current state, lets it mutate the context and pick
//! the next state, and commits that state.
//!
//! # Core Concepts
//!
//! - **State**: closed set of values, see the `State` trait
//! - **Event**: enumeration or tagged union, reduced to a lookup key by the `Event` trait
//! - **Outcome**: a handler's next state, either `Ready` now or `Pending` on a future
//! - **Machine**: dispatches events; `dispatch` awaits pending handlers,
//!   `dispatch_sync` rejects them
//! - **MachineBuilder**: registers handlers before a context exists, then stamps machines
//!
//! # Example
//!
//! ```rust
//! use genfsm::core::Outcome;
//! use genfsm::{event_enum, state_enum, DispatchError, MachineBuilder};
//!
//! state_enum! {
//!     enum Light {
//!         Red,
//!         Green,
//!         Yellow,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Timer,
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Cycles {
//!     count: u32,
//! }
//!
//! let builder = MachineBuilder::<Light, Signal, Cycles>::new(Light::Red)
//!     .on(Light::Red, Signal::Timer, |_, _| Outcome::Ready(Light::Green))
//!     .on(Light::Green, Signal::Timer, |_, _| Outcome::Ready(Light::Yellow))
//!     .on(Light::Yellow, Signal::Timer, |m, _| {
//!         m.context_mut().count += 1;
//!         Outcome::Ready(Light::Red)
//!     });
//!
//! let mut light = builder.stamp(Cycles::default());
//! for _ in 0..3 {
//!     light.dispatch_sync(Signal::Timer)?;
//! }
//!
//! assert_eq!(light.state(), &Light::Red);
//! assert_eq!(light.context().count, 1);
//! # Ok::<(), DispatchError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::MachineBuilder;
pub use crate::core::{Event, Outcome, State};
pub use crate::machine::{DispatchError, Handler, Machine, Registry};

//! Core state machine types.
//!
//! This module contains the value types the engine is generic over:
//! - State definitions via the `State` trait
//! - Event identity via the `Event` trait
//! - Handler results via the `Outcome` type
//!
//! Nothing here holds mutable state; the dispatching machine lives in
//! [`crate::machine`].

mod event;
mod outcome;
mod state;

pub use event::Event;
pub use outcome::Outcome;
pub use state::State;

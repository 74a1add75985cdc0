//! Builder API for deferred machine construction.
//!
//! [`MachineBuilder`] collects handlers before the context they will operate
//! on exists, then stamps out independent machines. The `state_enum!` and
//! `event_enum!` macros cut the boilerplate of declaring states and events.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

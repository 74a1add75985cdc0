//! Event dispatch around the core types.
//!
//! # Key Concepts
//!
//! - **Registry**: maps `(state, event key)` to one handler, last registration wins
//! - **Machine**: current state, caller context and a shared registry
//! - **Dispatch**: `dispatch` awaits pending handlers, `dispatch_sync` rejects them
//!
//! Machines never validate their handler table up front. A missing handler
//! only shows up as [`DispatchError::NoHandler`] when an event arrives.

mod error;
#[allow(clippy::module_inception)]
mod machine;
mod registry;

pub use error::DispatchError;
pub use machine::Machine;
pub use registry::{handler, Handler, Registry};

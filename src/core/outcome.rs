//! Handler results.

use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;

/// What a handler hands back to the dispatcher.
///
/// A handler either knows its next state immediately or returns a future
/// that will resolve to it. The future may keep borrowing the machine and
/// the event for `'a`, so it can keep mutating the context while pending.
pub enum Outcome<'a, S> {
    /// Next state is available now.
    Ready(S),

    /// Next state is produced by a future that must be awaited.
    Pending(BoxFuture<'a, S>),
}

impl<'a, S> Outcome<'a, S> {
    /// Box a future into a pending outcome.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = S> + Send + 'a,
    {
        Self::Pending(future.boxed())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl<S: fmt::Debug> fmt::Debug for Outcome<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(state) => f.debug_tuple("Ready").field(state).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_reports_its_shape() {
        let outcome: Outcome<'_, u8> = Outcome::Ready(3);
        assert!(outcome.is_ready());
        assert!(!outcome.is_pending());
        assert_eq!(format!("{outcome:?}"), "Ready(3)");
    }

    #[test]
    fn pending_reports_its_shape() {
        let outcome: Outcome<'_, u8> = Outcome::pending(async { 3 });
        assert!(outcome.is_pending());
        assert_eq!(format!("{outcome:?}"), "Pending(..)");
    }

    #[tokio::test]
    async fn pending_future_resolves_to_state() {
        let mut counter = 0;
        let state = {
            let outcome = Outcome::pending(async {
                counter += 1;
                "done"
            });
            match outcome {
                Outcome::Ready(state) => state,
                Outcome::Pending(future) => future.await,
            }
        };

        assert_eq!(state, "done");
        assert_eq!(counter, 1);
    }
}

//! Core traits for action normalization.

use std::sync::Arc;

use crate::error::ActionError;
use crate::outcome::ActionResult;

/// A unit of work invoked with an event.
///
/// Returning `Err` is the synchronous failure path. Every
/// `Fn(T) -> ActionResult<T>` closure is an action; wrap closures in
/// [`action_fn`] when the compiler cannot infer their signature.
pub trait Action<T>: Send + Sync {
    fn call(&self, event: T) -> ActionResult<T>;
}

impl<T, F> Action<T> for F
where
    F: Fn(T) -> ActionResult<T> + Send + Sync,
{
    fn call(&self, event: T) -> ActionResult<T> {
        self(event)
    }
}

/// Pins a closure to the [`Action`] signature so its argument and return
/// types are inferred from the bound.
pub fn action_fn<T, F>(f: F) -> F
where
    F: Fn(T) -> ActionResult<T> + Send + Sync,
{
    f
}

/// Side-effecting sink for action exceptions.
///
/// Called at most once per normalized invocation, with the failure and the
/// event the failing action received.
pub trait ExceptionHandler<T>: Send + Sync {
    fn handle(&self, exception: ActionError, event: &T);
}

impl<T, F> ExceptionHandler<T> for F
where
    F: Fn(ActionError, &T) + Send + Sync,
{
    fn handle(&self, exception: ActionError, event: &T) {
        self(exception, event)
    }
}

/// Shared so streams can report failures after `normalize` has returned.
pub type SharedExceptionHandler<T> = Arc<dyn ExceptionHandler<T>>;

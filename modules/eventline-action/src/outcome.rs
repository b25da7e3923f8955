//! Result shapes an action can hand back. Domain-agnostic.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, Stream, StreamExt};

use crate::error::ActionError;
use crate::traits::Action;

/// What invoking an action produces. `Err` is a synchronous failure.
pub type ActionResult<T> = Result<ActionOutcome<T>, ActionError>;

/// The uniform output of normalization: zero or more values, never an error.
pub type ActionStream<T> = BoxStream<'static, T>;

/// Everything an action may return, resolved once by the normalizer.
pub enum ActionOutcome<T> {
    /// Nothing. The event passes through unchanged.
    Empty,
    /// A plain value.
    Value(T),
    /// A lazy sequence of values. An `Err` item ends it.
    Stream(BoxStream<'static, Result<T, ActionError>>),
    /// A single value that will resolve or reject later.
    Deferred(BoxFuture<'static, Result<T, ActionError>>),
    /// A further action to invoke with the same event.
    Chain(Box<dyn Action<T>>),
}

impl<T> ActionOutcome<T> {
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<T, ActionError>> + Send + 'static,
    {
        Self::Stream(stream.boxed())
    }

    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ActionError>> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    pub fn chain<A>(action: A) -> Self
    where
        A: Action<T> + 'static,
    {
        Self::Chain(Box::new(action))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Value(_) => "value",
            Self::Stream(_) => "stream",
            Self::Deferred(_) => "deferred",
            Self::Chain(_) => "chain",
        }
    }
}

impl<T> From<Option<T>> for ActionOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Empty,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ActionOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Chain(_) => f.write_str("Chain(..)"),
        }
    }
}

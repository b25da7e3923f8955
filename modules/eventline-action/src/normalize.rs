//! Turns whatever an action returns into an [`ActionStream`].

use std::fmt;

use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt};
use tracing::{debug, trace, warn};

use crate::config::NormalizeConfig;
use crate::error::ActionError;
use crate::outcome::{ActionOutcome, ActionStream};
use crate::traits::{Action, ExceptionHandler, SharedExceptionHandler};

/// Normalize `action` applied to `event` with the default configuration.
///
/// See [`Normalizer::normalize`].
pub fn normalize<T, A>(
    action: &A,
    event: T,
    exception_handler: Option<SharedExceptionHandler<T>>,
) -> ActionStream<T>
where
    T: Clone + Send + 'static,
    A: Action<T> + ?Sized,
{
    Normalizer {
        config: NormalizeConfig::default(),
        exception_handler,
    }
    .normalize(action, event)
}

/// Invokes actions and resolves their outcome into a uniform stream.
///
/// Holds no per-call state; one normalizer can serve any number of events.
pub struct Normalizer<T> {
    config: NormalizeConfig,
    exception_handler: Option<SharedExceptionHandler<T>>,
}

impl<T> Normalizer<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            config: NormalizeConfig::default(),
            exception_handler: None,
        }
    }

    pub fn with_config(mut self, config: NormalizeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_exception_handler(mut self, handler: SharedExceptionHandler<T>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Invoke `action` with `event` and normalize the outcome.
    ///
    /// - `Empty` yields the event itself.
    /// - `Value` yields that value.
    /// - `Stream` and `Deferred` yield what they produce until the first error.
    /// - `Chain` re-invokes the returned action with the same event.
    ///
    /// Any failure goes to the exception handler together with the event and
    /// the stream completes empty. Nothing is ever raised to the caller.
    pub fn normalize<A>(&self, action: &A, event: T) -> ActionStream<T>
    where
        A: Action<T> + ?Sized,
    {
        let mut outcome = match action.call(event.clone()) {
            Ok(outcome) => outcome,
            Err(exception) => return self.fail(exception, &event),
        };

        // Chains are followed iteratively so arbitrarily long ones never grow the stack.
        let mut depth = 0usize;
        loop {
            trace!(kind = outcome.kind(), depth, "Resolving action outcome");
            match outcome {
                ActionOutcome::Chain(next) => {
                    depth += 1;
                    if let Some(limit) = self.config.max_chain_depth {
                        if depth > limit {
                            return self.fail(ActionError::ChainTooDeep { limit }, &event);
                        }
                    }
                    outcome = match next.call(event.clone()) {
                        Ok(outcome) => outcome,
                        Err(exception) => return self.fail(exception, &event),
                    };
                }
                ActionOutcome::Empty => return single(event),
                ActionOutcome::Value(value) => return single(value),
                ActionOutcome::Stream(source) => {
                    return catch_exceptions(source, event, self.exception_handler.clone());
                }
                ActionOutcome::Deferred(future) => {
                    return catch_exceptions(
                        future.into_stream().boxed(),
                        event,
                        self.exception_handler.clone(),
                    );
                }
            }
        }
    }

    fn fail(&self, exception: ActionError, event: &T) -> ActionStream<T> {
        report_exception(self.exception_handler.as_deref(), exception, event);
        stream::empty().boxed()
    }
}

impl<T> Default for Normalizer<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Normalizer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            exception_handler: self.exception_handler.clone(),
        }
    }
}

impl<T> fmt::Debug for Normalizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .field("has_exception_handler", &self.exception_handler.is_some())
            .finish()
    }
}

fn single<T: Send + 'static>(value: T) -> ActionStream<T> {
    stream::once(futures::future::ready(value)).boxed()
}

/// Forward values until the first error, report it, then complete.
fn catch_exceptions<T>(
    mut source: BoxStream<'static, Result<T, ActionError>>,
    event: T,
    exception_handler: Option<SharedExceptionHandler<T>>,
) -> ActionStream<T>
where
    T: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut failure = None;
        while let Some(item) = source.next().await {
            match item {
                Ok(value) => yield value,
                Err(exception) => {
                    failure = Some(exception);
                    break;
                }
            }
        }
        if let Some(exception) = failure {
            report_exception(exception_handler.as_deref(), exception, &event);
        }
    })
}

fn report_exception<T>(
    handler: Option<&dyn ExceptionHandler<T>>,
    exception: ActionError,
    event: &T,
) {
    match handler {
        Some(handler) => {
            debug!(error = %exception, "Action raised an exception");
            handler.handle(exception, event);
        }
        None => warn!(error = %exception, "Action exception discarded (no exception handler)"),
    }
}

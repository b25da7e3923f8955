//! ExceptionHandler implementations.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::ActionError;
use crate::traits::ExceptionHandler;

/// One reported action exception.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionReport<T> {
    /// Order of arrival, starting at 1.
    pub seq: u64,
    pub message: String,
    pub event: T,
}

/// In-memory exception sink. Records every `(exception, event)` pair it is
/// handed, with incrementing sequence numbers. Thread-safe.
///
/// Share it as a handler with `Arc::new(sink)` and keep a clone of the `Arc`
/// for assertions.
pub struct MemoryExceptionSink<T> {
    reports: Mutex<Vec<ExceptionReport<T>>>,
}

impl<T: Clone> MemoryExceptionSink<T> {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Everything reported so far, oldest first.
    pub fn reports(&self) -> Vec<ExceptionReport<T>> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ExceptionReport<T>>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Default for MemoryExceptionSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExceptionHandler<T> for MemoryExceptionSink<T>
where
    T: Clone + Send,
{
    fn handle(&self, exception: ActionError, event: &T) {
        let message = exception.to_string();
        let event = event.clone();
        // seq is assigned under the lock to match push order.
        let mut reports = self.lock();
        let seq = reports.len() as u64 + 1;
        reports.push(ExceptionReport {
            seq,
            message,
            event,
        });
    }
}

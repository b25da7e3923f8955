//! Ordered composition of actions.

use std::fmt;
use std::sync::Arc;

use futures::stream;
use futures::StreamExt;
use tracing::debug;

use crate::normalize::Normalizer;
use crate::outcome::ActionStream;
use crate::traits::Action;

/// Runs an event through a sequence of actions.
///
/// Normalize → feed each output to the next stage → repeat until the last
/// stage. A stage that fails for one event ends that branch only; the
/// failure is reported with the event that stage received.
pub struct Pipeline<T> {
    stages: Vec<Arc<dyn Action<T>>>,
    normalizer: Normalizer<T>,
}

impl<T> Pipeline<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            normalizer: Normalizer::new(),
        }
    }

    /// Use `normalizer` (and its exception handler) for every stage.
    pub fn with_normalizer(mut self, normalizer: Normalizer<T>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Append a stage.
    pub fn then<A>(mut self, action: A) -> Self
    where
        A: Action<T> + 'static,
    {
        self.stages.push(Arc::new(action));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run `event` through every stage. An empty pipeline yields the event.
    pub fn run(&self, event: T) -> ActionStream<T> {
        debug!(stages = self.stages.len(), "Running action pipeline");

        let mut outputs: ActionStream<T> = stream::once(futures::future::ready(event)).boxed();
        for stage in &self.stages {
            let stage = Arc::clone(stage);
            let normalizer = self.normalizer.clone();
            outputs = outputs
                .flat_map(move |event| normalizer.normalize(&*stage, event))
                .boxed();
        }
        outputs
    }
}

impl<T> Default for Pipeline<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .field("normalizer", &self.normalizer)
            .finish()
    }
}

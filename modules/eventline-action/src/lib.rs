//! Action normalization.
//!
//! Invokes a user-supplied action with an event and turns whatever it hands
//! back (nothing, a value, a stream, a deferred value, or a further action)
//! into a single lazy stream of results. Failures never escape: they are
//! reported to an optional exception handler and the stream completes empty.
//!
//! Hosts (middleware, routers) call [`normalize`] once per event per action,
//! or compose actions with a [`Pipeline`].

pub mod config;
pub mod error;
pub mod normalize;
pub mod outcome;
pub mod pipeline;
pub mod sink;
pub mod traits;

pub use config::NormalizeConfig;
pub use error::ActionError;
pub use normalize::{normalize, Normalizer};
pub use outcome::{ActionOutcome, ActionResult, ActionStream};
pub use pipeline::Pipeline;
pub use sink::{ExceptionReport, MemoryExceptionSink};
pub use traits::{action_fn, Action, ExceptionHandler, SharedExceptionHandler};

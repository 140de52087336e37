//! Observability subsystem: trait-based event and metric recording.
//!
//! The pipeline reports what it does through a pluggable [`Observer`]:
//!
//! | Backend | Description |
//! |---------|-------------|
//! | `log`   | Emits structured events via `tracing` (default) |
//! | `none`  | Discards everything |
//!
//! The [`create_observer`] factory builds the right backend from
//! [`ObserverBackend`].

mod log;
mod noop;
pub mod traits;

#[cfg(test)]
pub mod recording;

pub use self::log::LogObserver;
pub use self::noop::NoopObserver;
pub use self::traits::{Observer, ObserverEvent, ObserverMetric};
use crate::config::ObserverBackend;

/// Create an observer for the configured backend.
pub fn create_observer(backend: ObserverBackend) -> Box<dyn Observer> {
    match backend {
        ObserverBackend::Log => Box::new(LogObserver),
        ObserverBackend::None => Box::new(NoopObserver),
    }
}

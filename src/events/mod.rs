//! Event system for service actions.
//!
//! Events are fired from all actions. If no listeners are registered, they
//! are silently ignored (zero overhead). Register listeners once at startup:
//!
//! ```rust,ignore
//! use lectern::register_event_listeners;
//! use lectern::events::listeners::LoggingListener;
//!
//! register_event_listeners(|registry| {
//!     registry.listen(LoggingListener::new());
//! });
//! ```
//!
//! Implement the [`Listener`] trait for custom handlers (metrics,
//! notifications, audit trails).

mod event;
mod listener;
pub mod listeners;
mod registry;

pub use event::ServiceEvent;
pub use listener::Listener;
pub use registry::{dispatch, register_event_listeners, EventRegistry};

use async_trait::async_trait;

use crate::events::{Listener, ServiceEvent};

/// Emits service events as tracing events.
///
/// Requires the `tracing` feature to be enabled.
///
/// # Example
///
/// ```rust,ignore
/// use lectern::register_event_listeners;
/// use lectern::events::listeners::TracingListener;
///
/// register_event_listeners(|registry| {
///     registry.listen(TracingListener);
/// });
/// ```
pub struct TracingListener;

#[async_trait]
impl Listener for TracingListener {
    async fn handle(&self, event: &ServiceEvent) {
        tracing::info!(
            target: "lectern::events",
            event_name = event.name(),
            ?event,
            "service event"
        );
    }
}

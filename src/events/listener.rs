use async_trait::async_trait;

use super::ServiceEvent;

/// Trait for handling service events asynchronously.
///
/// Implement this trait to create custom event listeners. Listeners can
/// perform any async operation: logging, sending notifications, updating
/// metrics, etc.
///
/// # Example
///
/// ```rust,ignore
/// use lectern::events::{Listener, ServiceEvent};
/// use async_trait::async_trait;
///
/// struct AlertListener;
///
/// #[async_trait]
/// impl Listener for AlertListener {
///     async fn handle(&self, event: &ServiceEvent) {
///         if let ServiceEvent::LoginFailed { username, reason, .. } = event {
///             // send an alert somewhere
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handle a service event.
    ///
    /// This method is called for every event dispatched. Filter by matching
    /// on the event variant to handle specific events.
    async fn handle(&self, event: &ServiceEvent);
}

//! Event bus port — publish/subscribe for estimate events.

use std::future::Future;

use restwell_domain::error::RestwellError;
use restwell_domain::event::EstimateEvent;

/// Publishes estimate events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: EstimateEvent)
    -> impl Future<Output = Result<(), RestwellError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: EstimateEvent,
    ) -> impl Future<Output = Result<(), RestwellError>> + Send {
        (**self).publish(event)
    }
}

use crate::Event;

/// Receives events that survived scope merging and event processing.
///
/// Delivery (serialization, batching, retries, network) is entirely up to the implementation.
/// Any `Fn(Event)` closure is a transport.
pub trait Transport {
    /// Hand over a finalized event.
    fn send_event(&self, event: Event);
}

pub(crate) struct NoopTransport;
impl Transport for NoopTransport {
    fn send_event(&self, _event: Event) {}
}

impl<T: Fn(Event)> Transport for T {
    fn send_event(&self, event: Event) {
        self(event);
    }
}

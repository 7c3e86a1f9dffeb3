use crate::{ClientConfig, Event, EventId, Level, Scope};

/// Prepares events and hands them to the configured [`Transport`](crate::Transport).
///
/// In order to create a client instance, first create [`ClientConfig`].
///
/// # Examples
/// ```
/// # use scopekit::{Client, ClientConfig, Level};
/// let client = Client::new(ClientConfig::new());
/// let mut scope = client.new_scope();
/// scope.set_tag("component", "billing");
/// let event_id = client.capture_message("payment failed", Level::Error, Some(&scope));
/// assert!(event_id.is_some());
/// ```
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Create a new `Client` using the specified configuration.
    pub fn new(config: ClientConfig) -> Self {
        Client { config }
    }

    /// Create an empty scope that uses the configured breadcrumb limit.
    pub fn new_scope(&self) -> Scope {
        Scope::with_breadcrumb_limit(self.config.max_breadcrumbs)
    }

    /// Capture `event`, merging `scope` into it if provided.
    ///
    /// Release and environment defaults from the configuration are filled in first, so scope
    /// event processors can see them. Returns the id of the delivered event, or `None` if an
    /// event processor dropped it.
    pub fn capture_event(&self, mut event: Event, scope: Option<&Scope>) -> Option<EventId> {
        if event.release.is_none() {
            event.release = self.config.release.clone();
        }
        if event.environment.is_none() {
            event.environment = self.config.environment.clone();
        }

        let event_id = event.event_id;
        let event = match scope {
            Some(scope) => scope.apply_to_event(event),
            None => Some(event),
        };

        let Some(event) = event else {
            log::debug!(target: "scopekit", event_id; "event dropped, not sending");
            return None;
        };

        let event_id = event.event_id;
        log::trace!(target: "scopekit",
                    event_id,
                    event:serde;
                    "sending event");
        self.config.transport.send_event(event);

        Some(event_id)
    }

    /// Capture a plain message at `level`.
    pub fn capture_message(
        &self,
        message: impl Into<String>,
        level: Level,
        scope: Option<&Scope>,
    ) -> Option<EventId> {
        self.capture_event(Event::from_message(message, level), scope)
    }
}

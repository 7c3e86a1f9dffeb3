use std::sync::Arc;

use crate::{Breadcrumb, Client, Event, EventId, Level, Scope};

/// A stack of scopes bound to a [`Client`].
///
/// The hub is owned by a single unit of work. Pushing a scope forks the current one, so changes
/// made while it is on top are discarded when it is popped. To continue on another thread, give
/// that thread its own hub with [`Hub::fork`].
///
/// ```
/// # use std::sync::Arc;
/// # use scopekit::{ClientConfig, Hub, Level};
/// let mut hub = Hub::new(Arc::new(ClientConfig::new().to_client()));
/// hub.configure_scope(|scope| scope.set_tag("service", "api"));
///
/// hub.with_scope(
///     |scope| scope.set_tag("request_id", "r-1"),
///     |hub| hub.capture_message("slow request", Level::Warning),
/// );
///
/// assert!(!hub.scope().tags().contains_key("request_id"));
/// ```
pub struct Hub {
    client: Arc<Client>,
    top: Scope,
    parents: Vec<Scope>,
}

impl Hub {
    /// Create a hub with a single empty root scope.
    pub fn new(client: Arc<Client>) -> Self {
        let top = client.new_scope();
        Hub {
            client,
            top,
            parents: Vec::new(),
        }
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// The scope currently on top of the stack.
    pub fn scope(&self) -> &Scope {
        &self.top
    }

    /// Number of scopes on the stack, including the root.
    pub fn depth(&self) -> usize {
        self.parents.len() + 1
    }

    /// Push a fork of the current scope.
    pub fn push_scope(&mut self) {
        let child = self.top.clone();
        self.parents.push(std::mem::replace(&mut self.top, child));
    }

    /// Pop the current scope, returning it. The root scope is never popped.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        let Some(parent) = self.parents.pop() else {
            log::warn!(target: "scopekit", "attempted to pop the root scope");
            return None;
        };
        Some(std::mem::replace(&mut self.top, parent))
    }

    /// Modify the current scope in place.
    pub fn configure_scope<R>(&mut self, f: impl FnOnce(&mut Scope) -> R) -> R {
        f(&mut self.top)
    }

    /// Run `callback` with a temporary scope on top of the stack.
    ///
    /// The temporary scope is a fork of the current one, modified by `configure`. It is removed
    /// once `callback` returns, together with any scope `callback` pushed and left behind.
    pub fn with_scope<R>(
        &mut self,
        configure: impl FnOnce(&mut Scope),
        callback: impl FnOnce(&mut Hub) -> R,
    ) -> R {
        let depth = self.depth();
        self.push_scope();
        configure(&mut self.top);
        let result = callback(self);
        while self.depth() > depth {
            self.pop_scope();
        }
        result
    }

    /// Add a breadcrumb to the current scope.
    pub fn add_breadcrumb(&mut self, breadcrumb: Breadcrumb) {
        self.top.add_breadcrumb(breadcrumb);
    }

    /// Capture `event` with the current scope applied.
    pub fn capture_event(&self, event: Event) -> Option<EventId> {
        self.client.capture_event(event, Some(&self.top))
    }

    /// Capture a plain message with the current scope applied.
    pub fn capture_message(&self, message: impl Into<String>, level: Level) -> Option<EventId> {
        self.client.capture_message(message, level, Some(&self.top))
    }

    /// Create a new hub for another unit of work, starting from a fork of the current scope.
    pub fn fork(&self) -> Hub {
        Hub {
            client: self.client.clone(),
            top: self.top.clone(),
            parents: Vec::new(),
        }
    }
}

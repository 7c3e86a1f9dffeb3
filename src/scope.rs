use std::{
    collections::{HashMap, VecDeque},
    fmt,
    sync::Arc,
};

use serde_json::Value;

use crate::{Breadcrumb, Event, EventProcessor, Level, User};

/// Number of breadcrumbs a scope retains unless configured otherwise.
pub const DEFAULT_MAX_BREADCRUMBS: usize = 100;

/// Ambient context that is merged into every event captured while the scope is active.
///
/// A scope is owned by one unit of work (a request, a task, a thread). To hand context to a nested
/// or concurrent unit of work, fork it with [`Clone::clone`]: the child gets independent copies of
/// tags, extra, fingerprint and breadcrumbs, so neither side can observe the other's later changes.
/// Event processors registered before the fork are shared with the child; processors registered
/// afterwards only apply to the scope they were added to.
///
/// ```
/// # use scopekit::{Event, Level, Scope, User};
/// let mut scope = Scope::new();
/// scope.set_user(User::with_id("42"));
/// scope.set_tag("endpoint", "/checkout");
///
/// let mut child = scope.clone();
/// child.set_level(Level::Warning);
///
/// let event = child.apply_to_event(Event::new()).unwrap();
/// assert_eq!(event.tags["endpoint"], "/checkout");
/// assert_eq!(event.level, Some(Level::Warning));
/// assert_eq!(scope.level(), Level::Info);
/// ```
#[derive(Clone)]
pub struct Scope {
    user: User,
    tags: HashMap<String, String>,
    extra: HashMap<String, Value>,
    fingerprint: Vec<String>,
    level: Level,
    breadcrumbs: VecDeque<Breadcrumb>,
    breadcrumb_limit: usize,
    event_processors: Vec<Arc<dyn EventProcessor + Send + Sync>>,
}

impl Scope {
    /// Create an empty scope retaining up to [`DEFAULT_MAX_BREADCRUMBS`] breadcrumbs.
    pub fn new() -> Self {
        Scope::with_breadcrumb_limit(DEFAULT_MAX_BREADCRUMBS)
    }

    /// Create an empty scope retaining up to `limit` breadcrumbs. A limit of zero disables
    /// breadcrumbs.
    pub fn with_breadcrumb_limit(limit: usize) -> Self {
        Scope {
            user: User::default(),
            tags: HashMap::new(),
            extra: HashMap::new(),
            fingerprint: Vec::new(),
            level: Level::default(),
            breadcrumbs: VecDeque::with_capacity(limit.min(DEFAULT_MAX_BREADCRUMBS)),
            breadcrumb_limit: limit,
            event_processors: Vec::new(),
        }
    }

    /// Replace the user.
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }

    /// Set a single tag, overwriting any previous value for `key`.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    /// Merge `tags` into the scope's tags. Incoming values win; other existing tags are kept.
    pub fn set_tags<K, V>(&mut self, tags: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags
            .extend(tags.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Remove a tag, returning its previous value.
    pub fn remove_tag(&mut self, key: &str) -> Option<String> {
        self.tags.remove(key)
    }

    /// Set a single extra value, overwriting any previous value for `key`.
    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Merge `extras` into the scope's extra data. Incoming values win.
    pub fn set_extras<K, V>(&mut self, extras: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra
            .extend(extras.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Remove an extra value, returning it.
    pub fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    /// Replace the fingerprint used to group events.
    pub fn set_fingerprint<S: Into<String>>(&mut self, fingerprint: impl IntoIterator<Item = S>) {
        self.fingerprint = fingerprint.into_iter().map(Into::into).collect();
    }

    /// Replace the level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Append a breadcrumb, evicting the oldest ones once the limit is exceeded.
    pub fn add_breadcrumb(&mut self, breadcrumb: Breadcrumb) {
        self.breadcrumbs.push_back(breadcrumb);
        while self.breadcrumbs.len() > self.breadcrumb_limit {
            self.breadcrumbs.pop_front();
        }
    }

    /// Register an event processor. Processors run in registration order.
    pub fn add_event_processor(&mut self, processor: impl EventProcessor + Send + Sync + 'static) {
        self.event_processors.push(Arc::new(processor));
    }

    /// Reset every field to its default, including the event processor chain.
    ///
    /// The breadcrumb limit is kept. Other scopes, including ones forked from this one, are not
    /// affected.
    pub fn clear(&mut self) {
        *self = Scope::with_breadcrumb_limit(self.breadcrumb_limit);
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }

    pub fn fingerprint(&self) -> &[String] {
        &self.fingerprint
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Retained breadcrumbs, oldest first.
    pub fn breadcrumbs(&self) -> &VecDeque<Breadcrumb> {
        &self.breadcrumbs
    }

    pub fn breadcrumb_limit(&self) -> usize {
        self.breadcrumb_limit
    }

    pub fn event_processor_count(&self) -> usize {
        self.event_processors.len()
    }

    /// Merge the scope into `event` and run the event processors.
    ///
    /// Breadcrumbs are concatenated, scope first. Tags and extra are unioned with the event's own
    /// entries winning on conflict. Level and user are taken from the scope only when the event
    /// has none, and the fingerprint only when the event's is empty.
    ///
    /// Returns `None` if an event processor dropped the event.
    pub fn apply_to_event(&self, mut event: Event) -> Option<Event> {
        if !self.breadcrumbs.is_empty() {
            let own = std::mem::take(&mut event.breadcrumbs);
            event.breadcrumbs = self.breadcrumbs.iter().cloned().chain(own).collect();
        }

        for (key, value) in &self.tags {
            event
                .tags
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        for (key, value) in &self.extra {
            event
                .extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        if event.level.is_none() {
            event.level = Some(self.level);
        }
        if event.user.is_none() && !self.user.is_empty() {
            event.user = Some(self.user.clone());
        }
        if event.fingerprint.is_empty() {
            event.fingerprint = self.fingerprint.clone();
        }

        for (processor_index, processor) in self.event_processors.iter().enumerate() {
            let event_id = event.event_id;
            event = match processor.process_event(event) {
                Some(event) => event,
                None => {
                    log::debug!(target: "scopekit",
                                event_id,
                                processor_index;
                                "event dropped by event processor");
                    return None;
                }
            };
        }

        Some(event)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("user", &self.user)
            .field("tags", &self.tags)
            .field("extra", &self.extra)
            .field("fingerprint", &self.fingerprint)
            .field("level", &self.level)
            .field("breadcrumbs", &self.breadcrumbs)
            .field("breadcrumb_limit", &self.breadcrumb_limit)
            .field("event_processors", &self.event_processors.len())
            .finish()
    }
}

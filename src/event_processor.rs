use crate::Event;

/// A transform-or-veto step applied to an event right after scope data has been merged into it.
///
/// Returning `None` drops the event: no further processors run and the event is not delivered.
///
/// Any `Fn(Event) -> Option<Event>` closure is an event processor:
///
/// ```
/// # use scopekit::Scope;
/// let mut scope = Scope::new();
/// scope.add_event_processor(|mut event: scopekit::Event| {
///     event.tags.insert("processed".to_owned(), "yes".to_owned());
///     Some(event)
/// });
/// ```
pub trait EventProcessor {
    /// Process `event`, returning the (possibly modified) event or `None` to drop it.
    fn process_event(&self, event: Event) -> Option<Event>;
}

impl<T: Fn(Event) -> Option<Event>> EventProcessor for T {
    fn process_event(&self, event: Event) -> Option<Event> {
        self(event)
    }
}

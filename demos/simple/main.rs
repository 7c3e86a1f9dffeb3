use std::sync::Arc;

use scopekit::{Breadcrumb, ClientConfig, Event, Hub, Level, User};

pub fn main() {
    env_logger::init();

    let client = ClientConfig::new()
        .release(concat!("simple@", env!("CARGO_PKG_VERSION")))
        .environment(std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_owned()))
        .transport(|event: Event| {
            // A real transport would serialize and deliver the event.
            println!("{}", serde_json::to_string_pretty(&event).unwrap());
        })
        .to_client();

    let mut hub = Hub::new(Arc::new(client));
    hub.configure_scope(|scope| {
        scope.set_tag("service", "simple");
        // Drop noisy debug events before they reach the transport.
        scope.add_event_processor(|event: Event| match event.level {
            Some(Level::Debug) => None,
            _ => Some(event),
        });
    });

    hub.with_scope(
        |scope| {
            scope.set_user(User::with_id("42"));
            scope.set_tag("request_id", "r-1");
        },
        |hub| {
            hub.add_breadcrumb(Breadcrumb::from_message("opened checkout"));
            hub.capture_message("cache miss", Level::Debug);
            let event_id = hub.capture_message("payment declined", Level::Error);
            println!("Captured: {:?}", event_id.map(|id| id.to_string()));
        },
    );
}

//! Scope and event context for error-reporting clients.
//!
//! # Overview
//!
//! The crate revolves around a [`Scope`]: a container of ambient diagnostic context (user, tags,
//! extra data, breadcrumbs, level, fingerprint) that is set once for a unit of work, such as a
//! request, and merged into every [`Event`] captured while that unit of work runs. A scope can be
//! forked with [`Clone`] to give a nested or concurrent unit of work its own copy to diverge from.
//!
//! # Event processors
//!
//! An [`EventProcessor`] registered on a scope runs right after the scope has been merged into an
//! event. It can modify the event or drop it by returning `None`.
//!
//! ```
//! # use scopekit::{Event, Level, Scope};
//! let mut scope = Scope::new();
//! scope.add_event_processor(|event: Event| {
//!     if event.level == Some(Level::Debug) {
//!         None
//!     } else {
//!         Some(event)
//!     }
//! });
//! assert!(scope.apply_to_event(Event::from_message("noise", Level::Debug)).is_none());
//! ```
//!
//! # Clients and hubs
//!
//! A [`Client`], built from [`ClientConfig`], fills event defaults, applies a scope and passes the
//! result to a [`Transport`]. A [`Hub`] keeps a stack of scopes for one unit of work on top of a
//! shared client. The crate itself performs no delivery: the transport decides what happens to an
//! event.
//!
//! # Error Handling
//!
//! Scope operations never fail. Errors, represented by the [`Error`] enum, are only returned
//! when parsing a [`Level`] or an [`EventId`] from a string.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages under the `scopekit` target. Consider integrating a `log`-compatible logger
//! implementation to see why events were dropped.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod event_processor;
mod hub;
mod protocol;
mod scope;
mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use event_processor::EventProcessor;
pub use hub::Hub;
pub use protocol::{Breadcrumb, Event, EventId, Level, User};
pub use scope::{Scope, DEFAULT_MAX_BREADCRUMBS};
pub use transport::Transport;

//! Data types shared by [`Scope`](crate::Scope) and [`Event`].
//!
//! These mirror the shape of an error-reporting payload, but the crate never encodes them for
//! delivery. The serde derives exist so that transports and loggers can do that themselves.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use derive_more::From;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Severity of an event or breadcrumb.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    /// Unrecoverable failure, typically reported right before the process exits.
    Fatal,
}

impl Level {
    /// Lowercase name, as used by [`FromStr`] and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(Error::InvalidLevel(s.to_owned())),
        }
    }
}

impl log::kv::ToValue for Level {
    fn to_value(&self) -> log::kv::Value {
        log::kv::Value::from_display(self)
    }
}

/// Identity of the user an event is reported for.
///
/// All fields are optional. `User::default()` is the "no user" value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Any additional user data.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl User {
    /// Create a user identified only by `id`.
    pub fn with_id(id: impl Into<String>) -> Self {
        User {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.email.is_none()
            && self.username.is_none()
            && self.ip_address.is_none()
            && self.other.is_empty()
    }
}

/// A single entry of the trail of actions that happened before an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default = "default_breadcrumb_type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

fn default_breadcrumb_type() -> String {
    "default".to_owned()
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Breadcrumb {
            timestamp: Utc::now(),
            ty: default_breadcrumb_type(),
            category: None,
            level: Level::Info,
            message: None,
            data: Map::new(),
        }
    }
}

impl Breadcrumb {
    /// Create a default breadcrumb carrying `message`.
    pub fn from_message(message: impl Into<String>) -> Self {
        Breadcrumb {
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Random 128-bit event identifier, rendered as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(u128);

impl EventId {
    /// Generate a new random id.
    pub fn new() -> Self {
        EventId(rand::random())
    }
}

impl Default for EventId {
    fn default() -> Self {
        EventId::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for EventId {
    type Err = Error;

    /// Accepts the plain 32-character form as well as the hyphenated UUID form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex: String = s.chars().filter(|c| *c != '-').collect();
        if hex.len() != 32 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidEventId(s.to_owned()));
        }
        u128::from_str_radix(&hex, 16)
            .map(EventId)
            .map_err(|_| Error::InvalidEventId(s.to_owned()))
    }
}

impl TryFrom<String> for EventId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventId> for String {
    fn from(value: EventId) -> String {
        value.to_string()
    }
}

impl log::kv::ToValue for EventId {
    fn to_value(&self) -> log::kv::Value {
        log::kv::Value::from_display(self)
    }
}

/// An error or message report being prepared for delivery.
///
/// `level` and `user` are optional so that an explicitly reported value is never confused with
/// "not provided" during [`Scope::apply_to_event`](crate::Scope::apply_to_event). An empty
/// `fingerprint` means "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub event_id: EventId,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fingerprint: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Default for Event {
    fn default() -> Self {
        Event {
            event_id: EventId::new(),
            timestamp: Utc::now(),
            level: None,
            message: None,
            logger: None,
            release: None,
            environment: None,
            user: None,
            tags: HashMap::new(),
            extra: HashMap::new(),
            fingerprint: Vec::new(),
            breadcrumbs: Vec::new(),
        }
    }
}

impl Event {
    /// Create an empty event with a fresh id and the current timestamp.
    pub fn new() -> Self {
        Event::default()
    }

    /// Create a message event reported at `level`.
    pub fn from_message(message: impl Into<String>, level: Level) -> Self {
        Event {
            message: Some(message.into()),
            level: Some(level),
            ..Default::default()
        }
    }
}

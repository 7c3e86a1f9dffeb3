use crate::{scope::DEFAULT_MAX_BREADCRUMBS, transport::NoopTransport, Client, Transport};

/// Configuration for [`Client`].
///
/// # Examples
/// ```
/// # use scopekit::{ClientConfig, Event};
/// let client = ClientConfig::new()
///     .max_breadcrumbs(50)
///     .release("my-app@1.2.3")
///     .transport(|event: Event| {
///         println!("{:?}", event);
///     })
///     .to_client();
/// ```
pub struct ClientConfig {
    pub(crate) max_breadcrumbs: usize,
    pub(crate) release: Option<String>,
    pub(crate) environment: Option<String>,
    pub(crate) transport: Box<dyn Transport + Send + Sync>,
}

impl ClientConfig {
    /// Create a default configuration: 100 breadcrumbs, no release or environment, and a
    /// transport that discards every event.
    ///
    /// ```
    /// # use scopekit::ClientConfig;
    /// ClientConfig::new();
    /// ```
    pub fn new() -> Self {
        ClientConfig {
            max_breadcrumbs: DEFAULT_MAX_BREADCRUMBS,
            release: None,
            environment: None,
            transport: Box::new(NoopTransport),
        }
    }

    /// Set the number of breadcrumbs retained by scopes created for the client.
    pub fn max_breadcrumbs(mut self, max_breadcrumbs: usize) -> Self {
        self.max_breadcrumbs = max_breadcrumbs;
        self
    }

    /// Set the release reported with events that don't carry one.
    pub fn release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    /// Set the environment reported with events that don't carry one.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the transport that receives finalized events.
    ///
    /// ```
    /// # use scopekit::{ClientConfig, Event};
    /// let config = ClientConfig::new().transport(|event: Event| {
    ///   println!("{:?}", event);
    /// });
    /// ```
    pub fn transport(mut self, transport: impl Transport + Send + Sync + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use scopekit::{ClientConfig, Client};
    /// let client: Client = ClientConfig::new().to_client();
    /// ```
    pub fn to_client(self) -> Client {
        Client::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new()
    }
}

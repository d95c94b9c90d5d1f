//! Shared application state
//!
//! Built once at startup and shared read-only between requests.

use crate::config::Environment;
use crate::services::ResourceDirectory;

/// State handed to every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Hosting environment
    pub environment: Environment,
    /// Resource directory, when file serving is enabled
    pub resources: Option<ResourceDirectory>,
    /// Port plain-HTTP requests are redirected to, when redirection is enabled
    pub https_redirect_port: Option<u16>,
}

impl AppState {
    /// State for the bare API host (no file serving, no redirection)
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Enable file serving from the given directory
    pub fn with_resources(mut self, resources: ResourceDirectory) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Redirect plain-HTTP requests to HTTPS on the given port
    pub fn with_https_redirect(mut self, port: u16) -> Self {
        self.https_redirect_port = Some(port);
        self
    }
}

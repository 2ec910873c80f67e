//! Logging capability handed to connectors

use tracing::debug;

/// Debug logging sink injected into a connector at construction
pub trait Logger: Send + Sync {
    /// Record a debug message
    fn debug(&self, message: &str);
}

/// `Logger` backed by `tracing`
#[derive(Debug, Clone)]
pub struct TracingLogger {
    connector: &'static str,
}

impl TracingLogger {
    /// Create a logger that tags every event with the connector name
    pub fn new(connector: &'static str) -> Self {
        Self { connector }
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!(connector = self.connector, "{}", message);
    }
}

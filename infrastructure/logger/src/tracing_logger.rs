use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `catalog` target, tagged
/// with the component that emitted them.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("catalog")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "catalog", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "catalog", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "catalog", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "catalog", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_catalog_component() {
        assert_eq!(TracingLogger::default().component(), "catalog");
        assert_eq!(TracingLogger::new("products").component(), "products");
    }

    #[test]
    fn should_log_without_a_subscriber() {
        let logger = TracingLogger::new("products");

        logger.info("created");
        logger.debug("details");
    }
}

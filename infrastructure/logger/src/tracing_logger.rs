use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port adapter that forwards use-case messages to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_catalog::use_case", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_catalog::use_case", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_catalog::use_case", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_catalog::use_case", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_accept_messages_without_a_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("Creating product: Product1");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
    }
}

use crate::app::input::Input;
use crate::core::registry::Registry;
use crate::domain::ports::Logger;
use crate::utils::error::{RegkitError, Result};

/// Dependencies owned by every application instance: an input accessor, a
/// configuration registry and an optional logger.
pub struct AppContext {
    input: Input,
    config: Registry,
    logger: Option<Box<dyn Logger>>,
}

impl AppContext {
    /// Construct a context; omitted dependencies fall back to empty
    /// defaults. The logger is never defaulted and must be attached
    /// explicitly, usually from the `initialise` hook.
    pub fn new(input: Option<Input>, config: Option<Registry>) -> Self {
        Self {
            input: input.unwrap_or_default(),
            config: config.unwrap_or_default(),
            logger: None,
        }
    }

    /// Context for a command-line invocation, reading the process arguments.
    pub fn cli() -> Self {
        Self::new(Some(Input::from_args(std::env::args().skip(1))), None)
    }

    /// Context for a web request, reading a query string.
    pub fn web(query: &str) -> Self {
        Self::new(Some(Input::from_query(query)), None)
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn config(&self) -> &Registry {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Registry {
        &mut self.config
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// The attached logger. Fails with a missing-dependency error when no
    /// logger has been set; guard with `has_logger` when it is optional.
    pub fn logger(&self) -> Result<&dyn Logger> {
        self.logger
            .as_deref()
            .ok_or_else(|| RegkitError::MissingDependencyError {
                name: "logger".to_string(),
            })
    }

    /// Attach or replace the logger.
    pub fn set_logger(&mut self, logger: Box<dyn Logger>) {
        self.logger = Some(logger);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::RecordingLogger;
    use std::sync::Arc;

    #[test]
    fn test_logger_guard() {
        let context = AppContext::new(None, None);

        assert!(!context.has_logger());
        assert!(matches!(
            context.logger().unwrap_err(),
            RegkitError::MissingDependencyError { .. }
        ));
    }

    #[test]
    fn test_attached_logger_is_returned() {
        let recorder = Arc::new(RecordingLogger::new());
        let mut context = AppContext::new(None, None);
        context.set_logger(Box::new(Arc::clone(&recorder)));

        assert!(context.has_logger());
        context.logger().unwrap().info("hello");
        assert_eq!(recorder.messages(), vec!["info: hello".to_string()]);
    }

    #[test]
    fn test_defaults_are_empty() {
        let context = AppContext::default();
        assert!(context.input().is_empty());
        assert!(context.config().root().is_empty());
    }
}

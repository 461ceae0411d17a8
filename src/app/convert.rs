use crate::app::{AppContext, Application};
use crate::core::registry::Registry;
use crate::domain::ports::ConfigProvider;
use crate::formats::FormatRegistry;
use crate::utils::error::Result;
use crate::utils::logger::TracingLogger;

/// Application that loads a registry file and writes it back out in the
/// format implied by the output path's extension.
pub struct ConvertApp<C: ConfigProvider> {
    context: AppContext,
    config: C,
    formats: FormatRegistry,
}

impl<C: ConfigProvider> ConvertApp<C> {
    pub fn new(config: C) -> Self {
        Self::with_context(AppContext::default(), config)
    }

    pub fn with_context(context: AppContext, config: C) -> Self {
        Self {
            context,
            config,
            formats: FormatRegistry::with_defaults(),
        }
    }
}

impl<C: ConfigProvider> Application for ConvertApp<C> {
    fn initialise(&mut self) -> Result<()> {
        // A logger attached before boot (tests, embedding) is kept.
        if !self.context.has_logger() {
            self.context.set_logger(Box::new(TracingLogger));
        }
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        let logger = self.context.logger()?;

        logger.info(&format!(
            "Converting {} -> {}",
            self.config.input_path(),
            self.config.output_path()
        ));

        let registry = Registry::load_file_as(
            self.config.input_path(),
            self.formats.get(self.config.input_format())?,
        )?;
        registry.save_file_as(
            self.config.output_path(),
            self.formats.get(self.config.output_format())?,
        )?;

        logger.info("Conversion complete");
        Ok(())
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut AppContext {
        &mut self.context
    }
}

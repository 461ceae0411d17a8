pub mod context;
pub mod convert;
pub mod input;

pub use context::AppContext;
pub use input::Input;

use crate::utils::error::Result;

/// Base contract for CLI and web applications.
///
/// Lifecycle: constructed with an `AppContext`, then `initialise` runs once
/// before the first execution (attach loggers and other config-dependent
/// setup there), then `execute` runs once per request or command.
pub trait Application {
    /// Lifecycle hook, invoked exactly once by the engine.
    fn initialise(&mut self) -> Result<()> {
        Ok(())
    }

    /// Main entry point, invoked per request.
    fn execute(&mut self) -> Result<()>;

    fn context(&self) -> &AppContext;

    fn context_mut(&mut self) -> &mut AppContext;
}

use crate::app::Application;
use crate::utils::error::Result;

/// Drives an application through its lifecycle: the initialise hook runs
/// once for the engine's lifetime, then each `run` call executes the
/// application once.
pub struct AppEngine<A: Application> {
    app: A,
    initialised: bool,
}

impl<A: Application> AppEngine<A> {
    pub fn new(app: A) -> Self {
        Self {
            app,
            initialised: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if !self.initialised {
            tracing::debug!("Initialising application");
            self.app.initialise()?;
            self.initialised = true;
        }

        tracing::debug!("Executing application");
        self.app.execute()
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn into_inner(self) -> A {
        self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppContext;

    struct CountingApp {
        context: AppContext,
        initialised: u32,
        executed: u32,
    }

    impl CountingApp {
        fn new() -> Self {
            Self {
                context: AppContext::default(),
                initialised: 0,
                executed: 0,
            }
        }
    }

    impl Application for CountingApp {
        fn initialise(&mut self) -> Result<()> {
            self.initialised += 1;
            Ok(())
        }

        fn execute(&mut self) -> Result<()> {
            self.executed += 1;
            Ok(())
        }

        fn context(&self) -> &AppContext {
            &self.context
        }

        fn context_mut(&mut self) -> &mut AppContext {
            &mut self.context
        }
    }

    #[test]
    fn test_initialise_runs_once_execute_repeats() {
        let mut engine = AppEngine::new(CountingApp::new());

        engine.run().unwrap();
        engine.run().unwrap();
        engine.run().unwrap();

        let app = engine.into_inner();
        assert_eq!(app.initialised, 1);
        assert_eq!(app.executed, 3);
    }

    struct FailingInit {
        context: AppContext,
    }

    impl Application for FailingInit {
        fn initialise(&mut self) -> Result<()> {
            Err(crate::utils::error::RegkitError::MissingConfigError {
                field: "required".to_string(),
            })
        }

        fn execute(&mut self) -> Result<()> {
            panic!("execute must not run when initialise fails");
        }

        fn context(&self) -> &AppContext {
            &self.context
        }

        fn context_mut(&mut self) -> &mut AppContext {
            &mut self.context
        }
    }

    #[test]
    fn test_failed_initialise_skips_execute() {
        let mut engine = AppEngine::new(FailingInit {
            context: AppContext::default(),
        });
        assert!(engine.run().is_err());
    }
}

use crate::core::registry::Registry;
use crate::domain::ports::DatabaseDriver;
use crate::domain::value::Value;
use crate::utils::error::{RegkitError, Result};
use std::sync::Arc;

/// Base model: a database driver reference plus a state registry.
///
/// The driver slot accepts any `DatabaseDriver` without validation and is
/// replaceable at runtime; the last setter wins and no history is kept.
#[derive(Default)]
pub struct BaseModel {
    db: Option<Arc<dyn DatabaseDriver>>,
    state: Registry,
}

impl BaseModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(db: Arc<dyn DatabaseDriver>) -> Self {
        Self {
            db: Some(db),
            state: Registry::new(),
        }
    }

    pub fn set_db(&mut self, db: Arc<dyn DatabaseDriver>) {
        self.db = Some(db);
    }

    pub fn has_db(&self) -> bool {
        self.db.is_some()
    }

    /// The current driver, or a missing-dependency error when none is set.
    pub fn db(&self) -> Result<&Arc<dyn DatabaseDriver>> {
        self.db
            .as_ref()
            .ok_or_else(|| RegkitError::MissingDependencyError {
                name: "database driver".to_string(),
            })
    }

    pub fn state(&self) -> &Registry {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut Registry {
        &mut self.state
    }

    pub fn get_state(&self, path: &str) -> Option<&Value> {
        self.state.get(path)
    }

    pub fn set_state(&mut self, path: &str, value: impl Into<Value>) {
        self.state.set(path, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MemoryDriver;

    #[test]
    fn test_driver_is_unset_by_default() {
        let model = BaseModel::new();
        assert!(!model.has_db());
        assert!(matches!(
            model.db().unwrap_err(),
            RegkitError::MissingDependencyError { .. }
        ));
    }

    #[test]
    fn test_set_db_last_write_wins() {
        let first: Arc<dyn DatabaseDriver> = Arc::new(MemoryDriver::new());
        let second: Arc<dyn DatabaseDriver> = Arc::new(MemoryDriver::new());

        let mut model = BaseModel::new();
        model.set_db(Arc::clone(&first));
        model.set_db(Arc::clone(&second));

        assert!(Arc::ptr_eq(model.db().unwrap(), &second));
        assert!(!Arc::ptr_eq(model.db().unwrap(), &first));
    }

    #[test]
    fn test_state_accessors() {
        let mut model = BaseModel::new();
        model.set_state("filter.published", true);

        assert_eq!(
            model.get_state("filter.published"),
            Some(&Value::Boolean(true))
        );
        assert!(model.get_state("filter.missing").is_none());
    }
}

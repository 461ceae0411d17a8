pub mod iterator;

pub use iterator::{DynRowIterator, RowIterator};

use crate::domain::ports::DatabaseDriver;
use crate::utils::error::Result;

/// Run a query on a driver and wrap the resulting cursor in an iterator.
pub fn query_rows(driver: &dyn DatabaseDriver, sql: &str) -> Result<DynRowIterator> {
    Ok(RowIterator::new(driver.query(sql)?))
}

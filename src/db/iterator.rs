use crate::domain::ports::{Cursor, Row};
use crate::utils::error::Result;

/// Generic cursor-backed row iterator.
///
/// Fused: once the cursor reports the end of the result set or an error,
/// every later call yields `None`.
pub struct RowIterator<C: Cursor> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> RowIterator<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }
}

impl<C: Cursor> Iterator for RowIterator<C> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.fetch() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// The driver-facing iterator over a boxed cursor. A plain specialization:
/// no driver currently needs behavior beyond the generic iterator.
pub type DynRowIterator = RowIterator<Box<dyn Cursor>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::ValueMap;
    use crate::utils::error::RegkitError;

    struct ScriptedCursor {
        steps: std::vec::IntoIter<Result<Option<Row>>>,
    }

    impl Cursor for ScriptedCursor {
        fn fetch(&mut self) -> Result<Option<Row>> {
            self.steps.next().unwrap_or(Ok(None))
        }
    }

    fn row(id: i64) -> Row {
        let mut row = ValueMap::new();
        row.insert("id", id);
        row
    }

    #[test]
    fn test_iterates_rows_then_fuses() {
        let cursor = ScriptedCursor {
            steps: vec![Ok(Some(row(1))), Ok(Some(row(2))), Ok(None)].into_iter(),
        };
        let mut iter = RowIterator::new(cursor);

        assert_eq!(iter.next().unwrap().unwrap(), row(1));
        assert_eq!(iter.next().unwrap().unwrap(), row(2));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_error_ends_iteration() {
        let cursor = ScriptedCursor {
            steps: vec![
                Ok(Some(row(1))),
                Err(RegkitError::DatabaseError {
                    message: "connection lost".to_string(),
                }),
                Ok(Some(row(2))),
            ]
            .into_iter(),
        };
        let mut iter = RowIterator::new(cursor);

        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }
}

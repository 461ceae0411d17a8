use crate::domain::value::ValueMap;
use crate::utils::error::Result;
use std::fmt;

/// A stateless converter between the generic value tree and one textual
/// representation. Implementations must invert each other exactly:
/// `from_text(to_text(root)?)? == root` for every tree the format can
/// represent.
pub trait Format: Send + Sync {
    fn to_text(&self, root: &ValueMap) -> Result<String>;
    fn from_text(&self, text: &str) -> Result<ValueMap>;
}

impl fmt::Debug for dyn Format + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Format")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Leveled logging facade attached to an application at runtime.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for dyn Logger + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

/// One fetched database row: column name to value, in column order.
pub type Row = ValueMap;

/// A forward-only result cursor produced by a driver query.
pub trait Cursor {
    /// Fetch the next row, or `None` once the result set is exhausted.
    fn fetch(&mut self) -> Result<Option<Row>>;
}

impl fmt::Debug for dyn Cursor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cursor")
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn fetch(&mut self) -> Result<Option<Row>> {
        (**self).fetch()
    }
}

/// Connection-level database driver contract. Drivers are external; this
/// crate only consumes their query and execute surface.
pub trait DatabaseDriver: Send + Sync {
    fn query(&self, sql: &str) -> Result<Box<dyn Cursor>>;
    fn execute(&self, sql: &str) -> Result<u64>;
}

impl fmt::Debug for dyn DatabaseDriver + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DatabaseDriver")
    }
}

/// The format name implied by a file path's extension, or the empty string
/// when the path has none.
pub fn format_name_for_path(path: &str) -> &str {
    std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;

    /// Name of the input converter; defaults to the input extension.
    fn input_format(&self) -> &str {
        format_name_for_path(self.input_path())
    }

    /// Name of the output converter; defaults to the output extension.
    fn output_format(&self) -> &str {
        format_name_for_path(self.output_path())
    }

    fn verbose(&self) -> bool {
        false
    }
}

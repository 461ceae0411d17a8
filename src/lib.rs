pub mod app;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod formats;
pub mod mocks;
pub mod model;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{AppContext, Application, Input};
pub use config::JobConfig;
pub use crate::core::{AppEngine, Registry};
pub use domain::ports::{ConfigProvider, DatabaseDriver, Format, LogLevel, Logger};
pub use domain::value::{Value, ValueMap};
pub use formats::FormatRegistry;
pub use model::BaseModel;
pub use utils::error::{RegkitError, Result};

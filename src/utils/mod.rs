pub mod env;
pub mod error;
pub mod logger;
pub mod validation;

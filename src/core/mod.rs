pub mod engine;
pub mod registry;

pub use engine::AppEngine;
pub use registry::Registry;

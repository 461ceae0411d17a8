pub mod ports;
pub mod value;

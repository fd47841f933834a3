//! Placeholder price chart: a synthetic series generated around the current
//! price. It is not historical data.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;

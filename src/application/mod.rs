pub mod listing_loader;

pub use listing_loader::*;

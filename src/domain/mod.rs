//! Domain layer: listing records, pagination, the synthetic chart series and
//! the logging/error ports shared by every other layer.

pub mod chart;
pub mod errors;
pub mod listing;
pub mod logging;
pub mod pagination;

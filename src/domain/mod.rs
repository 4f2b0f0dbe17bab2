// Domain layer: entry/estimate models, the price catalog and the estimator ports.
// No I/O here.

pub mod catalog;
pub mod entries;
pub mod lenient;
pub mod model;
pub mod ports;

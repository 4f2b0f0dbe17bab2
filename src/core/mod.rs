pub mod aggregate;
mod area;
pub mod engine;
pub mod flooring;
pub mod paint;
pub mod window;

pub use crate::domain::catalog::PriceCatalog;
pub use crate::domain::entries::ProjectEntries;
pub use crate::domain::model::{Category, TierEstimates};
pub use crate::domain::ports::Estimator;
pub use crate::utils::error::Result;

pub use flooring::FlooringEstimator;
pub use paint::PaintEstimator;
pub use window::WindowEstimator;

use crate::domain::model::{
    AggregateEstimate, AreaEstimate, DefaultTiers, FlooringEntry, PaintEntry, WindowEntry,
    WindowEstimate,
};

pub fn estimate_windows(
    catalog: &PriceCatalog,
    entries: &[WindowEntry],
) -> TierEstimates<WindowEstimate> {
    WindowEstimator::new(catalog).estimate(entries)
}

pub fn estimate_painting(
    catalog: &PriceCatalog,
    entries: &[PaintEntry],
) -> TierEstimates<AreaEstimate> {
    PaintEstimator::new(catalog).estimate(entries)
}

pub fn estimate_flooring(
    catalog: &PriceCatalog,
    entries: &[FlooringEntry],
) -> TierEstimates<AreaEstimate> {
    FlooringEstimator::new(catalog).estimate(entries)
}

pub fn estimate_project(
    catalog: &PriceCatalog,
    window_entries: &[WindowEntry],
    paint_entries: &[PaintEntry],
    flooring_entries: &[FlooringEntry],
    defaults: &DefaultTiers,
) -> Result<AggregateEstimate> {
    aggregate::aggregate(
        &estimate_windows(catalog, window_entries),
        &estimate_painting(catalog, paint_entries),
        &estimate_flooring(catalog, flooring_entries),
        defaults,
    )
}

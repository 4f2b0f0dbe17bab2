pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, project_config::ProjectConfig};
pub use crate::core::{
    engine::EstimationEngine, estimate_flooring, estimate_painting, estimate_project,
    estimate_windows, FlooringEstimator, PaintEstimator, WindowEstimator,
};
pub use crate::domain::catalog::{AreaTier, PriceCatalog, WindowTier};
pub use crate::domain::entries::{EntryId, EntryList, ProjectEntries};
pub use crate::domain::model::{
    AggregateEstimate, AreaEstimate, Category, DefaultTiers, FlooringEntry, PaintEntry,
    ProjectEstimate, RoomArea, RoomQuantity, TierEstimate, TierEstimates, WindowEntry,
    WindowEstimate,
};
pub use crate::domain::ports::{CatalogProvider, Estimator, Storage};
pub use crate::utils::error::{EstimateError, Result};

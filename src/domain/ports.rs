use crate::domain::catalog::PriceCatalog;
use crate::domain::model::{Category, DefaultTiers, TierEstimates};
use crate::utils::error::Result;

/// Turns one category's entries into per-tier estimates.
pub trait Estimator: Send + Sync {
    type Entry;
    type Estimate;

    fn category(&self) -> Category;
    fn estimate(&self, entries: &[Self::Entry]) -> TierEstimates<Self::Estimate>;
}

pub trait CatalogProvider: Send + Sync {
    fn catalog(&self) -> &PriceCatalog;
    fn default_tiers(&self) -> &DefaultTiers;
}

/// Destination for rendered reports.
pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

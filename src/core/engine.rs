use crate::core::aggregate::aggregate;
use crate::core::{
    Estimator, FlooringEstimator, PaintEstimator, PriceCatalog, ProjectEntries, TierEstimates,
    WindowEstimator,
};
use crate::domain::model::{DefaultTiers, ProjectEstimate};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;

/// Runs every category estimator and the aggregate in one synchronous pass.
#[derive(Debug, Clone)]
pub struct EstimationEngine {
    catalog: PriceCatalog,
    defaults: DefaultTiers,
}

impl EstimationEngine {
    pub fn new(catalog: PriceCatalog, defaults: DefaultTiers) -> Self {
        Self { catalog, defaults }
    }

    pub fn from_provider<P: CatalogProvider>(provider: &P) -> Self {
        Self::new(provider.catalog().clone(), provider.default_tiers().clone())
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn defaults(&self) -> &DefaultTiers {
        &self.defaults
    }

    pub fn run(&self, entries: &ProjectEntries) -> Result<ProjectEstimate> {
        tracing::info!(
            "Estimating {} window, {} paint and {} flooring entries",
            entries.windows.len(),
            entries.paint.len(),
            entries.flooring.len()
        );

        let windows = run_estimator(&WindowEstimator::new(&self.catalog), entries.windows.as_slice());
        let paint = run_estimator(&PaintEstimator::new(&self.catalog), entries.paint.as_slice());
        let flooring =
            run_estimator(&FlooringEstimator::new(&self.catalog), entries.flooring.as_slice());

        let total = aggregate(&windows, &paint, &flooring, &self.defaults)?;
        tracing::info!(
            "Project estimate: {:.2} - {:.2} (basis: {}, {}, {})",
            total.low,
            total.high,
            total.basis.window,
            total.basis.paint,
            total.basis.flooring
        );

        Ok(ProjectEstimate {
            windows,
            paint,
            flooring,
            total,
        })
    }
}

fn run_estimator<E: Estimator>(estimator: &E, entries: &[E::Entry]) -> TierEstimates<E::Estimate> {
    let estimates = estimator.estimate(entries);
    tracing::debug!(
        "Priced {} {} tiers from {} entries",
        estimates.len(),
        estimator.category(),
        entries.len()
    );
    estimates
}

impl Default for EstimationEngine {
    fn default() -> Self {
        Self::new(PriceCatalog::default(), DefaultTiers::default())
    }
}

use crate::core::area::price_area_tiers;
use crate::core::{Category, Estimator, PriceCatalog, TierEstimates};
use crate::domain::model::{AreaEstimate, FlooringEntry, RoomArea};

pub struct FlooringEstimator<'a> {
    catalog: &'a PriceCatalog,
}

impl<'a> FlooringEstimator<'a> {
    pub fn new(catalog: &'a PriceCatalog) -> Self {
        Self { catalog }
    }
}

impl Estimator for FlooringEstimator<'_> {
    type Entry = FlooringEntry;
    type Estimate = AreaEstimate;

    fn category(&self) -> Category {
        Category::Flooring
    }

    fn estimate(&self, entries: &[FlooringEntry]) -> TierEstimates<AreaEstimate> {
        let mut total_area = 0.0;
        let mut rooms = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let area = match entry.area_sq_ft() {
                Ok(area) => area,
                Err(e) => {
                    tracing::debug!("Skipping flooring entry {}: {}", index, e);
                    continue;
                }
            };

            total_area += area;
            if let Some(name) = entry.room_label() {
                rooms.push(RoomArea {
                    name: name.to_string(),
                    area,
                    wall_count: None,
                });
            }
        }

        price_area_tiers(Category::Flooring, &self.catalog.flooring, total_area, &rooms)
    }
}

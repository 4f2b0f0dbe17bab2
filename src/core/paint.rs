use crate::core::area::price_area_tiers;
use crate::core::{Category, Estimator, PriceCatalog, TierEstimates};
use crate::domain::model::{AreaEstimate, PaintEntry, RoomArea};

pub struct PaintEstimator<'a> {
    catalog: &'a PriceCatalog,
}

impl<'a> PaintEstimator<'a> {
    pub fn new(catalog: &'a PriceCatalog) -> Self {
        Self { catalog }
    }
}

impl Estimator for PaintEstimator<'_> {
    type Entry = PaintEntry;
    type Estimate = AreaEstimate;

    fn category(&self) -> Category {
        Category::Paint
    }

    fn estimate(&self, entries: &[PaintEntry]) -> TierEstimates<AreaEstimate> {
        let mut total_area = 0.0;
        let mut rooms = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let area = match entry.area_sq_ft() {
                Ok(area) => area,
                Err(e) => {
                    tracing::debug!("Skipping paint entry {}: {}", index, e);
                    continue;
                }
            };

            total_area += area;
            if let Some(name) = entry.room_label() {
                rooms.push(RoomArea {
                    name: name.to_string(),
                    area,
                    wall_count: Some(entry.wall_count()),
                });
            }
        }

        price_area_tiers(Category::Paint, &self.catalog.paint, total_area, &rooms)
    }
}

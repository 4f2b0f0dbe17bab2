use crate::core::{Category, TierEstimates};
use crate::domain::catalog::AreaTier;
use crate::domain::model::{AreaEstimate, RoomArea};

/// Prices a summed area against every tier. The room breakdown is the same
/// for all tiers; only the cost differs. Costs are left unrounded.
pub(crate) fn price_area_tiers(
    category: Category,
    tiers: &[AreaTier],
    total_area: f64,
    rooms: &[RoomArea],
) -> TierEstimates<AreaEstimate> {
    let mut estimates = TierEstimates::new(category);
    for tier in tiers {
        let cost = total_area * tier.price_per_sq_ft;
        tracing::debug!("{} tier {}: {} sq ft -> {}", category, tier.id, total_area, cost);
        estimates.push(
            &tier.id,
            &tier.name,
            AreaEstimate {
                total_area,
                cost,
                rooms: rooms.to_vec(),
            },
        );
    }
    estimates
}

use crate::core::TierEstimates;
use crate::domain::model::{AggregateEstimate, AreaEstimate, DefaultTiers, WindowEstimate};
use crate::utils::error::Result;

/// Blends one tier per category into the project total.
///
/// Paint and flooring are point values, so they add the same amount to both
/// ends of the range; only the window component widens it.
pub fn aggregate(
    windows: &TierEstimates<WindowEstimate>,
    paint: &TierEstimates<AreaEstimate>,
    flooring: &TierEstimates<AreaEstimate>,
    defaults: &DefaultTiers,
) -> Result<AggregateEstimate> {
    let window = windows.get(&defaults.window)?;
    let paint = paint.get(&defaults.paint)?;
    let flooring = flooring.get(&defaults.flooring)?;

    Ok(AggregateEstimate {
        low: window.low + paint.cost + flooring.cost,
        high: window.high + paint.cost + flooring.cost,
        basis: defaults.clone(),
    })
}

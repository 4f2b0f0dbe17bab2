use crate::core::{Category, Estimator, PriceCatalog, TierEstimates};
use crate::domain::model::{RoomQuantity, WindowEntry, WindowEstimate};

/// A window group that passed validation.
struct MeasuredWindow {
    area_sq_ft: f64,
    quantity: u32,
}

pub struct WindowEstimator<'a> {
    catalog: &'a PriceCatalog,
}

impl<'a> WindowEstimator<'a> {
    pub fn new(catalog: &'a PriceCatalog) -> Self {
        Self { catalog }
    }

    /// Installed price of one window, rounded to whole currency units.
    pub fn unit_price(&self, base_price: f64, area_sq_ft: f64) -> f64 {
        (base_price * area_sq_ft * self.catalog.installation_factor).round()
    }
}

impl Estimator for WindowEstimator<'_> {
    type Entry = WindowEntry;
    type Estimate = WindowEstimate;

    fn category(&self) -> Category {
        Category::Windows
    }

    fn estimate(&self, entries: &[WindowEntry]) -> TierEstimates<WindowEstimate> {
        let mut measured = Vec::with_capacity(entries.len());
        let mut room_quantities = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            match entry.area_sq_ft() {
                Ok(area_sq_ft) => {
                    let quantity = entry.quantity();
                    if let Some(name) = entry.room_label() {
                        room_quantities.push(RoomQuantity {
                            name: name.to_string(),
                            quantity,
                        });
                    }
                    measured.push(MeasuredWindow {
                        area_sq_ft,
                        quantity,
                    });
                }
                Err(e) => tracing::debug!("Skipping window entry {}: {}", index, e),
            }
        }

        let mut estimates = TierEstimates::new(Category::Windows);
        for tier in &self.catalog.windows {
            let total: f64 = measured
                .iter()
                .map(|window| {
                    self.unit_price(tier.base_price, window.area_sq_ft)
                        * f64::from(window.quantity)
                })
                .sum();

            let low = (total * (1.0 - self.catalog.variance)).round();
            let high = (total * (1.0 + self.catalog.variance)).round();
            tracing::debug!("Window tier {}: total {} -> {}..{}", tier.id, total, low, high);

            estimates.push(
                &tier.id,
                &tier.name,
                WindowEstimate {
                    low,
                    high,
                    room_quantities: room_quantities.clone(),
                },
            );
        }

        estimates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::WindowTier;

    fn single_tier_catalog(base_price: f64) -> PriceCatalog {
        PriceCatalog {
            windows: vec![WindowTier {
                id: "basic".to_string(),
                name: "Basic Blinds".to_string(),
                base_price,
                max_width: None,
            }],
            ..PriceCatalog::default()
        }
    }

    #[test]
    fn test_empty_input_is_zero_for_every_tier() {
        let catalog = PriceCatalog::default();
        let estimates = WindowEstimator::new(&catalog).estimate(&[]);
        assert_eq!(estimates.len(), catalog.windows.len());
        for tier in estimates.iter() {
            assert_eq!(tier.estimate.low, 0.0);
            assert_eq!(tier.estimate.high, 0.0);
            assert!(tier.estimate.room_quantities.is_empty());
        }
    }

    #[test]
    fn test_reference_window_range() {
        let catalog = single_tier_catalog(125.0);
        let estimates = WindowEstimator::new(&catalog)
            .estimate(&[WindowEntry::new("Living Room", 36.0, 48.0, 2)]);
        let estimate = estimates.get("basic").unwrap();
        assert_eq!(estimate.low, 4050.0);
        assert_eq!(estimate.high, 4950.0);
        assert_eq!(
            estimate.room_quantities,
            vec![RoomQuantity {
                name: "Living Room".to_string(),
                quantity: 2
            }]
        );
    }

    #[test]
    fn test_unit_price_rounded_before_quantity() {
        // 30x30 in = 6.25 sq ft; 125 * 6.25 * 1.5 = 1171.875 -> 1172 per window
        let catalog = single_tier_catalog(125.0);
        let estimator = WindowEstimator::new(&catalog);
        assert_eq!(estimator.unit_price(125.0, 6.25), 1172.0);

        let estimates = estimator.estimate(&[WindowEntry::new("Bath", 30.0, 30.0, 3)]);
        let estimate = estimates.get("basic").unwrap();
        // total 3516; 3164.4 -> 3164, 3867.6 -> 3868
        assert_eq!(estimate.low, 3164.0);
        assert_eq!(estimate.high, 3868.0);
    }

    #[test]
    fn test_default_catalog_prices_both_tiers() {
        let catalog = PriceCatalog::default();
        let estimates =
            WindowEstimator::new(&catalog).estimate(&[WindowEntry::new("Den", 36.0, 48.0, 1)]);
        // roller: 150 * 12 * 1.5 = 2700
        let roller = estimates.get("roller").unwrap();
        assert_eq!(roller.low, 2430.0);
        assert_eq!(roller.high, 2970.0);
        assert_eq!(estimates.tiers[0].tier_id, "faux_cordless");
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let catalog = single_tier_catalog(125.0);
        let estimator = WindowEstimator::new(&catalog);
        let valid = WindowEntry::new("Living Room", 36.0, 48.0, 2);
        let entries = vec![
            valid.clone(),
            WindowEntry::new("Garage", 0.0, 48.0, 1),
            WindowEntry::new("Attic", f64::NAN, 48.0, 1),
            WindowEntry {
                room_name: Some("Porch".to_string()),
                width: Some(30.0),
                ..Default::default()
            },
        ];
        assert_eq!(estimator.estimate(&entries), estimator.estimate(&[valid]));
    }

    #[test]
    fn test_unnamed_entries_price_but_are_not_listed() {
        let catalog = single_tier_catalog(125.0);
        let entries = vec![
            WindowEntry {
                room_name: None,
                width: Some(36.0),
                height: Some(48.0),
                quantity: Some(1),
            },
            WindowEntry::new("", 36.0, 48.0, 1),
        ];
        let estimates = WindowEstimator::new(&catalog).estimate(&entries);
        let estimate = estimates.get("basic").unwrap();
        assert_eq!(estimate.low, 4050.0);
        assert!(estimate.room_quantities.is_empty());
    }
}

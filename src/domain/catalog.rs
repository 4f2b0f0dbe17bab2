use crate::domain::model::Category;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_price, validate_range, validate_unique_ids,
    Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowTier {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    /// Widest window (inches) a single treatment of this tier covers.
    #[serde(default)]
    pub max_width: Option<f64>,
}

/// Paint and flooring tiers are priced per square foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaTier {
    pub id: String,
    pub name: String,
    pub price_per_sq_ft: f64,
}

/// Read-only product tiers per category. Built once, then shared by reference.
///
/// Fields missing from a deserialized catalog keep their built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceCatalog {
    /// Markup over base price covering installation.
    pub installation_factor: f64,
    /// Market variance applied to window totals (0.10 = ±10%).
    pub variance: f64,
    pub windows: Vec<WindowTier>,
    pub paint: Vec<AreaTier>,
    pub flooring: Vec<AreaTier>,
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self {
            installation_factor: 1.5,
            variance: 0.10,
            windows: vec![
                WindowTier {
                    id: "faux_cordless".to_string(),
                    name: "Faux Cordless Blinds".to_string(),
                    base_price: 125.0,
                    max_width: Some(96.0),
                },
                WindowTier {
                    id: "roller".to_string(),
                    name: "Roller Shades".to_string(),
                    base_price: 150.0,
                    max_width: Some(120.0),
                },
            ],
            paint: vec![
                area_tier("standard", "Standard Paint", 2.50),
                area_tier("premium", "Premium Paint", 3.75),
            ],
            flooring: vec![
                area_tier("laminate", "Laminate", 4.50),
                area_tier("hardwood", "Hardwood", 8.75),
                area_tier("vinyl", "Luxury Vinyl", 5.25),
            ],
        }
    }
}

fn area_tier(id: &str, name: &str, price_per_sq_ft: f64) -> AreaTier {
    AreaTier {
        id: id.to_string(),
        name: name.to_string(),
        price_per_sq_ft,
    }
}

fn unknown_tier(category: Category, tier_id: &str) -> EstimateError {
    EstimateError::UnknownTier {
        category: category.to_string(),
        tier_id: tier_id.to_string(),
    }
}

impl PriceCatalog {
    pub fn window_tier(&self, tier_id: &str) -> Result<&WindowTier> {
        self.windows
            .iter()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| unknown_tier(Category::Windows, tier_id))
    }

    pub fn paint_tier(&self, tier_id: &str) -> Result<&AreaTier> {
        self.paint
            .iter()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| unknown_tier(Category::Paint, tier_id))
    }

    pub fn flooring_tier(&self, tier_id: &str) -> Result<&AreaTier> {
        self.flooring
            .iter()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| unknown_tier(Category::Flooring, tier_id))
    }

    /// Display name of any tier, looked up by category.
    pub fn tier_name(&self, category: Category, tier_id: &str) -> Result<&str> {
        match category {
            Category::Windows => self.window_tier(tier_id).map(|tier| tier.name.as_str()),
            Category::Paint => self.paint_tier(tier_id).map(|tier| tier.name.as_str()),
            Category::Flooring => self.flooring_tier(tier_id).map(|tier| tier.name.as_str()),
        }
    }

    fn validate_area_tiers(field: &str, tiers: &[AreaTier]) -> Result<()> {
        if tiers.is_empty() {
            return Err(EstimateError::ConfigValidationError {
                field: field.to_string(),
                message: "At least one tier is required".to_string(),
            });
        }
        validate_unique_ids(field, tiers.iter().map(|tier| tier.id.as_str()))?;
        for tier in tiers {
            validate_non_empty_string(&format!("{}.id", field), &tier.id)?;
            validate_non_empty_string(&format!("{}.name", field), &tier.name)?;
            validate_positive_price(
                &format!("{}.{}.price_per_sq_ft", field, tier.id),
                tier.price_per_sq_ft,
            )?;
        }
        Ok(())
    }
}

impl Validate for PriceCatalog {
    fn validate(&self) -> Result<()> {
        validate_positive_price("catalog.installation_factor", self.installation_factor)?;
        if !self.variance.is_finite() {
            return Err(EstimateError::InvalidConfigValueError {
                field: "catalog.variance".to_string(),
                value: self.variance.to_string(),
                reason: "Variance must be finite".to_string(),
            });
        }
        validate_range("catalog.variance", self.variance, 0.0, 0.99)?;

        if self.windows.is_empty() {
            return Err(EstimateError::ConfigValidationError {
                field: "catalog.windows".to_string(),
                message: "At least one tier is required".to_string(),
            });
        }
        validate_unique_ids(
            "catalog.windows",
            self.windows.iter().map(|tier| tier.id.as_str()),
        )?;
        for tier in &self.windows {
            validate_non_empty_string("catalog.windows.id", &tier.id)?;
            validate_non_empty_string("catalog.windows.name", &tier.name)?;
            validate_positive_price(
                &format!("catalog.windows.{}.base_price", tier.id),
                tier.base_price,
            )?;
            if let Some(max_width) = tier.max_width {
                validate_positive_price(
                    &format!("catalog.windows.{}.max_width", tier.id),
                    max_width,
                )?;
            }
        }

        Self::validate_area_tiers("catalog.paint", &self.paint)?;
        Self::validate_area_tiers("catalog.flooring", &self.flooring)?;
        Ok(())
    }
}

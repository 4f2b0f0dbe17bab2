use crate::domain::lenient;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::{normalize_count, validate_measurement};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SQ_INCHES_PER_SQ_FOOT: f64 = 144.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Windows,
    Paint,
    Flooring,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Windows => "windows",
            Category::Paint => "paint",
            Category::Flooring => "flooring",
        };
        f.write_str(label)
    }
}

/// Products of valid measurements can still overflow to infinity.
fn finite_area(area: f64) -> Result<f64> {
    if area.is_finite() {
        Ok(area)
    } else {
        Err(EstimateError::NonFiniteInput {
            field: "area".to_string(),
        })
    }
}

/// Trimmed room label, `None` when blank.
fn room_label(room_name: &Option<String>) -> Option<&str> {
    room_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// One group of identical windows in a room. Width and height are in inches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowEntry {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: Option<i64>,
}

impl WindowEntry {
    pub fn new(room_name: &str, width: f64, height: f64, quantity: i64) -> Self {
        Self {
            room_name: Some(room_name.to_string()),
            width: Some(width),
            height: Some(height),
            quantity: Some(quantity),
        }
    }

    /// Area of a single window in square feet.
    pub fn area_sq_ft(&self) -> Result<f64> {
        let width = validate_measurement("width", self.width)?;
        let height = validate_measurement("height", self.height)?;
        finite_area(width * height / SQ_INCHES_PER_SQ_FOOT)
    }

    pub fn quantity(&self) -> u32 {
        normalize_count(self.quantity)
    }

    pub fn room_label(&self) -> Option<&str> {
        room_label(&self.room_name)
    }
}

/// A set of walls sharing one length and height, in feet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintEntry {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub wall_count: Option<i64>,
}

impl PaintEntry {
    pub fn new(room_name: &str, length: f64, height: f64, wall_count: i64) -> Self {
        Self {
            room_name: Some(room_name.to_string()),
            length: Some(length),
            height: Some(height),
            wall_count: Some(wall_count),
        }
    }

    /// `length` is one wall's run, repeated over `wall_count` walls.
    pub fn area_sq_ft(&self) -> Result<f64> {
        let length = validate_measurement("length", self.length)?;
        let height = validate_measurement("height", self.height)?;
        finite_area(length * height * f64::from(self.wall_count()))
    }

    pub fn wall_count(&self) -> u32 {
        normalize_count(self.wall_count)
    }

    pub fn room_label(&self) -> Option<&str> {
        room_label(&self.room_name)
    }
}

/// One rectangular floor area, in feet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlooringEntry {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub length: Option<f64>,
    #[serde(default, deserialize_with = "lenient::measurement")]
    pub width: Option<f64>,
}

impl FlooringEntry {
    pub fn new(room_name: &str, length: f64, width: f64) -> Self {
        Self {
            room_name: Some(room_name.to_string()),
            length: Some(length),
            width: Some(width),
        }
    }

    pub fn area_sq_ft(&self) -> Result<f64> {
        let length = validate_measurement("length", self.length)?;
        let width = validate_measurement("width", self.width)?;
        finite_area(length * width)
    }

    pub fn room_label(&self) -> Option<&str> {
        room_label(&self.room_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomQuantity {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomArea {
    pub name: String,
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_count: Option<u32>,
}

/// Range estimate for one window tier, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowEstimate {
    pub low: f64,
    pub high: f64,
    pub room_quantities: Vec<RoomQuantity>,
}

/// Point estimate for one paint or flooring tier. `cost` is not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEstimate {
    pub total_area: f64,
    pub cost: f64,
    pub rooms: Vec<RoomArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEstimate<E> {
    pub tier_id: String,
    pub tier_name: String,
    pub estimate: E,
}

/// Per-tier estimates of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEstimates<E> {
    pub category: Category,
    pub tiers: Vec<TierEstimate<E>>,
}

impl<E> TierEstimates<E> {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            tiers: Vec::new(),
        }
    }

    pub fn push(&mut self, tier_id: &str, tier_name: &str, estimate: E) {
        self.tiers.push(TierEstimate {
            tier_id: tier_id.to_string(),
            tier_name: tier_name.to_string(),
            estimate,
        });
    }

    pub fn get(&self, tier_id: &str) -> Result<&E> {
        self.tiers
            .iter()
            .find(|tier| tier.tier_id == tier_id)
            .map(|tier| &tier.estimate)
            .ok_or_else(|| EstimateError::UnknownTier {
                category: self.category.to_string(),
                tier_id: tier_id.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierEstimate<E>> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// Tier used per category when blending the project total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultTiers {
    pub window: String,
    pub paint: String,
    pub flooring: String,
}

impl Default for DefaultTiers {
    fn default() -> Self {
        Self {
            window: "faux_cordless".to_string(),
            paint: "standard".to_string(),
            flooring: "laminate".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEstimate {
    pub low: f64,
    pub high: f64,
    pub basis: DefaultTiers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub windows: TierEstimates<WindowEstimate>,
    pub paint: TierEstimates<AreaEstimate>,
    pub flooring: TierEstimates<AreaEstimate>,
    pub total: AggregateEstimate,
}

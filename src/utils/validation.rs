use crate::utils::error::{EstimateError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks one required measurement of an entry. Missing, non-positive and
/// non-finite values are rejected here so they never reach the arithmetic.
pub fn validate_measurement(field_name: &str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or_else(|| EstimateError::InvalidEntry {
        field: field_name.to_string(),
        value: String::new(),
        reason: "Value is missing".to_string(),
    })?;

    if !value.is_finite() {
        return Err(EstimateError::NonFiniteInput {
            field: field_name.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(EstimateError::InvalidEntry {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }

    Ok(value)
}

/// Counts (window quantity, wall count) default to 1 and never drop below it.
pub fn normalize_count(value: Option<i64>) -> u32 {
    let count = value.unwrap_or(1).max(1);
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn validate_positive_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(EstimateError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Tier id is defined more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

use crate::domain::entries::ProjectEntries;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

/// Min/max bounds the entry form enforces. The estimators never use these;
/// the CLI reports values outside them as warnings (or errors with `--strict`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub window_dimension_in: (f64, f64),
    pub window_quantity: (i64, i64),
    pub wall_length_ft: (f64, f64),
    pub wall_height_ft: (f64, f64),
    pub wall_count: (i64, i64),
    pub floor_dimension_ft: (f64, f64),
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            window_dimension_in: (1.0, 192.0),
            window_quantity: (1, 99),
            wall_length_ft: (1.0, 100.0),
            wall_height_ft: (1.0, 20.0),
            wall_count: (1, 20),
            floor_dimension_ft: (1.0, 100.0),
        }
    }
}

fn check<T>(problems: &mut Vec<EstimateError>, field: String, value: Option<T>, bounds: (T, T))
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if let Some(value) = value {
        if let Err(e) = validate_range(&field, value, bounds.0, bounds.1) {
            problems.push(e);
        }
    }
}

impl FormLimits {
    /// Every present value that falls outside the form bounds.
    /// Missing values are left to the estimators.
    pub fn violations(&self, entries: &ProjectEntries) -> Vec<EstimateError> {
        let mut problems = Vec::new();

        for (id, entry) in entries.windows.iter() {
            check(&mut problems, format!("windows{}.width", id), entry.width, self.window_dimension_in);
            check(&mut problems, format!("windows{}.height", id), entry.height, self.window_dimension_in);
            check(&mut problems, format!("windows{}.quantity", id), entry.quantity, self.window_quantity);
        }

        for (id, entry) in entries.paint.iter() {
            check(&mut problems, format!("paint{}.length", id), entry.length, self.wall_length_ft);
            check(&mut problems, format!("paint{}.height", id), entry.height, self.wall_height_ft);
            check(&mut problems, format!("paint{}.wall_count", id), entry.wall_count, self.wall_count);
        }

        for (id, entry) in entries.flooring.iter() {
            check(&mut problems, format!("flooring{}.length", id), entry.length, self.floor_dimension_ft);
            check(&mut problems, format!("flooring{}.width", id), entry.width, self.floor_dimension_ft);
        }

        problems
    }

    pub fn enforce(&self, entries: &ProjectEntries) -> Result<()> {
        match self.violations(entries).into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entries::EntryList;
    use crate::domain::model::{FlooringEntry, PaintEntry, WindowEntry};

    #[test]
    fn test_reference_entries_are_within_limits() {
        let entries = ProjectEntries {
            windows: EntryList::from_iter([WindowEntry::new("Living Room", 36.0, 48.0, 2)]),
            paint: EntryList::from_iter([PaintEntry::new("Kitchen", 10.0, 8.0, 4)]),
            flooring: EntryList::from_iter([FlooringEntry::new("Den", 20.0, 15.0)]),
        };
        let limits = FormLimits::default();
        assert!(limits.violations(&entries).is_empty());
        assert!(limits.enforce(&entries).is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_reported() {
        let entries = ProjectEntries {
            windows: EntryList::from_iter([WindowEntry::new("Atrium", 240.0, 48.0, 120)]),
            paint: EntryList::from_iter([PaintEntry::new("Stairwell", 10.0, 30.0, 2)]),
            ..ProjectEntries::default()
        };
        let problems = FormLimits::default().violations(&entries);
        assert_eq!(problems.len(), 3);
        assert!(problems[0].to_string().contains("windows#1.width"));
        assert!(FormLimits::default().enforce(&entries).is_err());
    }

    #[test]
    fn test_missing_values_are_not_limit_violations() {
        let entries = ProjectEntries {
            flooring: EntryList::from_iter([FlooringEntry {
                room_name: None,
                length: None,
                width: Some(12.0),
            }]),
            ..ProjectEntries::default()
        };
        assert!(FormLimits::default().violations(&entries).is_empty());
    }
}

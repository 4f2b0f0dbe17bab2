use crate::domain::model::{AreaEstimate, ProjectEstimate, TierEstimates};
use crate::utils::error::{EstimateError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EstimateRow<'a> {
    category: &'a str,
    tier_id: &'a str,
    tier_name: &'a str,
    low: f64,
    high: f64,
    total_area: Option<f64>,
}

fn area_rows<'a>(
    category: &'a str,
    estimates: &'a TierEstimates<AreaEstimate>,
) -> impl Iterator<Item = EstimateRow<'a>> {
    estimates.iter().map(move |tier| EstimateRow {
        category,
        tier_id: &tier.tier_id,
        tier_name: &tier.tier_name,
        low: tier.estimate.cost,
        high: tier.estimate.cost,
        total_area: Some(tier.estimate.total_area),
    })
}

/// One row per category tier plus a closing `project` row.
pub fn render(estimate: &ProjectEstimate) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for tier in estimate.windows.iter() {
        writer.serialize(EstimateRow {
            category: "windows",
            tier_id: &tier.tier_id,
            tier_name: &tier.tier_name,
            low: tier.estimate.low,
            high: tier.estimate.high,
            total_area: None,
        })?;
    }
    for row in area_rows("paint", &estimate.paint).chain(area_rows("flooring", &estimate.flooring)) {
        writer.serialize(row)?;
    }

    let basis = &estimate.total.basis;
    let basis_ids = format!("{}+{}+{}", basis.window, basis.paint, basis.flooring);
    writer.serialize(EstimateRow {
        category: "project",
        tier_id: &basis_ids,
        tier_name: "Complete Project Estimate",
        low: estimate.total.low,
        high: estimate.total.high,
        total_area: None,
    })?;

    let bytes = writer
        .into_inner()
        .map_err(|e| EstimateError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        EstimateError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::EstimationEngine;
    use crate::domain::entries::{EntryList, ProjectEntries};
    use crate::domain::model::{FlooringEntry, WindowEntry};

    #[test]
    fn test_csv_rows() {
        let entries = ProjectEntries {
            windows: EntryList::from_iter([WindowEntry::new("Living Room", 36.0, 48.0, 2)]),
            flooring: EntryList::from_iter([FlooringEntry::new("Den", 20.0, 15.0)]),
            ..ProjectEntries::default()
        };
        let estimate = EstimationEngine::default().run(&entries).unwrap();
        let csv_output = render(&estimate).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();

        assert_eq!(lines[0], "category,tier_id,tier_name,low,high,total_area");
        assert_eq!(lines[1], "windows,faux_cordless,Faux Cordless Blinds,4050.0,4950.0,");
        assert!(lines.contains(&"flooring,laminate,Laminate,1350.0,1350.0,300.0"));
        // 2 window + 2 paint + 3 flooring tiers, header, project row
        assert_eq!(lines.len(), 9);
        assert_eq!(
            lines[8],
            "project,faux_cordless+standard+laminate,Complete Project Estimate,5400.0,6300.0,"
        );
    }
}

//! Presentation of a finished `ProjectEstimate`. Nothing here prices anything.

pub mod format;
pub mod partners;
pub mod tabular;
pub mod text;

use crate::domain::catalog::PriceCatalog;
use crate::domain::entries::ProjectEntries;
use crate::domain::model::ProjectEstimate;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Everything a renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub project_name: &'a str,
    pub generated_at: DateTime<Utc>,
    pub catalog: &'a PriceCatalog,
    pub entries: &'a ProjectEntries,
    pub estimate: &'a ProjectEstimate,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    project: &'a str,
    generated_at: DateTime<Utc>,
    estimate: &'a ProjectEstimate,
}

pub fn render(format: ReportFormat, context: &ReportContext<'_>) -> Result<String> {
    match format {
        ReportFormat::Text => text::render(context),
        ReportFormat::Json => {
            let report = JsonReport {
                project: context.project_name,
                generated_at: context.generated_at,
                estimate: context.estimate,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        ReportFormat::Csv => tabular::render(context.estimate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::EstimationEngine;
    use crate::domain::entries::EntryList;
    use crate::domain::model::PaintEntry;

    #[test]
    fn test_json_report_contains_estimate() {
        let catalog = PriceCatalog::default();
        let entries = ProjectEntries {
            paint: EntryList::from_iter([PaintEntry::new("Kitchen", 10.0, 8.0, 4)]),
            ..ProjectEntries::default()
        };
        let estimate = EstimationEngine::default().run(&entries).unwrap();
        let context = ReportContext {
            project_name: "Kitchen refresh",
            generated_at: Utc::now(),
            catalog: &catalog,
            entries: &entries,
            estimate: &estimate,
        };

        let json = render(ReportFormat::Json, &context).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["project"], "Kitchen refresh");
        assert_eq!(value["estimate"]["total"]["low"], 800.0);
        assert_eq!(value["estimate"]["paint"]["tiers"][0]["tier_id"], "standard");
        assert_eq!(
            value["estimate"]["paint"]["tiers"][0]["estimate"]["rooms"][0]["wall_count"],
            4
        );
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}

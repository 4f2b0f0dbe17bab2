pub mod cli;
pub mod limits;
pub mod project_config;

#[cfg(feature = "cli")]
pub use self::cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::domain::model::DefaultTiers;
    use crate::report::ReportFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "reno-estimate")]
    #[command(about = "Estimate window treatment, painting and flooring costs for a project")]
    pub struct CliConfig {
        /// Path to the project TOML file
        #[arg(short, long)]
        pub config: String,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        pub format: ReportFormat,

        /// Directory to write the report into (stdout when omitted)
        #[arg(short, long)]
        pub output: Option<String>,

        /// Override the window tier used for the project total
        #[arg(long)]
        pub window_tier: Option<String>,

        /// Override the paint tier used for the project total
        #[arg(long)]
        pub paint_tier: Option<String>,

        /// Override the flooring tier used for the project total
        #[arg(long)]
        pub flooring_tier: Option<String>,

        /// Reject entries outside the form limits instead of warning
        #[arg(long)]
        pub strict: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn apply_tier_overrides(&self, defaults: &mut DefaultTiers) {
            if let Some(tier) = &self.window_tier {
                defaults.window = tier.clone();
            }
            if let Some(tier) = &self.paint_tier {
                defaults.paint = tier.clone();
            }
            if let Some(tier) = &self.flooring_tier {
                defaults.flooring = tier.clone();
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("config", &self.config)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            for (field, tier) in [
                ("window_tier", &self.window_tier),
                ("paint_tier", &self.paint_tier),
                ("flooring_tier", &self.flooring_tier),
            ] {
                if let Some(tier) = tier {
                    validate_non_empty_string(field, tier)?;
                }
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_defaults() {
            let config = CliConfig::parse_from(["reno-estimate", "--config", "project.toml"]);
            assert_eq!(config.config, "project.toml");
            assert_eq!(config.format, ReportFormat::Text);
            assert!(config.output.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_config_path_is_required() {
            assert!(CliConfig::try_parse_from(["reno-estimate"]).is_err());
            assert!(CliConfig::try_parse_from(["reno-estimate", "-c", "demo.toml"]).is_ok());
        }

        #[test]
        fn test_tier_overrides() {
            let config = CliConfig::parse_from([
                "reno-estimate",
                "-c",
                "project.toml",
                "--format",
                "csv",
                "--paint-tier",
                "premium",
            ]);
            assert_eq!(config.format, ReportFormat::Csv);

            let mut defaults = DefaultTiers::default();
            config.apply_tier_overrides(&mut defaults);
            assert_eq!(defaults.paint, "premium");
            assert_eq!(defaults.window, "faux_cordless");
        }

        #[test]
        fn test_blank_tier_override_is_invalid() {
            let config = CliConfig::parse_from(["reno-estimate", "-c", "p.toml", "--window-tier", " "]);
            assert!(config.validate().is_err());
        }
    }
}

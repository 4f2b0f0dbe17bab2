use anyhow::Context;
use clap::Parser;
use reno_estimate::report::{self, ReportContext};
use reno_estimate::utils::error::EstimateError;
use reno_estimate::utils::{logger, validation::Validate};
use reno_estimate::{CliConfig, EstimationEngine, LocalStorage, ProjectConfig, Storage};

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    // 載入專案檔
    tracing::info!("📁 Loading project from: {}", cli.config);
    let mut project = ProjectConfig::from_file(&cli.config)?;

    // 套用命令列覆蓋設定
    cli.apply_tier_overrides(&mut project.defaults);
    project.validate()?;

    let entries = project.entries();
    if entries.is_empty() {
        tracing::warn!("Project '{}' has no entries; every estimate will be zero", project.name());
    }

    // 表單範圍檢查：預設只警告
    for violation in project.limits.violations(&entries) {
        tracing::warn!("⚠️ Outside form limits: {}", violation);
    }
    if cli.strict {
        project.limits.enforce(&entries)?;
    }

    let engine = EstimationEngine::from_provider(&project);
    let estimate = engine.run(&entries)?;

    let context = ReportContext {
        project_name: project.name(),
        generated_at: chrono::Utc::now(),
        catalog: engine.catalog(),
        entries: &entries,
        estimate: &estimate,
    };
    let rendered = report::render(cli.format, &context)?;

    match &cli.output {
        Some(output_dir) => {
            let storage = LocalStorage::new(output_dir.clone());
            let file_name = format!("estimate.{}", cli.format.extension());
            let written = storage
                .write_file(&file_name, rendered.as_bytes())
                .with_context(|| format!("writing report into '{}'", output_dir))?;
            tracing::info!("✅ Estimate saved to: {}", written);
            println!("✅ Estimate saved to: {}", written);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting reno-estimate");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(err) = run(&cli) {
        let Some(e) = err.downcast_ref::<EstimateError>() else {
            return Err(err);
        };

        tracing::error!(
            "❌ Estimate failed: {:#} (Category: {:?}, Severity: {:?})",
            err,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let code = e.severity().exit_code();
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}

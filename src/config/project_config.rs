use crate::config::limits::FormLimits;
use crate::domain::catalog::PriceCatalog;
use crate::domain::entries::{EntryList, ProjectEntries};
use crate::domain::model::{DefaultTiers, FlooringEntry, PaintEntry, WindowEntry};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub defaults: DefaultTiers,
    #[serde(default)]
    pub catalog: PriceCatalog,
    #[serde(default)]
    pub limits: FormLimits,
    #[serde(default)]
    pub windows: Vec<WindowEntry>,
    #[serde(default)]
    pub paint: Vec<PaintEntry>,
    #[serde(default)]
    pub flooring: Vec<FlooringEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl ProjectConfig {
    /// 從 TOML 檔案載入專案
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析專案
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BLIND_BASE_PRICE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimateError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證專案設定
    pub fn validate_config(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            return Err(EstimateError::MissingConfigError {
                field: "project.name".to_string(),
            });
        }

        self.catalog.validate()?;

        // 預設方案必須存在於價目表
        self.catalog.window_tier(&self.defaults.window)?;
        self.catalog.paint_tier(&self.defaults.paint)?;
        self.catalog.flooring_tier(&self.defaults.flooring)?;

        Ok(())
    }

    /// 依輸入順序建立各類別的 entry 清單
    pub fn entries(&self) -> ProjectEntries {
        ProjectEntries {
            windows: self.windows.iter().cloned().collect::<EntryList<_>>(),
            paint: self.paint.iter().cloned().collect::<EntryList<_>>(),
            flooring: self.flooring.iter().cloned().collect::<EntryList<_>>(),
        }
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }
}

impl CatalogProvider for ProjectConfig {
    fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    fn default_tiers(&self) -> &DefaultTiers {
        &self.defaults
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

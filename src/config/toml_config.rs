use crate::core::catalog::MenuCatalog;
use crate::domain::model::{ItemId, MenuItem};
use crate::utils::error::{AppError, Result};
use crate::utils::format::DEFAULT_CURRENCY_SYMBOL;
use crate::utils::notify::DEFAULT_DISMISS_AFTER;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub display: Option<DisplayConfig>,
    pub menu: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub csrf_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub toast_dismiss_ms: Option<u64>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CSRF_TOKEN})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        if let Some(token) = &self.api.csrf_token {
            if ENV_VAR_RE.is_match(token) {
                return Err(AppError::InvalidConfigValueError {
                    field: "api.csrf_token".to_string(),
                    value: token.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
        }

        if let Some(menu) = &self.menu {
            let mut seen = HashSet::new();
            for item in menu {
                validation::validate_non_empty_string("menu.name", &item.name)?;
                validation::validate_non_negative_price("menu.price", item.price)?;
                if !seen.insert(item.id) {
                    return Err(AppError::InvalidConfigValueError {
                        field: "menu.id".to_string(),
                        value: item.id.to_string(),
                        reason: "Duplicate menu item id".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(30))
    }

    pub fn currency_symbol(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency_symbol.as_deref())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn toast_dismiss_after(&self) -> Duration {
        self.display
            .as_ref()
            .and_then(|d| d.toast_dismiss_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DISMISS_AFTER)
    }

    /// Configured menu, or the built-in illustrative one.
    pub fn catalog(&self) -> MenuCatalog {
        match &self.menu {
            Some(items) => MenuCatalog::new(items.iter().cloned()),
            None => MenuCatalog::default_menu(),
        }
    }

    pub fn menu_item(&self, item_id: ItemId) -> Option<MenuItem> {
        self.catalog().get(item_id).cloned()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                csrf_token: None,
                timeout_seconds: None,
            },
            display: None,
            menu: None,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

use crate::config::DEFAULT_CATALOG_PATH;
use crate::domain::ports::ShopProfile;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub shop: ShopSection,
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSection {
    pub name: String,
    pub tagline: String,
    pub currency_symbol: String,
    pub payment_instruction: String,
    pub sign_off: String,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: "Python Cookie Shop".to_string(),
            tagline: "We feed each according to their need.".to_string(),
            currency_symbol: "$".to_string(),
            payment_instruction: "Please pay with Bitcoin before picking-up.".to_string(),
            sign_off: "-The Python Cookie Shop Robot.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub path: Option<String>,
}

impl ShopConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ShopError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("config file '{}' does not exist", path.display()),
            },
            _ => ShopError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHOP_NAME})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    /// 命令列 > 設定檔 > 預設值
    pub fn catalog_path<'a>(&'a self, cli_override: Option<&'a str>) -> &'a str {
        cli_override
            .or(self.catalog.path.as_deref())
            .unwrap_or(DEFAULT_CATALOG_PATH)
    }
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("shop.name", &self.shop.name)?;
        validation::validate_non_empty_string("shop.sign_off", &self.shop.sign_off)?;

        if self.shop.currency_symbol.chars().any(|c| c.is_ascii_digit()) {
            return Err(ShopError::InvalidConfigValueError {
                field: "shop.currency_symbol".to_string(),
                value: self.shop.currency_symbol.clone(),
                reason: "Currency symbol cannot contain digits".to_string(),
            });
        }

        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }

        Ok(())
    }
}

impl ShopProfile for ShopConfig {
    fn shop_name(&self) -> &str {
        &self.shop.name
    }

    fn tagline(&self) -> &str {
        &self.shop.tagline
    }

    fn currency_symbol(&self) -> &str {
        &self.shop.currency_symbol
    }

    fn payment_instruction(&self) -> &str {
        &self.shop.payment_instruction
    }

    fn sign_off(&self) -> &str {
        &self.shop.sign_off
    }
}

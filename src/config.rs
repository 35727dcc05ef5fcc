use anyhow::Result;
use std::env;

use crate::models::Locale;
use crate::services::ReportSettings;
use crate::services::attendance::DEFAULT_ADVANCE_CUTOFF_DAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: String,
    pub locale: Locale,
    pub advance_cutoff_day: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let locale_tag = env::var("PAYROLL_LOCALE").unwrap_or_else(|_| "ru".to_string());
        let mut locale = Locale::from_tag(&locale_tag).unwrap_or_else(|| {
            log::warn!("Unknown PAYROLL_LOCALE {:?}, using ru", locale_tag);
            Locale::russian()
        });
        if let Ok(keyword) = env::var("PAYROLL_ADMIN_KEYWORD") {
            if !keyword.trim().is_empty() {
                locale = locale.with_administrator_keyword(keyword.trim());
            }
        }

        Ok(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            locale,
            advance_cutoff_day: env::var("PAYROLL_ADVANCE_CUTOFF_DAY")
                .ok()
                .and_then(|value| value.trim().parse::<u32>().ok())
                .unwrap_or(DEFAULT_ADVANCE_CUTOFF_DAY)
                .clamp(1, 31),
        })
    }

    pub fn test_config() -> Result<Self> {
        Ok(Config {
            environment: "test".to_string(),
            locale: Locale::russian(),
            advance_cutoff_day: DEFAULT_ADVANCE_CUTOFF_DAY,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            locale: self.locale.clone(),
            advance_cutoff_day: self.advance_cutoff_day,
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use crate::{AppError, Section};

/// Optional dashboard behaviours.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file keeps the stock behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show only the meetings dated on the selected calendar day.
    #[serde(default)]
    pub filter_meetings_by_date: bool,
}

/// Presentation settings for the dashboard shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    /// Section mounted on first render. Unknown ids fall back to the default.
    #[serde(default, deserialize_with = "lenient_section")]
    pub default_section: Section,
    /// Theme family key applied at startup.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Offset from UTC, in whole hours, used to decide which day is today.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i8,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_section: Section::default(),
            theme: default_theme(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

/// Moscow time.
pub const DEFAULT_UTC_OFFSET_HOURS: i8 = 3;

fn default_theme() -> String {
    "midnight".to_string()
}

fn default_utc_offset_hours() -> i8 {
    DEFAULT_UTC_OFFSET_HOURS
}

fn lenient_section<'de, D>(deserializer: D) -> Result<Section, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_default())
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}

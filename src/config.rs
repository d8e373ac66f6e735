//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml` from the content
//! root. Stock defaults describe the production site (matbud.net); a user
//! config file overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "https://matbud.net"   # Canonical origin, no trailing slash
//! og_image = "/logo_pelne_tlo_w_tarczy.svg"
//!
//! [company]
//! name = "Matbud Systemy Ppoż. Sp. z o.o."
//! short_name = "Matbud Systemy Ppoż."
//! street = "Słocin 36F"
//! city = "Grodzisk Wielkopolski"
//! postal_code = "62-065"
//! country = "PL"
//! phone = "+48-61-448-10-28"
//! email = "matbud@m-so.pl"
//! founding_year = "1993"
//! latitude = 52.2276
//! longitude = 16.3654
//! price_range = "$$"
//! opens = "08:00"
//! closes = "16:00"
//!
//! [map]
//! query = "Matbud Systemy Ppoż"    # Business name for the embed search
//! zoom = 15
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Staging deploy under a different origin
//! base_url = "https://staging.matbud.net"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have production defaults. User config files need only
/// specify the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical site origin, without a trailing slash.
    pub base_url: String,
    /// Default Open Graph image, as a path under `base_url` or a full URL.
    pub og_image: String,
    /// Company identity used in structured data and contact sections.
    pub company: CompanyConfig,
    /// Map embed settings.
    pub map: MapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://matbud.net".to_string(),
            og_image: "/logo_pelne_tlo_w_tarczy.svg".to_string(),
            company: CompanyConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values before a build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must not end with a trailing slash".into(),
            ));
        }
        if self.company.name.is_empty() {
            return Err(ConfigError::Validation(
                "company.name must not be empty".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.company.latitude)
            || !(-180.0..=180.0).contains(&self.company.longitude)
        {
            return Err(ConfigError::Validation(
                "company.latitude/longitude out of range".into(),
            ));
        }
        Ok(())
    }

    /// The default Open Graph image as an absolute URL.
    pub fn og_image_url(&self) -> String {
        if self.og_image.starts_with("http://") || self.og_image.starts_with("https://") {
            self.og_image.clone()
        } else {
            format!("{}/{}", self.base_url, self.og_image.trim_start_matches('/'))
        }
    }
}

/// Company identity: address, contact points, and business facts that
/// feed the organization and local-business structured data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompanyConfig {
    pub name: String,
    pub short_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub founding_year: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_range: String,
    /// Weekday opening time, `HH:MM`.
    pub opens: String,
    /// Weekday closing time, `HH:MM`.
    pub closes: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "Matbud Systemy Ppoż. Sp. z o.o.".to_string(),
            short_name: "Matbud Systemy Ppoż.".to_string(),
            street: "Słocin 36F".to_string(),
            city: "Grodzisk Wielkopolski".to_string(),
            postal_code: "62-065".to_string(),
            country: "PL".to_string(),
            phone: "+48-61-448-10-28".to_string(),
            email: "matbud@m-so.pl".to_string(),
            founding_year: "1993".to_string(),
            latitude: 52.2276,
            longitude: 16.3654,
            price_range: "$$".to_string(),
            opens: "08:00".to_string(),
            closes: "16:00".to_string(),
        }
    }
}

/// Map embed settings for the contact sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Business name the embed searches for.
    pub query: String,
    pub zoom: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            query: "Matbud Systemy Ppoż".to_string(),
            zoom: 15,
        }
    }
}

impl MapConfig {
    /// The embed iframe URL, query percent-encoded.
    pub fn embed_url(&self) -> String {
        let encoded: String = self
            .query
            .bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    (b as char).to_string()
                }
                b' ' => "+".to_string(),
                _ => format!("%{b:02X}"),
            })
            .collect();
        format!(
            "https://www.google.com/maps?q={}&output=embed&hl=pl&z={}",
            encoded, self.zoom
        )
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Matbud Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults (the production site).
#
# Place this file at content/config.toml. Each deploy only needs the keys
# it wants to override. Unknown keys will cause an error.

# Canonical site origin. No trailing slash.
base_url = "https://matbud.net"

# Default Open Graph image - a path under base_url or a full URL.
og_image = "/logo_pelne_tlo_w_tarczy.svg"

# ---------------------------------------------------------------------------
# Company identity - feeds contact sections and schema.org structured data
# ---------------------------------------------------------------------------
[company]
name = "Matbud Systemy Ppoż. Sp. z o.o."
short_name = "Matbud Systemy Ppoż."
street = "Słocin 36F"
city = "Grodzisk Wielkopolski"
postal_code = "62-065"
country = "PL"
phone = "+48-61-448-10-28"
email = "matbud@m-so.pl"
founding_year = "1993"
latitude = 52.2276
longitude = 16.3654
price_range = "$$"

# Weekday opening hours (Mon-Fri), HH:MM
opens = "08:00"
closes = "16:00"

# ---------------------------------------------------------------------------
# Map embed (contact sections)
# ---------------------------------------------------------------------------
[map]
# Business name the embed searches for.
query = "Matbud Systemy Ppoż"
zoom = 15
"##
}

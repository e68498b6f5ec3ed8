//! Configuration loading — inline JSON embedded in the host page.
//!
//! Looks for `<script type="application/json" id="sensorboard-config">` in the
//! document. Every field has a sensible default so the element is optional.

use serde::Deserialize;
use sensorboard_domain::layout::DEFAULT_BRAND_LABEL;

/// Id of the `<script>` element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "sensorboard-config";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the view mount attaches.
    pub mount: MountConfig,
    /// Navbar branding.
    pub brand: BrandConfig,
    /// Browser console logging.
    pub logging: LoggingConfig,
}

/// Attachment point configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    /// Id of the DOM element the views render into.
    pub container_id: String,
}

/// Navbar brand link configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Text of the brand link pointing back to `/`.
    pub label: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the inline config element of `document` (if
    /// present) and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but holds malformed JSON, or if
    /// the resulting configuration is invalid.
    pub fn load(document: &web_sys::Document) -> Result<Self, ConfigError> {
        let source = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        Self::from_source(source.as_deref())
    }

    fn from_source(source: Option<&str>) -> Result<Self, ConfigError> {
        let config = match source.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str(text)?,
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mount.container_id.is_empty() {
            return Err(ConfigError::Validation(
                "mount.container_id must not be empty".to_string(),
            ));
        }
        if self.brand.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand.label must not be empty".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            container_id: "root".to_string(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_BRAND_LABEL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensorboard_app=info,sensorboard_dashboard=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse inline config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

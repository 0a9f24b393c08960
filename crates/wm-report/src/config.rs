//! Report configuration types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the charting runtime package on the CDN.
pub const PLOTLY_PACKAGE: &str = "plotly.js-dist-min";

/// Bundle file inside the package when a library entry names no path.
pub const DEFAULT_BUNDLE_PATH: &str = "plotly.min.js";

/// Report color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTheme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Auto-detect from system preference.
    #[default]
    Auto,
}

impl ReportTheme {
    /// Get the CSS class for this theme.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReportTheme::Light => "light",
            ReportTheme::Dark => "dark",
            ReportTheme::Auto => "",
        }
    }
}

impl std::str::FromStr for ReportTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ReportTheme::Light),
            "dark" => Ok(ReportTheme::Dark),
            "auto" | "system" => Ok(ReportTheme::Auto),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}

/// CDN library configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnLibrary {
    /// Pinned version number.
    pub version: String,
    /// Subresource integrity hash (SHA-384), emitted when present.
    #[serde(default)]
    pub sri: Option<String>,
    /// Path within npm package.
    #[serde(default)]
    pub path: Option<String>,
}

impl CdnLibrary {
    /// Create a new CDN library configuration.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sri: None,
            path: None,
        }
    }

    /// Pin the subresource integrity hash.
    pub fn with_sri(mut self, sri: impl Into<String>) -> Self {
        self.sri = Some(sri.into());
        self
    }

    /// Set the path within the npm package.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Get the full CDN URL for this library.
    pub fn url(&self, base_url: &str, package_name: &str) -> String {
        let path = self.path.as_deref().unwrap_or(DEFAULT_BUNDLE_PATH);
        format!("{}/{}@{}/{}", base_url, package_name, self.version, path)
    }
}

/// CDN configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Base URL for CDN resources.
    #[serde(default = "default_cdn_base")]
    pub base_url: String,
    /// Library configurations.
    #[serde(default = "default_libraries")]
    pub libraries: HashMap<String, CdnLibrary>,
}

fn default_cdn_base() -> String {
    "https://cdn.jsdelivr.net/npm".to_string()
}

fn default_libraries() -> HashMap<String, CdnLibrary> {
    let mut libs = HashMap::new();

    // Plotly for every chart on the page
    libs.insert(
        PLOTLY_PACKAGE.to_string(),
        CdnLibrary::new("2.35.2").with_path(DEFAULT_BUNDLE_PATH),
    );

    libs
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            base_url: default_cdn_base(),
            libraries: default_libraries(),
        }
    }
}

impl CdnConfig {
    /// The charting runtime entry, if configured.
    pub fn plotly(&self) -> Option<&CdnLibrary> {
        self.libraries.get(PLOTLY_PACKAGE)
    }
}

/// Complete report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Custom report title.
    pub title: Option<String>,
    /// Custom subtitle under the title.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Color theme.
    #[serde(default)]
    pub theme: ReportTheme,
    /// CDN configuration.
    #[serde(default)]
    pub cdn_config: CdnConfig,
    /// Seed for flow-network node colors.
    #[serde(default = "default_color_seed")]
    pub color_seed: u64,
}

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

fn default_color_seed() -> u64 {
    42
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: None,
            subtitle: None,
            theme: ReportTheme::default(),
            cdn_config: CdnConfig::default(),
            color_seed: default_color_seed(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: ReportTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the node color seed.
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = seed;
        self
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub pages: PageSizes,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL such as `https://inventory.example.com`; empty means derive from the window
    #[serde(default)]
    pub base_url: String,
    /// Port used when the base URL is derived from the window location
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Rows per page for each list view
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageSizes {
    pub products_table: usize,
    pub products_grid: usize,
    pub orders: usize,
    pub suppliers_table: usize,
    pub suppliers_grid: usize,
    pub inventory_snapshot: usize,
    pub recent_activity: usize,
    /// Rows per report table
    #[serde(default = "default_report_page_size")]
    pub reports: usize,
    /// Rows per table on the supplier detail panel
    #[serde(default = "default_supplier_detail_page_size")]
    pub supplier_detail: usize,
}

fn default_port() -> u16 {
    5000
}

fn default_report_page_size() -> usize {
    10
}

fn default_supplier_detail_page_size() -> usize {
    5
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 5000

[pages]
products_table = 10
products_grid = 8
orders = 10
suppliers_table = 8
suppliers_grid = 6
inventory_snapshot = 10
recent_activity = 5
reports = 10
supplier_detail = 5
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            pages: PageSizes {
                products_table: 10,
                products_grid: 8,
                orders: 10,
                suppliers_table: 8,
                suppliers_grid: 6,
                inventory_snapshot: 10,
                recent_activity: 5,
                reports: default_report_page_size(),
                supplier_detail: default_supplier_detail_page_size(),
            },
        }
    }
}

/// Parse a configuration document, applying the build-time `INVENTORY_API_URL` override.
pub fn parse_config(source: &str, api_url_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(source)?;
    if let Some(url) = api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

/// Load the embedded configuration.
///
/// Falls back to `AppConfig::default()` if the embedded document fails to parse;
/// `test_default_config_loads` keeps the two in sync.
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG, option_env!("INVENTORY_API_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

pub fn page_sizes() -> &'static PageSizes {
    &CONFIG.pages
}

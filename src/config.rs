use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    pub cashfree: CashfreeConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Cashfree connection settings
///
/// Credentials are never read from the YAML file; `load` fills them from
/// `CASHFREE_APP_ID` / `CASHFREE_SECRET`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CashfreeConfig {
    pub base_url: String,
    pub api_version: String,
    /// Public domain used to build the checkout return URL
    pub return_domain: String,
    pub currency: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(skip, default)]
    pub app_id: String,
    #[serde(skip, default)]
    pub secret: String,
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load `config/{env}.yaml`, then overlay environment variables:
    /// `CASHFREE_APP_ID`, `CASHFREE_SECRET`, and `PORT`.
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        let mut config: AppConfig =
            serde_yaml::from_str(&content).expect("Failed to parse config yaml");

        if let Ok(app_id) = std::env::var("CASHFREE_APP_ID") {
            config.cashfree.app_id = app_id;
        }
        if let Ok(secret) = std::env::var("CASHFREE_SECRET") {
            config.cashfree.secret = secret;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.gateway.port = port
                .parse()
                .unwrap_or_else(|_| panic!("Invalid PORT value: {}", port));
        }

        config
    }
}

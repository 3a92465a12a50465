use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081 }
    }
}

/// Bind address for the storefront binary; kept separate from the item API
/// so both can run on one host with defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    pub host: String,
    pub port: u16,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

/// Where the storefront finds the item API, and how long it waits per call.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8081".into(), timeout_secs: default_timeout() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub admin_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { admin_token: "dev-admin-token".into() }
    }
}

fn default_timeout() -> u64 { 10 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `CONFIG_PATH` (or `config.toml`), fall back to defaults when
    /// the file is absent, then apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.storefront.normalize_from_env();
        self.upstream.normalize_from_env();
        self.auth.normalize_from_env();
        self.server.validate()?;
        self.storefront.validate()?;
        self.upstream.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl StorefrontConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("STOREFRONT_HOST") {
            self.host = host;
        }
        if let Some(port) =
            std::env::var("STOREFRONT_PORT").ok().and_then(|p| p.parse::<u16>().ok())
        {
            self.port = port;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("storefront.host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("storefront.port must be in 1..=65535"));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }
}

impl UpstreamConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("ITEM_API_URL") {
            self.base_url = url;
        }
    }

    fn validate(&self) -> Result<()> {
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("upstream.base_url must start with http:// or https://"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("upstream.timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(token) = std::env::var("ADMIN_TOKEN") {
            self.admin_token = token;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.admin_token.trim().is_empty() {
            return Err(anyhow!("auth.admin_token must not be empty"));
        }
        Ok(())
    }
}

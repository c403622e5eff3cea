use anyhow::Result;
use anyhow::anyhow;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: default_debounce_ms() }
    }
}

fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_debounce_ms() -> u64 { 400 }

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
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_from_env();
        self.api.validate()?;
        self.search.validate()?;
        Ok(())
    }
}

impl ApiConfig {
    /// If the TOML left the base URL blank, fall back to `API_BASE_URL`.
    pub fn normalize_from_env(&mut self) {
        if self.base_url.trim().is_empty() {
            if let Ok(url) = std::env::var("API_BASE_URL") {
                self.base_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("api.base_url is empty; provide it in config.toml or via API_BASE_URL"));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(anyhow!("api timeout settings must be positive integer seconds"));
        }
        Ok(())
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(anyhow!("search.debounce_ms must be >= 1"));
        }
        Ok(())
    }
}

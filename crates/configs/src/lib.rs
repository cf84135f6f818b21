use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub geo: GeoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the file medium keeps its JSON documents in.
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: "data".into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    #[serde(default = "default_osrm_url")]
    pub osrm_url: String,
    /// ISO 3166-1 alpha-2 filter passed to the geocoder (`countrycodes=`).
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            nominatim_url: default_nominatim_url(),
            osrm_url: default_osrm_url(),
            country_code: default_country_code(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_nominatim_url() -> String { "https://nominatim.openstreetmap.org".into() }
fn default_osrm_url() -> String { "https://router.project-osrm.org".into() }
fn default_country_code() -> String { "in".into() }
fn default_request_timeout() -> u64 { 8 }

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
        // 归一化 storage（支持从环境变量覆盖数据目录）
        self.storage.normalize_from_env();
        self.geo.normalize()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供 data_dir，则尝试从环境变量填充
        if self.data_dir.trim().is_empty() {
            self.data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        }
    }
}

impl GeoConfig {
    fn normalize(&mut self) -> Result<()> {
        for (field, url) in [("geo.nominatim_url", &mut self.nominatim_url), ("geo.osrm_url", &mut self.osrm_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("{field} 必须以 http:// 或 https:// 开头"));
            }
            // 末尾斜杠会在拼接路径时产生双斜杠
            while url.ends_with('/') {
                url.pop();
            }
        }
        self.country_code = self.country_code.trim().to_ascii_lowercase();
        if self.country_code.is_empty() {
            self.country_code = default_country_code();
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("geo.request_timeout_secs 必须为正整数秒"));
        }
        Ok(())
    }
}

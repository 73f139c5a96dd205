//! Configuration for playdash.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (PLAYDASH_STEAM_API_BASE, PLAYDASH_HLTB_BASE)
//! 2. Config file (.playdash/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .playdash/config.yaml
//!
//! The Steam Web API key is a secret and is never read from the config file;
//! it comes from `--api-key` or `STEAM_API_KEY`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::hltb::DEFAULT_BASE_URL as DEFAULT_HLTB_BASE;
use crate::adapters::steam::DEFAULT_API_BASE as DEFAULT_STEAM_API_BASE;
use crate::core::{PipelineOptions, RetryPolicy};
use crate::domain::DEFAULT_CHART_ROWS;
use crate::render::DEFAULT_EXPORT_FILE;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub steam: Option<SteamConfig>,
    #[serde(default)]
    pub hltb: Option<HltbConfig>,
    #[serde(default)]
    pub http: Option<HttpConfig>,
    #[serde(default)]
    pub cache: Option<CacheConfig>,
    #[serde(default)]
    pub retry: Option<RetryPolicy>,
    #[serde(default)]
    pub chart: Option<ChartConfig>,
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SteamConfig {
    pub api_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HltbConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub library_capacity: Option<usize>,
    pub title_capacity: Option<usize>,
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub top_n: Option<usize>,
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub file_name: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Steam Web API base URL
    pub steam_api_base: String,
    /// HowLongToBeat base URL
    pub hltb_base: String,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Cache bounds and retry policy
    pub cache: CacheSettings,
    pub retry: RetryPolicy,
    /// Chart view size and bar width
    pub chart: ChartSettings,
    /// Default export file name
    pub export_file: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub library_capacity: usize,
    pub title_capacity: usize,
    pub ttl_seconds: Option<u64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            library_capacity: 64,
            title_capacity: 4096,
            ttl_seconds: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub top_n: usize,
    pub width: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_CHART_ROWS,
            width: 40,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            steam_api_base: DEFAULT_STEAM_API_BASE.to_string(),
            hltb_base: DEFAULT_HLTB_BASE.to_string(),
            http_timeout: Duration::from_secs(30),
            cache: CacheSettings::default(),
            retry: RetryPolicy::default(),
            chart: ChartSettings::default(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Pipeline options derived from cache and retry settings
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            library_capacity: self.cache.library_capacity,
            title_capacity: self.cache.title_capacity,
            cache_ttl: self.cache.ttl_seconds.map(Duration::from_secs),
            retry: self.retry.clone(),
        }
    }

    /// Merge a parsed config file over the defaults
    fn apply_file(&mut self, config: ConfigFile) {
        if let Some(base) = config.steam.and_then(|s| s.api_base) {
            self.steam_api_base = base;
        }
        if let Some(base) = config.hltb.and_then(|h| h.base_url) {
            self.hltb_base = base;
        }
        if let Some(secs) = config.http.and_then(|h| h.timeout_seconds) {
            self.http_timeout = Duration::from_secs(secs);
        }
        if let Some(cache) = config.cache {
            self.cache = CacheSettings {
                library_capacity: cache.library_capacity.unwrap_or(self.cache.library_capacity),
                title_capacity: cache.title_capacity.unwrap_or(self.cache.title_capacity),
                ttl_seconds: cache.ttl_seconds,
            };
        }
        if let Some(retry) = config.retry {
            self.retry = retry;
        }
        if let Some(chart) = config.chart {
            self.chart = ChartSettings {
                top_n: chart.top_n.unwrap_or(self.chart.top_n),
                width: chart.width.unwrap_or(self.chart.width),
            };
        }
        if let Some(name) = config.export.and_then(|e| e.file_name) {
            self.export_file = name;
        }
    }

    /// Apply environment overrides
    fn apply_env(&mut self) {
        if let Ok(base) = std::env::var("PLAYDASH_STEAM_API_BASE") {
            self.steam_api_base = base;
        }
        if let Ok(base) = std::env::var("PLAYDASH_HLTB_BASE") {
            self.hltb_base = base;
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".playdash").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(config_path) = find_config_file() {
        let config = load_config_file(&config_path)?;
        resolved.apply_file(config);
        resolved.config_file = Some(config_path);
    }

    resolved.apply_env();
    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();
        assert_eq!(config.steam_api_base, "https://api.steampowered.com");
        assert_eq!(config.hltb_base, "https://howlongtobeat.com");
        assert_eq!(config.chart.top_n, 10);
        assert_eq!(config.export_file, "steam_hltb_dashboard.csv");
        assert!(config.cache.ttl_seconds.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".playdash");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
steam:
  api_base: http://localhost:8080
http:
  timeout_seconds: 5
cache:
  title_capacity: 10
  ttl_seconds: 3600
retry:
  max_attempts: 1
chart:
  top_n: 5
"#
        )
        .unwrap();

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version, "1.0");

        let mut config = ResolvedConfig::default();
        config.apply_file(parsed);

        assert_eq!(config.steam_api_base, "http://localhost:8080");
        assert_eq!(config.hltb_base, "https://howlongtobeat.com");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.cache.title_capacity, 10);
        assert_eq!(config.cache.library_capacity, 64);
        assert_eq!(config.retry.max_attempts, 1);
        assert_eq!(config.retry.initial_delay_ms, 1000);
        assert_eq!(config.chart.top_n, 5);
        assert_eq!(config.chart.width, 40);
    }

    #[test]
    fn test_pipeline_options() {
        let mut config = ResolvedConfig::default();
        config.cache.ttl_seconds = Some(60);

        let options = config.pipeline_options();
        assert_eq!(options.library_capacity, 64);
        assert_eq!(options.title_capacity, 4096);
        assert_eq!(options.cache_ttl, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "version: [unterminated").unwrap();

        assert!(load_config_file(&config_path).is_err());
    }
}

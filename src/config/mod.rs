use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    #[serde(default = "default_topics_per_page")]
    pub topics_per_page: usize,
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            topics_per_page: default_topics_per_page(),
            featured_limit: default_featured_limit(),
            related_limit: default_related_limit(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pool_size() -> u32 {
    10
}

fn default_topics_per_page() -> usize {
    20
}

fn default_featured_limit() -> usize {
    6
}

fn default_related_limit() -> usize {
    4
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a mathmerise site directory?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.topics_per_page == 0 {
            anyhow::bail!("content.topics_per_page must be greater than 0");
        }
        if self.content.topics_per_page > 100 {
            anyhow::bail!("content.topics_per_page must be 100 or less");
        }
        if self.content.featured_limit == 0 {
            anyhow::bail!("content.featured_limit must be greater than 0");
        }
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        Ok(())
    }
}

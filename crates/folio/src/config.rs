// File: src/config.rs
// Purpose: Configuration parsing from folio.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

/// Who the site belongs to and where its outbound links go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Recipient of the contact form
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_resume_url")]
    pub resume_url: String,

    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: String,
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Directory holding the wasm-bindgen output (served under `/pkg`)
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

/// Where page content comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// TOML content file; the built-in content is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

// Default values
fn default_name() -> String {
    "Dyuti Chakravarthy".to_string()
}

fn default_tagline() -> String {
    "Product Manager • EV & Energy Platforms".to_string()
}

fn default_email() -> String {
    "dyutichakravarthy@gmail.com".to_string()
}

fn default_resume_url() -> String {
    "https://your-resume-link.com".to_string()
}

fn default_linkedin_url() -> String {
    "https://www.linkedin.com/in/your-handle".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_pkg_dir() -> String {
    "crates/folio-wasm/pkg".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            email: default_email(),
            resume_url: default_resume_url(),
            linkedin_url: default_linkedin_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./folio.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("folio.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.site.email.contains('@'));
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn test_partial_site_section() {
        let toml = r#"
            [site]
            email = "hello@example.org"

            [content]
            path = "content.toml"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.email, "hello@example.org");
        assert_eq!(config.site.name, default_name());
        assert_eq!(config.content.path.as_deref(), Some("content.toml"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("no/such/folio.toml").unwrap();
        assert_eq!(config.server.pkg_dir, "crates/folio-wasm/pkg");
    }
}

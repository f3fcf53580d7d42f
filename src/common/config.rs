//! # Configuration
//!
//! Server configuration loaded once at startup from a TOML file.
//!
//! # Example TOML
//!
//! ```toml
//! [server]
//! address = "127.0.0.1:3000"
//!
//! [assets]
//! public_dir = "public"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: ServerInfo,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Bind address, e.g. "127.0.0.1:3000"
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Static-assets root; the image tree lives under `<public_dir>/images`
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

//! Application configuration loaded from environment variables.
//!
//! The Google client IDs are public identifiers; nothing sensitive lives
//! here. Values are read once at startup.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google OAuth web client ID (public)
    pub google_web_client_id: String,
    /// Google OAuth iOS client ID, when the host runs on iOS
    pub google_ios_client_id: Option<String>,
    /// Address of the web portal rendered in the embedded surface
    pub portal_url: String,
    /// Project ref of the portal's auth backend; names the session cookie
    /// as `sb-<project-ref>-auth-token`
    pub portal_project_ref: String,
    /// Directory holding the persisted session entry
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            google_web_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
            google_ios_client_id: None,
            portal_url: "https://portal.example.test/".to_string(),
            portal_project_ref: "testprojectref".to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            google_web_client_id: env::var("GOOGLE_WEB_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("GOOGLE_WEB_CLIENT_ID"))?,
            google_ios_client_id: env::var("GOOGLE_IOS_CLIENT_ID").ok(),
            portal_url: env::var("PORTAL_URL")
                .unwrap_or_else(|_| "https://haeya-sunit.vercel.app/".to_string()),
            portal_project_ref: env::var("PORTAL_PROJECT_REF")
                .map_err(|_| ConfigError::Missing("PORTAL_PROJECT_REF"))?,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

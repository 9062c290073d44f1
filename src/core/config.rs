//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin allowed to POST to the capture API from another host
    /// Example: https://landing.example.com
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            allowed_origin: std::env::var("ALLOWED_ORIGIN").ok(),
        }
    }

    /// Check if a cross-origin form host is configured
    pub fn has_allowed_origin(&self) -> bool {
        self.allowed_origin.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_origin: None,
        }
    }
}

//! Build-time configuration for the front-end.

use once_cell::sync::Lazy;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_PAGE_SIZE: usize = 12;
const DEFAULT_LATEST_COUNT: usize = 2;

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_build_env);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the episodes API, without a trailing slash.
    pub api_base_url: String,
    /// How many episodes the home page fetches.
    pub page_size: usize,
    /// How many of those are shown as "latest release" cards.
    pub latest_count: usize,
}

impl AppConfig {
    /// `PODCASTR_API_URL` is read at compile time so the wasm bundle can be
    /// pointed at a different API without runtime environment access.
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("PODCASTR_API_URL"))
    }

    pub fn with_api_url(url: Option<&str>) -> Self {
        let api_base_url = url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            page_size: DEFAULT_PAGE_SIZE,
            latest_count: DEFAULT_LATEST_COUNT,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.latest_count, 2);
    }

    #[test]
    fn trims_trailing_slashes() {
        let config = AppConfig::with_api_url(Some("https://api.example.com/v1//"));
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = AppConfig::with_api_url(Some("   "));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}

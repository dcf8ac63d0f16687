//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// tracing filter directive
    /// Example: info,copytrade_web=debug
    pub log_filter: String,

    /// Deployment environment (APP_ENV)
    pub app_env: AppEnv,
}

const DEFAULT_LOG_FILTER: &str = "info";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("RUST_LOG").ok(),
            std::env::var("APP_ENV").ok(),
        )
    }

    fn from_values(log_filter: Option<String>, app_env: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            app_env: app_env
                .as_deref()
                .map(AppEnv::from_str)
                .unwrap_or_default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No env var access here, tests stay thread safe

    #[test]
    fn test_config_defaults() {
        let config = Config::from_values(None, None);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(!config.is_production());
    }

    #[test]
    fn test_config_with_values() {
        let config = Config::from_values(
            Some("debug,copytrade_web=trace".to_string()),
            Some("production".to_string()),
        );
        assert_eq!(config.log_filter, "debug,copytrade_web=trace");
        assert!(config.is_production());
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config::from_values(Some("  ".to_string()), None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_app_env_parsing() {
        assert_eq!(AppEnv::from_str("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::from_str(" production "), AppEnv::Production);
        assert_eq!(AppEnv::from_str("staging"), AppEnv::Development);
        assert_eq!(AppEnv::Production.as_str(), "production");
    }
}

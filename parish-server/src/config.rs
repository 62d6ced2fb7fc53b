//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// JWT secret for dashboard authentication
    pub jwt_secret: String,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_secret_development_fallback() {
        let val = Config::require_secret("PARISH_TEST_UNSET_SECRET", "development").unwrap();
        assert!(val.contains("not-for-production"));
    }

    #[test]
    fn test_require_secret_production_missing() {
        let result = Config::require_secret("PARISH_TEST_UNSET_SECRET", "production");
        assert!(result.is_err());
    }
}

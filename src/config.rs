/// Base URL of the auth service used when `CHECKIN_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// localStorage key holding the session flag (`"true"` when logged in).
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// localStorage key holding the opaque auth token.
pub const TOKEN_KEY: &str = "token";

/// How long a check-in "submission" takes.
pub const SUBMIT_DELAY_MS: u32 = 1000;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;
pub const RATING_DEFAULT: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the config from compile-time environment.
    /// The API base can be overridden with `CHECKIN_API_URL=... trunk build`.
    pub fn from_env() -> Self {
        match option_env!("CHECKIN_API_URL") {
            Some(url) if !url.trim().is_empty() => Self {
                api_base_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn login_url(&self) -> String {
        self.endpoint("/auth/login")
    }

    pub fn signup_url(&self) -> String {
        self.endpoint("/auth/signup")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_auth_service() {
        let config = AppConfig::default();
        assert_eq!(config.login_url(), "http://localhost:3001/auth/login");
        assert_eq!(config.signup_url(), "http://localhost:3001/auth/signup");
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = AppConfig {
            api_base_url: "https://api.example.com/".to_string(),
        };
        assert_eq!(config.endpoint("/auth/login"), "https://api.example.com/auth/login");
        assert_eq!(config.endpoint("auth/login"), "https://api.example.com/auth/login");
    }
}

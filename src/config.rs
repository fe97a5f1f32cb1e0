//! Startup configuration, read once from the environment.

use crate::runtime::Runtime;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Account whose public repositories populate the project gallery.
pub const DEFAULT_ACCOUNT: &str = "octocat";

pub struct Config {
    /// GitHub account name shown in the gallery.
    pub account: String,
    /// Bearer token attached to every API request. Absence is a
    /// configuration error for the fetch cycle, not for the app.
    pub token: Option<String>,
    /// API base URL, overridable for tests and GitHub Enterprise.
    pub api_url: String,
}

impl Config {
    pub fn load(runtime: &impl Runtime) -> Self {
        let account = runtime
            .env_var("DEVFOLIO_ACCOUNT")
            .unwrap_or_else(|_| DEFAULT_ACCOUNT.to_string());

        let token = runtime.env_var("GITHUB_TOKEN").ok();

        let api_url = runtime
            .env_var("DEVFOLIO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            account,
            token,
            api_url,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn env_returning(key: &'static str, value: Option<&'static str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .returning(move |k| match value {
                Some(v) if k == key => Ok(v.to_string()),
                _ => Err(std::env::VarError::NotPresent),
            });
        runtime
    }

    #[test]
    fn test_load_defaults() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .returning(|_| Err(std::env::VarError::NotPresent));

        let config = Config::load(&runtime);

        assert_eq!(config.account, DEFAULT_ACCOUNT);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.token.is_none());
        assert!(!config.has_credential());
    }

    #[test]
    fn test_load_token() {
        let runtime = env_returning("GITHUB_TOKEN", Some("test_token"));

        let config = Config::load(&runtime);

        assert_eq!(config.token.as_deref(), Some("test_token"));
        assert!(config.has_credential());
    }

    #[test]
    fn test_load_account_override() {
        let runtime = env_returning("DEVFOLIO_ACCOUNT", Some("someone-else"));

        let config = Config::load(&runtime);

        assert_eq!(config.account, "someone-else");
    }

    #[test]
    fn test_load_api_url_override() {
        let runtime = env_returning("DEVFOLIO_API_URL", Some("http://127.0.0.1:9999"));

        let config = Config::load(&runtime);

        assert_eq!(config.api_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_env_var_lookup_keys() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq("DEVFOLIO_ACCOUNT"))
            .returning(|_| Err(std::env::VarError::NotPresent));
        runtime
            .expect_env_var()
            .with(eq("GITHUB_TOKEN"))
            .returning(|_| Err(std::env::VarError::NotPresent));
        runtime
            .expect_env_var()
            .with(eq("DEVFOLIO_API_URL"))
            .returning(|_| Err(std::env::VarError::NotPresent));

        let _ = Config::load(&runtime);
    }
}

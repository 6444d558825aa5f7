use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub feeds_path: PathBuf,
    pub ollama_host: String,
    pub model_name: String,
    pub generate_timeout_secs: u64,
    pub feed_timeout_secs: u64,
    /// Publishing target base URL; publishing is disabled when unset.
    pub cms_base_url: Option<String>,
    pub cms_auth_token: Option<String>,
    pub tick_cron: String,
    pub max_concurrent_campaigns: usize,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("feeds_path", &self.feeds_path)
            .field("database_url", &"[redacted]")
            .field("ollama_host", &self.ollama_host)
            .field("model_name", &self.model_name)
            .field("generate_timeout_secs", &self.generate_timeout_secs)
            .field("feed_timeout_secs", &self.feed_timeout_secs)
            .field("cms_base_url", &self.cms_base_url)
            .field(
                "cms_auth_token",
                &self.cms_auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field("tick_cron", &self.tick_cron)
            .field("max_concurrent_campaigns", &self.max_concurrent_campaigns)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}

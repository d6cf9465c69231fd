/// Store configuration (存储配置)
///
/// # Environment variables
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DINER_DB_PATH | diner.db | SQLite database file (`:memory:` for a throwaway store) |
/// | DINER_MAX_CONNECTIONS | 5 | Pool size |
/// | DINER_BUSY_TIMEOUT_MS | 5000 | SQLite busy timeout (毫秒) |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # Example
///
/// ```ignore
/// DINER_DB_PATH=/data/diner.db LOG_LEVEL=debug cargo run -- init
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database file path, or `:memory:`
    pub db_path: String,
    /// Maximum pooled connections (forced to 1 for in-memory stores)
    pub max_connections: u32,
    /// How long a statement waits on a locked database (毫秒)
    pub busy_timeout_ms: u64,
    /// tracing level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log directory for the rolling file appender
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// Unset or unparsable variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("DINER_DB_PATH").unwrap_or_else(|_| "diner.db".into()),
            max_connections: std::env::var("DINER_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            busy_timeout_ms: std::env::var("DINER_BUSY_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the database location, keeping everything else from the environment
    ///
    /// 常用于测试场景
    pub fn with_overrides(db_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.db_path = db_path.into();
        config
    }

    /// Throwaway in-memory store
    pub fn in_memory() -> Self {
        Self::with_overrides(":memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path == ":memory:" || self.db_path.starts_with("file::memory:")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

use std::str::FromStr;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（`.env` 文件同样生效）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | DATABASE_PATH | ./database.db | SQLite 数据库文件 (`:memory:` 可用) |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | SEED_DATA | true | 空库时写入示例数据 |
/// | STATIC_DIR | - | 静态文件目录 (未匹配路由时回退) |
/// | LOG_LEVEL | info | 日志级别 (`RUST_LOG` 优先) |
/// | LOG_JSON | production 时为 true | JSON 格式日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | LOG_RETENTION_DAYS | 14 | 日志保留天数 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// Values that fail to parse fall back to the default.
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 DATABASE_PATH=/tmp/training.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 监听地址
    pub http_host: String,
    /// SQLite 数据库路径
    pub database_path: String,
    /// 连接池最大连接数
    pub db_max_connections: u32,
    /// 空库时写入示例数据
    pub seed_data: bool,
    /// 静态文件目录
    pub static_dir: Option<String>,
    /// 日志级别
    pub log_level: String,
    /// JSON 格式日志
    pub log_json: bool,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 日志保留天数
    pub log_retention_days: i64,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    ///
    /// `LOG_JSON` defaults to on in production.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            http_port: parsed(lookup("HTTP_PORT")).unwrap_or(4000),
            http_host: non_empty(lookup("HTTP_HOST")).unwrap_or_else(|| "0.0.0.0".into()),
            database_path: non_empty(lookup("DATABASE_PATH"))
                .unwrap_or_else(|| "./database.db".into()),
            db_max_connections: parsed(lookup("DB_MAX_CONNECTIONS")).unwrap_or(5),
            seed_data: parsed(lookup("SEED_DATA")).unwrap_or(true),
            static_dir: non_empty(lookup("STATIC_DIR")),
            log_level: non_empty(lookup("LOG_LEVEL")).unwrap_or_else(|| "info".into()),
            log_json: false,
            log_dir: non_empty(lookup("LOG_DIR")),
            log_retention_days: parsed(lookup("LOG_RETENTION_DAYS")).unwrap_or(14),
            environment: non_empty(lookup("ENVIRONMENT"))
                .unwrap_or_else(|| "development".into()),
        };
        config.log_json = parsed(lookup("LOG_JSON")).unwrap_or(config.is_production());
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `host:port` the listener binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parsed<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.http_port, 4000);
        assert_eq!(config.database_path, "./database.db");
        assert_eq!(config.db_max_connections, 5);
        assert!(config.seed_data);
        assert!(config.static_dir.is_none());
        assert_eq!(config.log_retention_days, 14);
        assert!(!config.is_production());
        assert!(!config.log_json);
        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_values_override_defaults() {
        let config = config_from(&[
            ("HTTP_PORT", "8080"),
            ("HTTP_HOST", "127.0.0.1"),
            ("SEED_DATA", "false"),
            ("STATIC_DIR", "public"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(!config.seed_data);
        assert_eq!(config.static_dir.as_deref(), Some("public"));
        assert!(config.is_production());
        assert!(config.log_json);
    }

    #[test]
    fn test_explicit_log_format_wins_in_production() {
        let config = config_from(&[("ENVIRONMENT", "production"), ("LOG_JSON", "false")]);
        assert!(config.is_production());
        assert!(!config.log_json);

        let config = config_from(&[("ENVIRONMENT", "staging")]);
        assert!(!config.log_json);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = config_from(&[
            ("HTTP_PORT", "eighty"),
            ("DB_MAX_CONNECTIONS", "-3"),
            ("LOG_JSON", "yes"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.http_port, 4000);
        assert_eq!(config.db_max_connections, 5);
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
    }
}

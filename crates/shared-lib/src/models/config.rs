use color_eyre::eyre::eyre;
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::warn;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 使用内存存储而不是PostgreSQL时的 `DATABASE_URL`
///
/// 仅用于本地调试，进程退出后数据全部丢失
pub const MEMORY_DATABASE_URL: &str = "memory://";

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// postgresql数据库链接字符串
    ///
    /// 设置为 [`MEMORY_DATABASE_URL`] 时使用内存存储
    pub database_url: String,

    /// Web服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 来调整
    pub bind_addr: String,

    /// 连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 连接池启动预留的连接数
    ///
    /// 可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 通过 `lookup` 读取配置项
    ///
    /// 数值类配置解析失败时使用默认值，不会中断启动。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 读取数据库地址信息（仅支持postgresql）
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("Can not load DATABASE_URL in environment"))
            .suggestion(format!("设置 DATABASE_URL 环境变量，本地调试可使用 {MEMORY_DATABASE_URL}"))?;

        let min_connections = parse_or_default("DB_MIN_CONNECTIONS", lookup("DB_MIN_CONNECTIONS"), 1);
        let max_connections =
            parse_or_default("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10).max(min_connections);

        Ok(AppConfig {
            database_url,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            max_connections,
            min_connections,
        })
    }

    /// 是否使用内存存储
    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }
}

/// 解析数值配置，未设置或无法解析时返回默认值
fn parse_or_default(key: &str, raw: Option<String>, default: u32) -> u32 {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("⚠️ 环境变量 {}={} 无法解析，使用默认值 {}", key, raw, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_database_url() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/projects")])).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/projects");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", MEMORY_DATABASE_URL),
            ("DB_MAX_CONNECTIONS", "lots"),
            ("DB_MIN_CONNECTIONS", "-3"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert!(config.uses_memory_store());
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("DB_MAX_CONNECTIONS", None, 10), 10);
        assert_eq!(parse_or_default("DB_MAX_CONNECTIONS", Some(" 20 ".to_string()), 10), 20);
        assert_eq!(parse_or_default("DB_MIN_CONNECTIONS", Some("-3".to_string()), 1), 1);
    }

    #[test]
    fn test_max_connections_clamped_to_min() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/projects"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "5"),
            ("BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }
}

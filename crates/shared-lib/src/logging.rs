//! 日志初始化
//!
//! 默认使用 `info` 级别，可通过 `RUST_LOG` 环境变量调整，例如：
//!
//! ```text
//! RUST_LOG=database=debug,web_service=debug,tower_http=info
//! ```

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的日志过滤规则
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 初始化全局 tracing subscriber
///
/// 重复调用不会panic（测试中多个用例可能都会初始化日志）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}

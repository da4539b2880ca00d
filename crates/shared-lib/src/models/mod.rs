pub mod config;

// 重新导出具体的类型
pub use config::{AppConfig, DEFAULT_BIND_ADDR, MEMORY_DATABASE_URL};

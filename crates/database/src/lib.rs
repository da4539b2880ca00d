//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、关键词和项目的增删改查等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::keyword::{KeywordCreate, KeywordInfo, KeywordUpdate};
pub use models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
pub use repositories::{
    keyword::KeywordRepository,
    memory::MemoryRepository,
    project::ProjectRepository,
    traits::{KeywordRepositoryTrait, ProjectRepositoryTrait},
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;

//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod keyword;
pub mod memory;
pub mod project;
pub mod traits;

// 重新导出具体的类型
pub use keyword::KeywordRepository;
pub use memory::MemoryRepository;
pub use project::ProjectRepository;
pub use traits::{KeywordRepositoryTrait, ProjectRepositoryTrait};

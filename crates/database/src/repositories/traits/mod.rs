//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 约束 🎯
//!
//! 所有 Repository trait 都使用统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + Clone + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：GraphQL resolver 在 tokio 多线程运行时中并发执行，仓库实例会被多个请求共享
//! - `Clone`：服务层持有仓库的副本，PostgreSQL 仓库内部是连接池，内存仓库内部是 `Arc`，克隆都很廉价
//! - `'static`：仓库会被放进 schema 的共享数据中，在整个进程生命周期内存活
//!
//! 上层通过泛型而不是 trait object 使用仓库：
//!
//! ```rust,ignore
//! let keyword_service = KeywordService::new(KeywordRepository::new(pool.clone()));
//! let project_service = ProjectService::new(ProjectRepository::new(pool));
//! let schema = build_schema(keyword_service, project_service)?;
//! ```
//!
//! 测试时换成 [`MemoryRepository`](crate::MemoryRepository) 即可，无需修改上层代码。

pub mod keyword;
pub mod project;

// 重新导出
pub use keyword::KeywordRepositoryTrait;
pub use project::ProjectRepositoryTrait;

//! 服务层模块
//!
//! 包含业务逻辑的服务层实现：校验参数，然后调用仓库层

pub mod keyword;
pub mod project;
pub mod traits;

pub use keyword::KeywordService;
pub use project::ProjectService;
pub use traits::{KeywordServiceTrait, ProjectServiceTrait};

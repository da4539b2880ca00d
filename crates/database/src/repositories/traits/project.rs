//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::keyword::KeywordInfo;
use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目列表（按开始日期倒序）
/// - 项目创建
/// - 项目查询
/// - 项目更新
/// - 项目删除
/// - 项目与关键词的关联管理
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + Clone + 'static {
    /// 查询全部项目
    ///
    /// # 返回值
    /// 按照 `date` 倒序排列的项目列表，日期相同时按 `id` 升序
    async fn find_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回创建的项目信息，此时项目没有任何关联的关键词
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 返回项目信息
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的项目信息
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<ProjectInfo>;

    /// 删除项目
    ///
    /// 同时删除项目与关键词的关联记录，关键词本身不受影响
    ///
    /// # 返回值
    /// 返回被删除的项目信息
    async fn delete_project(&self, id: i32) -> DatabaseResult<ProjectInfo>;

    /// 查询项目关联的关键词，按关键词 `id` 排序
    async fn find_project_keywords(&self, project_id: i32) -> DatabaseResult<Vec<KeywordInfo>>;

    /// 为项目关联关键词
    ///
    /// 幂等操作，重复关联不会产生重复记录。项目或关键词不存在时返回
    /// [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)
    async fn add_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo>;

    /// 取消项目与关键词的关联
    ///
    /// 幂等操作，项目不存在时返回 [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)
    async fn remove_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo>;
}

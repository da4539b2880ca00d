//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，GraphQL resolver 只依赖这里的 trait

use crate::models::AppResult;
use database::{KeywordCreate, KeywordInfo, KeywordUpdate, ProjectCreate, ProjectInfo, ProjectUpdate};

/// 关键词服务 trait 定义
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`KeywordService`](crate::services::KeywordService) 提供
#[async_trait::async_trait]
pub trait KeywordServiceTrait: Send + Sync + Clone + 'static {
    /// 查询全部关键词（按创建顺序）
    async fn find_keywords(&self) -> AppResult<Vec<KeywordInfo>>;

    /// 根据 ID 获取关键词
    async fn get_keyword_by_id(&self, id: i32) -> AppResult<KeywordInfo>;

    /// 创建新关键词
    ///
    /// # 参数
    /// - `keyword`: 关键词创建信息，`word` 长度为 1~64 个字符
    async fn create_keyword(&self, keyword: KeywordCreate) -> AppResult<KeywordInfo>;

    /// 更新关键词的 `word`
    async fn update_keyword(&self, id: i32, update: KeywordUpdate) -> AppResult<KeywordInfo>;

    /// 删除关键词
    ///
    /// # 返回值
    /// 返回被删除的关键词信息
    async fn delete_keyword(&self, id: i32) -> AppResult<KeywordInfo>;
}

/// 项目服务 trait 定义
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`ProjectService`](crate::services::ProjectService) 提供
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + Clone + 'static {
    /// 查询全部项目（按开始日期倒序）
    async fn find_projects(&self) -> AppResult<Vec<ProjectInfo>>;

    /// 根据 ID 获取项目
    async fn get_project_by_id(&self, id: i32) -> AppResult<ProjectInfo>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息，`name` 长度为 1~200 个字符，`duration` 不能为负数
    async fn create_project(&self, project: ProjectCreate) -> AppResult<ProjectInfo>;

    /// 更新项目名称
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> AppResult<ProjectInfo>;

    /// 删除项目
    ///
    /// # 返回值
    /// 返回被删除的项目信息
    async fn delete_project(&self, id: i32) -> AppResult<ProjectInfo>;

    /// 查询项目关联的关键词
    async fn find_project_keywords(&self, project_id: i32) -> AppResult<Vec<KeywordInfo>>;

    /// 为项目关联关键词
    async fn add_project_keyword(&self, project_id: i32, keyword_id: i32) -> AppResult<ProjectInfo>;

    /// 取消项目与关键词的关联
    async fn remove_project_keyword(&self, project_id: i32, keyword_id: i32) -> AppResult<ProjectInfo>;
}

//! 关键词仓库 trait 定义
//!
//! 定义关键词数据库操作的抽象接口

use crate::models::keyword::{KeywordCreate, KeywordInfo, KeywordUpdate};
use crate::DatabaseResult;

/// 关键词仓库trait定义
///
/// 定义了关键词相关的数据库操作接口，支持：
/// - 关键词列表（按创建顺序）
/// - 关键词创建
/// - 关键词查询
/// - 关键词更新
/// - 关键词删除
#[async_trait::async_trait]
pub trait KeywordRepositoryTrait: Send + Sync + Clone + 'static {
    /// 查询全部关键词
    ///
    /// # 返回值
    /// 按照插入顺序（`id`）排列的关键词列表
    async fn find_keywords(&self) -> DatabaseResult<Vec<KeywordInfo>>;

    /// 根据 ID 获取关键词信息
    ///
    /// # 参数
    /// - `id`: 关键词 ID
    ///
    /// # 返回值
    /// 返回关键词信息，不存在时返回 [`DatabaseError::NotFound`](crate::DatabaseError::NotFound)
    async fn get_keyword_by_id(&self, id: i32) -> DatabaseResult<KeywordInfo>;

    /// 创建新关键词
    ///
    /// `date` 由系统设置为当天。`word` 已存在时返回
    /// [`DatabaseError::UniqueViolation`](crate::DatabaseError::UniqueViolation)
    async fn create_keyword(&self, keyword: KeywordCreate) -> DatabaseResult<KeywordInfo>;

    /// 更新关键词
    ///
    /// 只修改 `word`，更新为当前值不会触发唯一约束冲突
    async fn update_keyword(&self, id: i32, update: KeywordUpdate) -> DatabaseResult<KeywordInfo>;

    /// 删除关键词
    ///
    /// 同时删除该关键词与项目之间的关联记录，项目本身不受影响
    ///
    /// # 返回值
    /// 返回被删除的关键词信息
    async fn delete_keyword(&self, id: i32) -> DatabaseResult<KeywordInfo>;
}

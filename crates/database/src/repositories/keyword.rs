//! 关键词仓库
//!
//! 负责关键词相关的数据库操作

use crate::models::keyword::{KeywordCreate, KeywordInfo, KeywordUpdate};
use crate::repositories::traits::KeywordRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// `keywords` 表查询的列
const COLUMNS: &str = "id, word, date";

/// 关键词仓库结构体
#[derive(Debug, Clone)]
pub struct KeywordRepository {
    pool: PgPool,
}

impl KeywordRepository {
    /// 创建新的关键词仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl KeywordRepositoryTrait for KeywordRepository {
    async fn find_keywords(&self) -> DatabaseResult<Vec<KeywordInfo>> {
        debug!("🔍 查询全部关键词");

        let query = format!("SELECT {COLUMNS} FROM keywords ORDER BY id");
        let keywords = sqlx::query_as::<_, KeywordInfo>(&query).fetch_all(&self.pool).await?;

        debug!("✅ 查询完成 - 找到 {} 个关键词", keywords.len());
        Ok(keywords)
    }

    async fn get_keyword_by_id(&self, id: i32) -> DatabaseResult<KeywordInfo> {
        debug!("🔍 根据 ID 获取关键词: {}", id);

        let query = format!("SELECT {COLUMNS} FROM keywords WHERE id = $1");
        sqlx::query_as::<_, KeywordInfo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))
    }

    /// 创建新关键词
    ///
    /// `date` 使用数据库默认值 `CURRENT_DATE`
    async fn create_keyword(&self, keyword: KeywordCreate) -> DatabaseResult<KeywordInfo> {
        debug!("📝 创建关键词: {:#?}", keyword);

        let query = format!("INSERT INTO keywords (word) VALUES ($1) RETURNING {COLUMNS}");
        let keyword = sqlx::query_as::<_, KeywordInfo>(&query)
            .bind(&keyword.word)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 关键词创建成功: {:#?}", keyword);
        Ok(keyword)
    }

    async fn update_keyword(&self, id: i32, update: KeywordUpdate) -> DatabaseResult<KeywordInfo> {
        debug!("🔄 更新关键词 {} 信息: {:#?}", id, update);

        let query = format!("UPDATE keywords SET word = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let keyword = sqlx::query_as::<_, KeywordInfo>(&query)
            .bind(id)
            .bind(&update.word)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))?;

        debug!("✅ 关键词更新成功: {:#?}", keyword);
        Ok(keyword)
    }

    /// 删除关键词
    ///
    /// `project_keywords` 上的外键是 `ON DELETE CASCADE`，关联记录随之删除
    async fn delete_keyword(&self, id: i32) -> DatabaseResult<KeywordInfo> {
        debug!("🗑️ 删除关键词: {}", id);

        let query = format!("DELETE FROM keywords WHERE id = $1 RETURNING {COLUMNS}");
        let keyword = sqlx::query_as::<_, KeywordInfo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))?;

        debug!("✅ 关键词删除成功: {:#?}", keyword);
        Ok(keyword)
    }
}

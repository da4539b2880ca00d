//! 项目仓库
//!
//! 负责项目以及项目关键词关联的数据库操作

use crate::models::keyword::KeywordInfo;
use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// `projects` 表查询的列
const COLUMNS: &str = "id, name, date, duration, description";

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 查询全部项目
    ///
    /// 默认按照项目开始日期倒序，最新的项目排在最前面。
    /// 日期相同时按 `id` 升序，保证结果稳定。
    async fn find_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部项目");

        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY date DESC, id ASC");
        let projects = sqlx::query_as::<_, ProjectInfo>(&query).fetch_all(&self.pool).await?;

        debug!("✅ 查询完成 - 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let query = format!(
            "INSERT INTO projects (name, date, duration, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project_info = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(&project.name)
            .bind(project.date)
            .bind(project.duration)
            .bind(&project.description)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目创建成功: {:#?}", project_info);
        Ok(project_info)
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let query = format!("UPDATE projects SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let project = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .bind(&update.name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))?;

        debug!("✅ 项目更新成功: {:#?}", project);
        Ok(project)
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🗑️ 删除项目: {}", id);

        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        let project = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))?;

        debug!("✅ 项目删除成功: {:#?}", project);
        Ok(project)
    }

    async fn find_project_keywords(&self, project_id: i32) -> DatabaseResult<Vec<KeywordInfo>> {
        debug!("🔍 查询项目 {} 的关键词", project_id);

        let keywords = sqlx::query_as::<_, KeywordInfo>(
            "SELECT k.id, k.word, k.date
             FROM keywords k
             JOIN project_keywords pk ON pk.keyword_id = k.id
             WHERE pk.project_id = $1
             ORDER BY k.id",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(keywords)
    }

    /// 为项目关联关键词
    ///
    /// 主键冲突时什么都不做；项目或关键词不存在时外键约束失败，
    /// 会被转换为 [`DatabaseError::NotFound`]
    async fn add_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🔗 项目 {} 关联关键词 {}", project_id, keyword_id);

        sqlx::query(
            "INSERT INTO project_keywords (project_id, keyword_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, keyword_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(keyword_id)
        .execute(&self.pool)
        .await?;

        self.get_project_by_id(project_id).await
    }

    async fn remove_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("✂️ 项目 {} 取消关联关键词 {}", project_id, keyword_id);

        sqlx::query("DELETE FROM project_keywords WHERE project_id = $1 AND keyword_id = $2")
            .bind(project_id)
            .bind(keyword_id)
            .execute(&self.pool)
            .await?;

        self.get_project_by_id(project_id).await
    }
}

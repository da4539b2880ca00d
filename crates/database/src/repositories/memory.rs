//! 内存仓库
//!
//! 同时实现 [`KeywordRepositoryTrait`] 和 [`ProjectRepositoryTrait`]，两者共享同一份数据，
//! 行为与 PostgreSQL 仓库保持一致（唯一约束、级联删除关联记录、排序规则）。
//!
//! 用于测试以及 `DATABASE_URL=memory://` 的本地调试，进程退出后数据丢失。

use crate::models::keyword::{KeywordCreate, KeywordInfo, KeywordUpdate};
use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::repositories::traits::{KeywordRepositoryTrait, ProjectRepositoryTrait};
use crate::{DatabaseError, DatabaseResult};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 与 PostgreSQL 默认生成的约束名称保持一致
const KEYWORD_WORD_CONSTRAINT: &str = "keywords_word_key";
const PROJECT_NAME_CONSTRAINT: &str = "projects_name_key";

#[derive(Debug, Default)]
struct Tables {
    keyword_seq: i32,
    project_seq: i32,
    keywords: BTreeMap<i32, KeywordInfo>,
    projects: BTreeMap<i32, ProjectInfo>,
    /// (project_id, keyword_id)
    project_keywords: BTreeSet<(i32, i32)>,
}

impl Tables {
    fn word_taken(&self, word: &str, except_id: Option<i32>) -> bool {
        self.keywords.values().any(|k| k.word == word && Some(k.id) != except_id)
    }

    fn name_taken(&self, name: &str, except_id: Option<i32>) -> bool {
        self.projects.values().any(|p| p.name == name && Some(p.id) != except_id)
    }

    fn project(&self, id: i32) -> DatabaseResult<&ProjectInfo> {
        self.projects
            .get(&id)
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))
    }
}

/// 内存仓库结构体
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    /// 创建一个空的内存仓库
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeywordRepositoryTrait for MemoryRepository {
    async fn find_keywords(&self) -> DatabaseResult<Vec<KeywordInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.keywords.values().cloned().collect())
    }

    async fn get_keyword_by_id(&self, id: i32) -> DatabaseResult<KeywordInfo> {
        let tables = self.tables.read().await;
        tables
            .keywords
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))
    }

    async fn create_keyword(&self, keyword: KeywordCreate) -> DatabaseResult<KeywordInfo> {
        debug!("📝 [memory] 创建关键词: {:#?}", keyword);

        let mut tables = self.tables.write().await;
        if tables.word_taken(&keyword.word, None) {
            return Err(DatabaseError::unique_violation(KEYWORD_WORD_CONSTRAINT));
        }

        tables.keyword_seq += 1;
        let info = KeywordInfo {
            id: tables.keyword_seq,
            word: keyword.word,
            date: Utc::now().date_naive(),
        };
        tables.keywords.insert(info.id, info.clone());
        Ok(info)
    }

    async fn update_keyword(&self, id: i32, update: KeywordUpdate) -> DatabaseResult<KeywordInfo> {
        debug!("🔄 [memory] 更新关键词 {} 信息: {:#?}", id, update);

        let mut tables = self.tables.write().await;
        if !tables.keywords.contains_key(&id) {
            return Err(DatabaseError::not_found(format!("keyword {id}")));
        }
        if tables.word_taken(&update.word, Some(id)) {
            return Err(DatabaseError::unique_violation(KEYWORD_WORD_CONSTRAINT));
        }

        let keyword = tables
            .keywords
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))?;
        keyword.word = update.word;
        Ok(keyword.clone())
    }

    async fn delete_keyword(&self, id: i32) -> DatabaseResult<KeywordInfo> {
        debug!("🗑️ [memory] 删除关键词: {}", id);

        let mut tables = self.tables.write().await;
        let keyword = tables
            .keywords
            .remove(&id)
            .ok_or_else(|| DatabaseError::not_found(format!("keyword {id}")))?;
        tables.project_keywords.retain(|&(_, keyword_id)| keyword_id != id);
        Ok(keyword)
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryRepository {
    async fn find_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<ProjectInfo> = tables.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 [memory] 创建项目: {:#?}", project);

        let mut tables = self.tables.write().await;
        if tables.name_taken(&project.name, None) {
            return Err(DatabaseError::unique_violation(PROJECT_NAME_CONSTRAINT));
        }

        tables.project_seq += 1;
        let info = ProjectInfo {
            id: tables.project_seq,
            name: project.name,
            date: project.date,
            duration: project.duration,
            description: project.description,
        };
        tables.projects.insert(info.id, info.clone());
        Ok(info)
    }

    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        let tables = self.tables.read().await;
        tables.project(id).cloned()
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        debug!("🔄 [memory] 更新项目 {} 信息: {:#?}", id, update);

        let mut tables = self.tables.write().await;
        tables.project(id)?;
        if tables.name_taken(&update.name, Some(id)) {
            return Err(DatabaseError::unique_violation(PROJECT_NAME_CONSTRAINT));
        }

        let project = tables
            .projects
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))?;
        project.name = update.name;
        Ok(project.clone())
    }

    async fn delete_project(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🗑️ [memory] 删除项目: {}", id);

        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .remove(&id)
            .ok_or_else(|| DatabaseError::not_found(format!("project {id}")))?;
        tables.project_keywords.retain(|&(project_id, _)| project_id != id);
        Ok(project)
    }

    async fn find_project_keywords(&self, project_id: i32) -> DatabaseResult<Vec<KeywordInfo>> {
        let tables = self.tables.read().await;
        Ok(tables
            .project_keywords
            .range((project_id, i32::MIN)..=(project_id, i32::MAX))
            .filter_map(|(_, keyword_id)| tables.keywords.get(keyword_id).cloned())
            .collect())
    }

    async fn add_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🔗 [memory] 项目 {} 关联关键词 {}", project_id, keyword_id);

        let mut tables = self.tables.write().await;
        let project = tables.project(project_id)?.clone();
        if !tables.keywords.contains_key(&keyword_id) {
            return Err(DatabaseError::not_found(format!("keyword {keyword_id}")));
        }
        tables.project_keywords.insert((project_id, keyword_id));
        Ok(project)
    }

    async fn remove_project_keyword(&self, project_id: i32, keyword_id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("✂️ [memory] 项目 {} 取消关联关键词 {}", project_id, keyword_id);

        let mut tables = self.tables.write().await;
        let project = tables.project(project_id)?.clone();
        tables.project_keywords.remove(&(project_id, keyword_id));
        Ok(project)
    }
}

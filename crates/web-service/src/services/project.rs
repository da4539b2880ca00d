//! 项目服务
//!
//! 提供项目相关的业务逻辑操作

use crate::models::AppResult;
use crate::services::traits::ProjectServiceTrait;
use database::{KeywordInfo, ProjectCreate, ProjectInfo, ProjectRepositoryTrait, ProjectUpdate};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: PR,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: PR) -> Self {
        Self { project_repository }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    async fn find_projects(&self) -> AppResult<Vec<ProjectInfo>> {
        Ok(self.project_repository.find_projects().await?)
    }

    async fn get_project_by_id(&self, id: i32) -> AppResult<ProjectInfo> {
        Ok(self.project_repository.get_project_by_id(id).await?)
    }

    async fn create_project(&self, project: ProjectCreate) -> AppResult<ProjectInfo> {
        project.validate()?;
        Ok(self.project_repository.create_project(project).await?)
    }

    async fn update_project(&self, id: i32, update: ProjectUpdate) -> AppResult<ProjectInfo> {
        update.validate()?;
        Ok(self.project_repository.update_project(id, update).await?)
    }

    async fn delete_project(&self, id: i32) -> AppResult<ProjectInfo> {
        Ok(self.project_repository.delete_project(id).await?)
    }

    async fn find_project_keywords(&self, project_id: i32) -> AppResult<Vec<KeywordInfo>> {
        Ok(self.project_repository.find_project_keywords(project_id).await?)
    }

    async fn add_project_keyword(&self, project_id: i32, keyword_id: i32) -> AppResult<ProjectInfo> {
        Ok(self.project_repository.add_project_keyword(project_id, keyword_id).await?)
    }

    async fn remove_project_keyword(&self, project_id: i32, keyword_id: i32) -> AppResult<ProjectInfo> {
        Ok(self.project_repository.remove_project_keyword(project_id, keyword_id).await?)
    }
}

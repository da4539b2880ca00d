//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::NaiveDate;
use validator::Validate;

/// `projects.name` 的最大字符数
pub const PROJECT_NAME_MAX_LENGTH: usize = 200;

/// 项目信息结构体
///
/// 关联的关键词不在这里，需要单独通过
/// [`ProjectRepositoryTrait::find_project_keywords`](crate::ProjectRepositoryTrait::find_project_keywords) 查询
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i32,
    pub name: String,
    /// 项目开始日期，由调用方指定
    pub date: NaiveDate,
    /// 项目周期（月）
    pub duration: i32,
    pub description: String,
}

/// 项目创建参数
#[derive(Debug, Clone, Validate)]
pub struct ProjectCreate {
    #[validate(length(max = 200))]
    pub name: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub description: String,
}

/// 项目更新参数
///
/// 目前只支持修改项目名称
#[derive(Debug, Clone, Validate)]
pub struct ProjectUpdate {
    #[validate(length(max = 200))]
    pub name: String,
}

#![allow(dead_code)]

use async_graphql::dynamic::Schema;
use async_graphql::Request;
use axum::body::Body;
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use database::{KeywordCreate, MemoryRepository, ProjectCreate};
use http_body_util::BodyExt;
use serde_json::Value;
use web_service::services::{
    KeywordService, KeywordServiceTrait, ProjectService, ProjectServiceTrait,
};
use web_service::AppState;

pub type TestKeywordService = KeywordService<MemoryRepository>;
pub type TestProjectService = ProjectService<MemoryRepository>;

pub fn services() -> (TestKeywordService, TestProjectService) {
    let repository = MemoryRepository::new();
    (KeywordService::new(repository.clone()), ProjectService::new(repository))
}

pub fn build_schema(keywords: TestKeywordService, projects: TestProjectService) -> Schema {
    web_service::schema::build_schema(keywords, projects).expect("schema should build")
}

pub fn empty_schema() -> Schema {
    let (keywords, projects) = services();
    build_schema(keywords, projects)
}

pub fn build_router(keywords: TestKeywordService, projects: TestProjectService) -> Router {
    let state = AppState::new(keywords, projects).expect("state should build");
    web_service::routes::create_app_router(state)
}

/// 关键词 AI / Data Science / Web Dev，
/// 项目 1 (2021-06-11) 关联前两个关键词，项目 2 (2020-08-16) 关联后两个关键词
pub async fn seeded_schema() -> Schema {
    let (keywords, projects) = services();

    let mut keyword_ids = Vec::new();
    for word in ["AI", "Data Science", "Web Dev"] {
        let keyword = keywords
            .create_keyword(KeywordCreate { word: word.to_string() })
            .await
            .unwrap();
        keyword_ids.push(keyword.id);
    }

    let seeds = [
        ("Project 1", "2021-06-11", 12, "This is project 1...", [keyword_ids[0], keyword_ids[1]]),
        ("Project 2", "2020-08-16", 6, "This is project 2...", [keyword_ids[1], keyword_ids[2]]),
    ];
    for (name, date, duration, description, linked) in seeds {
        let project = projects
            .create_project(ProjectCreate {
                name: name.to_string(),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                duration,
                description: description.to_string(),
            })
            .await
            .unwrap();
        for keyword_id in linked {
            projects.add_project_keyword(project.id, keyword_id).await.unwrap();
        }
    }

    build_schema(keywords, projects)
}

/// 执行请求并序列化为 json，方便断言
pub async fn execute(schema: &Schema, query: &str) -> Value {
    let response = schema.execute(Request::new(query)).await;
    serde_json::to_value(&response).unwrap()
}

pub fn error_code(content: &Value) -> &str {
    content["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! GraphQL 接口
//!

use crate::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

/// GraphQL 请求入口
pub const GRAPHQL_PATH: &str = "/graphql";

/// 执行 GraphQL 请求
///
/// 同时处理 `GET`（查询参数）和 `POST`（json body）。
/// 缺少查询语句时仍返回 200，错误信息放在响应的 `errors` 中。
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL 调试页面
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

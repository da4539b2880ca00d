//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 共享数据 [`AppState`] 中只有构建好的 GraphQL schema，所有路由函数都可以访问。

use crate::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod graphql;
pub mod health;

/// 创建当前App的路由
///
/// - `/graphql`: GraphQL 查询与变更（GET / POST）
/// - `/graphiql`: GraphiQL 在线调试页面
/// - `/health`: 健康检查
pub fn create_app_router(shared_state: AppState) -> Router {
    Router::new()
        .route(
            graphql::GRAPHQL_PATH,
            get(graphql::graphql_handler).post(graphql::graphql_handler),
        )
        .route("/graphiql", get(graphql::graphiql))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

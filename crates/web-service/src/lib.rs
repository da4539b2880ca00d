//! Web服务模块
//!
//! 提供 GraphQL 接口：关键词和项目的查询与增删改

use async_graphql::dynamic::Schema;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod schema;
pub mod services;

use services::{KeywordServiceTrait, ProjectServiceTrait};

/// 应用共享状态
///
/// schema 内部是 `Arc`，克隆很廉价
#[derive(Clone)]
pub struct AppState {
    pub schema: Schema,
}

impl AppState {
    /// 构建 schema 并创建共享状态
    pub fn new<KS, PS>(keyword_service: KS, project_service: PS) -> Result<Self>
    where
        KS: KeywordServiceTrait,
        PS: ProjectServiceTrait,
    {
        let schema = schema::build_schema(keyword_service, project_service)
            .map_err(|e| eyre!("构建 GraphQL schema 失败: {e}"))?;
        Ok(Self { schema })
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的关闭信号（或发送端被丢弃）后优雅退出
pub async fn start_web_service<KS, PS>(
    config: &AppConfig,
    keyword_service: KS,
    project_service: PS,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()>
where
    KS: KeywordServiceTrait,
    PS: ProjectServiceTrait,
{
    let shared_state = AppState::new(keyword_service, project_service)?;
    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .wrap_err_with(|| format!("绑定地址 {} 失败", config.bind_addr))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

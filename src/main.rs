use color_eyre::Result;
use database::{initialize_database, KeywordRepository, MemoryRepository, ProjectRepository};
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{info, warn};
use web_service::services::{KeywordService, ProjectService};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    shared_lib::init_tracing();

    let config = AppConfig::load()?;

    // Ctrl+C 后通知 Web 服务优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("📴 收到 Ctrl+C 信号");
            let _ = shutdown_tx.send(true);
        }
    });

    if config.uses_memory_store() {
        warn!("⚠️ 使用内存存储，进程退出后数据将全部丢失");
        let repository = MemoryRepository::new();
        web_service::start_web_service(
            &config,
            KeywordService::new(repository.clone()),
            ProjectService::new(repository),
            shutdown_rx,
        )
        .await?;
    } else {
        let pool = initialize_database(&config).await?;
        web_service::start_web_service(
            &config,
            KeywordService::new(KeywordRepository::new(pool.clone())),
            ProjectService::new(ProjectRepository::new(pool)),
            shutdown_rx,
        )
        .await?;
    }

    info!("👋 服务已退出");
    Ok(())
}

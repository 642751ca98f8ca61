// ==========================================
// 护理排班可行性看板 - HTTP 服务主入口
// ==========================================
// 技术栈: axum + tokio
// 环境变量:
// - NURSE_SHIFT_CONFIG_PATH: 配置文件路径
// - HOST / PORT: 覆盖配置中的监听地址
// - RUST_LOG / NURSE_SHIFT_LOG_FORMAT: 日志级别与格式
// ==========================================

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use nurse_shift_feasibility::app::{create_router, get_default_config_path, AppState};
use nurse_shift_feasibility::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", nurse_shift_feasibility::APP_NAME);
    tracing::info!("系统版本: {}", nurse_shift_feasibility::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config_path = get_default_config_path();
    tracing::info!("使用配置文件: {}", config_path.display());
    let state = AppState::from_config_path(&config_path)
        .with_context(|| format!("无法加载配置: {}", config_path.display()))?;
    tracing::info!(snapshot = %state.config.snapshot()?, "生效配置");

    // 监听地址（HOST/PORT 优先）
    let host = env::var("HOST").unwrap_or_else(|_| state.config.server_host());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| state.config.server_port());
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("监听地址无效: {}:{}", host, port))?;

    let app = create_router(state);

    tracing::info!("服务监听: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

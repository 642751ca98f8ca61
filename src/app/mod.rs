// ==========================================
// 护理排班可行性看板 - 应用层
// ==========================================
// 职责: 共享状态装配 + HTTP 集成, 连接前端与后端
// ==========================================

pub mod http_routes;
pub mod state;

// 重导出
pub use state::{get_default_config_path, AppState};

#[cfg(feature = "http-server")]
pub use http_routes::create_router;

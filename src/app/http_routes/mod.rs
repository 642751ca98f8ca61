// ==========================================
// 护理排班可行性看板 - HTTP 路由（按域拆分）
// ==========================================
// 职责: axum 路由与处理函数, 连接前端与后端 API
// ==========================================

#![cfg(feature = "http-server")]

mod calculator;
mod common;
mod dashboard;
mod model;
mod router;
mod system;

pub use calculator::*;
pub use common::{ErrorResponse, HandlerResult};
pub use dashboard::*;
pub use model::*;
pub use router::create_router;
pub use system::*;

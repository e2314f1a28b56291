//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{Router, routing::post};

use crate::handlers;

/// 构建规则相关的路由
pub fn api_routes() -> Router {
    Router::new()
        .route("/rules", post(handlers::rule::create_rule))
        .route("/rules/combine", post(handlers::rule::combine_rules))
        .route("/rules/evaluate", post(handlers::rule::evaluate_rule))
}

//! 规则 API 服务
//!
//! 将条件规则引擎以 REST API 形式对外暴露。
//!
//! ## 核心功能
//!
//! - **创建规则**：编译规则文本，返回规则树的传输结构
//! - **合并规则**：编译多条规则并合并为一棵 AND 组合树
//! - **评估规则**：还原传输结构并对输入数据求值
//!
//! ## 模块结构
//!
//! - `config`: 配置加载
//! - `observability`: 日志初始化
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;

pub use config::AppConfig;
pub use dto::{
    ApiResponse, CombineRulesRequest, CombinedAstResponse, CreateRuleRequest, EvaluateRuleRequest,
    EvaluationResponse, RuleAstResponse,
};
pub use error::{ApiError, Result};

//! 规则 API 响应 DTO 定义

use rule_engine::WireNode;
use serde::Serialize;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

/// 创建规则响应：编译得到的规则树传输结构
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleAstResponse {
    pub ast: WireNode,
}

/// 合并规则响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAstResponse {
    pub combined_ast: WireNode,
}

/// 评估结果响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub result: bool,
}

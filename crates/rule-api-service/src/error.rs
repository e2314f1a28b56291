//! 规则 API 错误类型定义
//!
//! 将引擎错误与请求校验错误映射为统一的 JSON 错误响应。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rule_engine::RuleError;
use serde_json::json;

/// 规则 API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 请求校验错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 引擎错误：编译、求值、合并、传输结构
    #[error(transparent)]
    Rule(#[from] RuleError),

    // 系统错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 引擎的所有既定错误都源自调用方输入
            Self::Validation(_) | Self::Rule(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Rule(err) => match err {
                RuleError::EmptyInput => "EMPTY_INPUT",
                RuleError::NoTokens => "NO_TOKENS",
                RuleError::InvalidToken(_) => "INVALID_TOKEN",
                RuleError::UnmatchedParen => "UNMATCHED_PAREN",
                RuleError::InsufficientOperands => "INSUFFICIENT_OPERANDS",
                RuleError::EmptyResult => "EMPTY_RESULT",
                RuleError::MissingField(_) => "MISSING_FIELD",
                RuleError::EmptyTree => "EMPTY_TREE",
                RuleError::EmptyRecord => "EMPTY_RECORD",
                RuleError::NoRules => "NO_RULES",
                RuleError::NullRule => "NULL_RULE",
                RuleError::MalformedWire(_) => "MALFORMED_WIRE",
                RuleError::JsonError(_) => "JSON_ERROR",
            },
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;

//! 规则引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("规则文本不能为空")]
    EmptyInput,

    #[error("规则文本中没有有效 token")]
    NoTokens,

    #[error("无效的 token: {0}")]
    InvalidToken(String),

    #[error("括号不匹配")]
    UnmatchedParen,

    #[error("操作数不足，无法应用组合符")]
    InsufficientOperands,

    #[error("解析结果为空")]
    EmptyResult,

    #[error("字段不存在: {0}")]
    MissingField(String),

    #[error("规则树不能为空")]
    EmptyTree,

    #[error("评估数据不能为空")]
    EmptyRecord,

    #[error("没有可合并的规则")]
    NoRules,

    #[error("合并时遇到空规则")]
    NullRule,

    #[error("传输结构无效: {0}")]
    MalformedWire(String),

    #[error("JSON 序列化错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuleError>;

//! 规则 API 请求 DTO 定义

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// 创建规则请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    #[validate(length(min = 1, message = "规则文本不能为空"))]
    pub rule_string: String,
}

/// 合并规则请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CombineRulesRequest {
    #[validate(length(min = 1, message = "规则列表不能为空"))]
    pub rules: Vec<String>,
}

/// 评估规则请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRuleRequest {
    /// 规则树的传输结构；缺失或 null 视为未提供
    #[serde(default)]
    pub ast: Value,
    /// 字段到值的评估数据
    #[serde(default)]
    pub data: Map<String, Value>,
}

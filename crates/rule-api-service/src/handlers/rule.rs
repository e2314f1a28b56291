//! 规则 API 处理器
//!
//! 编译、合并、评估三个端点的薄封装：请求体进、核心调用、统一响应出。
//! 引擎本身无状态，处理器之间不共享任何数据。

use axum::Json;
use tracing::info;
use validator::Validate;

use rule_engine::{EvaluationContext, evaluate, wire};

use crate::dto::{
    ApiResponse, CombineRulesRequest, CombinedAstResponse, CreateRuleRequest, EvaluateRuleRequest,
    EvaluationResponse, RuleAstResponse,
};
use crate::error::Result;

/// 创建规则：编译规则文本并返回其传输结构
///
/// POST /api/rules
pub async fn create_rule(
    Json(req): Json<CreateRuleRequest>,
) -> Result<Json<ApiResponse<RuleAstResponse>>> {
    req.validate()?;

    let tree = rule_engine::compile(&req.rule_string)?;
    info!(rule = %req.rule_string, "Rule compiled");

    Ok(Json(ApiResponse::success(RuleAstResponse {
        ast: wire::to_wire(&tree),
    })))
}

/// 合并规则：编译多条规则文本并左折叠为一棵 AND 组合树
///
/// POST /api/rules/combine
pub async fn combine_rules(
    Json(req): Json<CombineRulesRequest>,
) -> Result<Json<ApiResponse<CombinedAstResponse>>> {
    req.validate()?;

    let combined = rule_engine::combine_all(&req.rules)?;
    info!(count = req.rules.len(), "Rules combined");

    Ok(Json(ApiResponse::success(CombinedAstResponse {
        combined_ast: wire::to_wire(&combined),
    })))
}

/// 评估规则：还原传输结构并对数据求值
///
/// POST /api/rules/evaluate
pub async fn evaluate_rule(
    Json(req): Json<EvaluateRuleRequest>,
) -> Result<Json<ApiResponse<EvaluationResponse>>> {
    let tree = wire::from_value(&req.ast)?;
    let context = EvaluationContext::new(req.data);

    let result = evaluate(&tree, &context)?;
    info!(result, "Rule evaluated");

    Ok(Json(ApiResponse::success(EvaluationResponse { result })))
}

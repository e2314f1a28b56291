//! 规则评估器
//!
//! 对规则树做递归求值：操作数节点按字段与字面量的类型比较，
//! 组合节点做短路布尔求值。

use crate::error::{Result, RuleError};
use crate::models::{Combinator, Condition, EvaluationContext, Literal, Node};
use serde_json::Value;

/// 对规则树求值
pub fn evaluate(tree: &Node, context: &EvaluationContext) -> Result<bool> {
    if context.is_empty() {
        return Err(RuleError::EmptyRecord);
    }

    evaluate_node(tree, context)
}

/// 递归评估节点
fn evaluate_node(node: &Node, context: &EvaluationContext) -> Result<bool> {
    match node {
        Node::Operand(cond) => evaluate_condition(cond, context),
        // 短路求值：左子树已定结果时不再评估右子树
        Node::Combinator { op, left, right } => match op {
            Combinator::And => {
                Ok(evaluate_node(left, context)? && evaluate_node(right, context)?)
            }
            Combinator::Or => Ok(evaluate_node(left, context)? || evaluate_node(right, context)?),
        },
    }
}

/// 评估单个条件
///
/// 字符串之间支持 `=` `!=`，整数之间支持 `>` `<` `=` `!=`；
/// 其余比较符与类型组合一律返回 false，不视为错误。
fn evaluate_condition(cond: &Condition, context: &EvaluationContext) -> Result<bool> {
    let field_value = match context.get_field(&cond.field) {
        None | Some(Value::Null) => return Err(RuleError::MissingField(cond.field.clone())),
        Some(value) => value,
    };

    let matched = match (field_value, &cond.literal) {
        (Value::String(actual), Literal::Str(expected)) => match cond.comparator.as_str() {
            "=" => actual == expected,
            "!=" => actual != expected,
            _ => false,
        },
        (Value::Number(actual), Literal::Int(expected)) => match actual.as_i64() {
            Some(actual) => match cond.comparator.as_str() {
                ">" => actual > *expected,
                "<" => actual < *expected,
                "=" => actual == *expected,
                "!=" => actual != *expected,
                _ => false,
            },
            None => false,
        },
        _ => false,
    };

    Ok(matched)
}

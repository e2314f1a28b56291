//! 规则树的传输结构
//!
//! 规则树本身不可直接跨进程传输，序列化为嵌套 map
//! （node_type / value / left / right），反序列化是其精确的结构逆变换。

use crate::error::{Result, RuleError};
use crate::models::{Combinator, Condition, Node};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// 操作数节点的 node_type 标记
const NODE_TYPE_OPERAND: &str = "operand";
/// 组合节点的 node_type 标记
const NODE_TYPE_OPERATOR: &str = "operator";

/// 节点的传输形式
///
/// 操作数节点的 value 是 `{field, operator, value}` 三元组，子树为 null；
/// 组合节点的 value 是组合符号（"AND"/"OR"），两棵子树必须在场。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireNode {
    pub node_type: String,
    pub value: Value,
    #[serde(default)]
    pub left: Option<Box<WireNode>>,
    #[serde(default)]
    pub right: Option<Box<WireNode>>,
}

/// 将规则树转换为传输结构
pub fn to_wire(node: &Node) -> WireNode {
    match node {
        Node::Operand(cond) => WireNode {
            node_type: NODE_TYPE_OPERAND.to_string(),
            value: json!({
                "field": cond.field,
                "operator": cond.comparator,
                "value": cond.literal,
            }),
            left: None,
            right: None,
        },
        Node::Combinator { op, left, right } => WireNode {
            node_type: NODE_TYPE_OPERATOR.to_string(),
            value: Value::String(op.to_string()),
            left: Some(Box::new(to_wire(left))),
            right: Some(Box::new(to_wire(right))),
        },
    }
}

/// 从传输结构还原规则树
pub fn from_wire(wire: &WireNode) -> Result<Node> {
    match wire.node_type.as_str() {
        NODE_TYPE_OPERAND => {
            let condition: Condition =
                serde_json::from_value(wire.value.clone()).map_err(|e| {
                    RuleError::MalformedWire(format!("操作数节点的 value 无效: {}", e))
                })?;
            Ok(Node::Operand(condition))
        }
        NODE_TYPE_OPERATOR => {
            let op: Combinator = serde_json::from_value(wire.value.clone())
                .map_err(|_| RuleError::MalformedWire(format!("未知的组合符: {}", wire.value)))?;

            let left = wire
                .left
                .as_deref()
                .ok_or_else(|| RuleError::MalformedWire("组合节点缺少 left 子树".to_string()))?;
            let right = wire
                .right
                .as_deref()
                .ok_or_else(|| RuleError::MalformedWire("组合节点缺少 right 子树".to_string()))?;

            Ok(Node::combinator(op, from_wire(left)?, from_wire(right)?))
        }
        other => Err(RuleError::MalformedWire(format!(
            "未知的 node_type: {}",
            other
        ))),
    }
}

/// 从 JSON 值还原规则树
///
/// 根节点为 null 视为空树。
pub fn from_value(value: &Value) -> Result<Node> {
    if value.is_null() {
        return Err(RuleError::EmptyTree);
    }

    let wire: WireNode = serde_json::from_value(value.clone())
        .map_err(|e| RuleError::MalformedWire(e.to_string()))?;
    from_wire(&wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Literal;

    fn sample_tree() -> Node {
        Node::combinator(
            Combinator::And,
            Node::operand(Condition::new("age", ">", 30)),
            Node::operand(Condition::new("department", "=", "Sales")),
        )
    }

    #[test]
    fn test_to_wire_operand_shape() {
        let wire = to_wire(&Node::operand(Condition::new("age", ">", 30)));

        assert_eq!(wire.node_type, "operand");
        assert_eq!(
            wire.value,
            json!({"field": "age", "operator": ">", "value": 30})
        );
        assert!(wire.left.is_none());
        assert!(wire.right.is_none());
    }

    #[test]
    fn test_to_wire_operator_shape() {
        let wire = to_wire(&sample_tree());

        assert_eq!(wire.node_type, "operator");
        assert_eq!(wire.value, json!("AND"));
        assert!(wire.left.is_some());
        assert!(wire.right.is_some());
    }

    #[test]
    fn test_wire_serializes_null_children() {
        let wire = to_wire(&Node::operand(Condition::new("age", ">", 30)));
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["left"], Value::Null);
        assert_eq!(value["right"], Value::Null);
    }

    #[test]
    fn test_round_trip_reproduces_tree() {
        let tree = sample_tree();
        let restored = from_wire(&to_wire(&tree)).unwrap();
        assert_eq!(restored, tree);
    }

    #[test]
    fn test_round_trip_string_literal() {
        let tree = Node::operand(Condition::new("name", "=", "John Doe"));
        let restored = from_wire(&to_wire(&tree)).unwrap();

        match restored {
            Node::Operand(cond) => {
                assert_eq!(cond.literal, Literal::Str("John Doe".to_string()))
            }
            Node::Combinator { .. } => panic!("expected operand"),
        }
    }

    #[test]
    fn test_from_value_null_is_empty_tree() {
        assert!(matches!(
            from_value(&Value::Null),
            Err(RuleError::EmptyTree)
        ));
    }

    #[test]
    fn test_from_wire_unknown_node_type() {
        let value = json!({"node_type": "weird", "value": "AND", "left": null, "right": null});
        assert!(matches!(
            from_value(&value),
            Err(RuleError::MalformedWire(_))
        ));
    }

    #[test]
    fn test_from_wire_unknown_combinator() {
        let value = json!({
            "node_type": "operator",
            "value": "XOR",
            "left": {"node_type": "operand", "value": {"field": "a", "operator": "=", "value": 1}, "left": null, "right": null},
            "right": {"node_type": "operand", "value": {"field": "b", "operator": "=", "value": 2}, "left": null, "right": null}
        });
        assert!(matches!(
            from_value(&value),
            Err(RuleError::MalformedWire(_))
        ));
    }

    #[test]
    fn test_from_wire_operator_missing_child() {
        let value = json!({
            "node_type": "operator",
            "value": "AND",
            "left": {"node_type": "operand", "value": {"field": "a", "operator": "=", "value": 1}, "left": null, "right": null},
            "right": null
        });
        assert!(matches!(
            from_value(&value),
            Err(RuleError::MalformedWire(_))
        ));
    }

    #[test]
    fn test_from_wire_rejects_non_scalar_literal() {
        let value = json!({
            "node_type": "operand",
            "value": {"field": "a", "operator": "=", "value": [1, 2]},
            "left": null,
            "right": null
        });
        assert!(matches!(
            from_value(&value),
            Err(RuleError::MalformedWire(_))
        ));
    }
}

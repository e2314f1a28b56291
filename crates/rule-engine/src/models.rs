//! 规则引擎领域模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 规则树节点
///
/// 严格二叉树：操作数节点没有子节点，组合节点恰好有两棵子树。
/// 树一经构建不再修改，合并只在既有子树之上搭建新的根。
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// 叶子节点：单个字段比较
    Operand(Condition),
    /// 内部节点：两棵子树的布尔组合
    Combinator {
        op: Combinator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn operand(condition: Condition) -> Self {
        Node::Operand(condition)
    }

    pub fn combinator(op: Combinator, left: Node, right: Node) -> Self {
        Node::Combinator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// 条件三元组：字段、比较符、字面量
///
/// 比较符保留源文本原样（一个或多个 `< > = !` 字符）。
/// 只有 `=` `!=` `<` `>` 有求值语义，其余符号在求值时返回 false。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    #[serde(rename = "operator")]
    pub comparator: String,
    #[serde(rename = "value")]
    pub literal: Literal,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        comparator: impl Into<String>,
        literal: impl Into<Literal>,
    ) -> Self {
        Self {
            field: field.into(),
            comparator: comparator.into(),
            literal: literal.into(),
        }
    }
}

/// 字面量：整数或字符串，不存在其他类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Str(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Str(s) => write!(f, "{}", s),
        }
    }
}

/// 逻辑组合符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    /// 运算优先级：AND 高于 OR
    pub fn precedence(self) -> u8 {
        match self {
            Self::And => 2,
            Self::Or => 1,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

/// 评估上下文 - 提供给规则引擎的数据
///
/// 字段到值的扁平映射，不支持嵌套路径。
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    data: Map<String, Value>,
}

impl EvaluationContext {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// 从 JSON 对象字符串创建
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { data })
    }

    /// 获取字段值
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 获取底层数据
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

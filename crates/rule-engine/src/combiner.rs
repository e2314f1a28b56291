//! 规则合并器
//!
//! 将多棵规则树折叠为一棵 AND 组合树。

use crate::error::{Result, RuleError};
use crate::models::{Combinator, Node};

/// 按输入顺序左折叠多棵规则树
///
/// 结果为左深树：`[r1, r2, r3]` 合并为 `(r1 AND r2) AND r3`。
/// 既有子树按值并入新树，不做任何改写。
pub fn combine(trees: Vec<Node>) -> Result<Node> {
    let mut iter = trees.into_iter();
    let first = iter.next().ok_or(RuleError::NoRules)?;

    Ok(iter.fold(first, |acc, tree| {
        Node::combinator(Combinator::And, acc, tree)
    }))
}

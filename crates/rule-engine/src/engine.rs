//! 引擎门面
//!
//! 将分词、解析与合并组装为对外的编译入口。

use crate::combiner;
use crate::error::{Result, RuleError};
use crate::models::Node;
use crate::parser;
use crate::token;

/// 将规则文本编译为规则树
pub fn compile(rule_text: &str) -> Result<Node> {
    let tokens = token::tokenize(rule_text)?;
    parser::parse(&tokens)
}

/// 编译多条规则文本并合并为一棵 AND 组合树
///
/// 空白规则文本在编译前即被拒绝。
pub fn combine_all<S: AsRef<str>>(rule_texts: &[S]) -> Result<Node> {
    if rule_texts.is_empty() {
        return Err(RuleError::NoRules);
    }

    let mut trees = Vec::with_capacity(rule_texts.len());
    for text in rule_texts {
        let text = text.as_ref();
        if text.trim().is_empty() {
            return Err(RuleError::NullRule);
        }
        trees.push(compile(text)?);
    }

    combiner::combine(trees)
}

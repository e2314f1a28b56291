//! 规则解析器
//!
//! 双栈（输出栈 + 运算符栈）的算符优先解析：AND 优先级高于 OR，
//! 括号改变结合顺序。解析过程完全迭代，栈下溢即报错。

use crate::error::{Result, RuleError};
use crate::models::{Combinator, Condition, Literal, Node};
use crate::token::Token;
use regex::Regex;
use std::sync::LazyLock;

/// 条件片段的形状：标识符、比较符、字面量
static CONDITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\w+)\s*([<>=!]+)\s*("[^"]*"|'[^']*'|\d+)$"#)
        .expect("condition pattern must compile")
});

/// 运算符栈条目：组合符或左括号标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Combinator(Combinator),
    OpenParen,
}

/// 将 token 序列解析为一棵规则树
pub fn parse(tokens: &[Token]) -> Result<Node> {
    let mut output: Vec<Node> = Vec::new();
    let mut operators: Vec<StackOp> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => operators.push(StackOp::OpenParen),
            Token::CloseParen => loop {
                match operators.pop() {
                    Some(StackOp::OpenParen) => break,
                    Some(StackOp::Combinator(op)) => apply_operator(op, &mut output)?,
                    None => return Err(RuleError::UnmatchedParen),
                }
            },
            Token::And => push_combinator(Combinator::And, &mut output, &mut operators)?,
            Token::Or => push_combinator(Combinator::Or, &mut output, &mut operators)?,
            Token::Condition(text) => output.push(parse_condition(text)?),
        }
    }

    while let Some(op) = operators.pop() {
        match op {
            StackOp::OpenParen => return Err(RuleError::UnmatchedParen),
            StackOp::Combinator(op) => apply_operator(op, &mut output)?,
        }
    }

    // 输出栈可能残留多个子树，结果取最早完成的一棵
    output.into_iter().next().ok_or(RuleError::EmptyResult)
}

/// 处理进入的组合符：先应用栈顶所有优先级不低于它的组合符
fn push_combinator(
    incoming: Combinator,
    output: &mut Vec<Node>,
    operators: &mut Vec<StackOp>,
) -> Result<()> {
    while let Some(&StackOp::Combinator(top)) = operators.last() {
        if top.precedence() < incoming.precedence() {
            break;
        }
        operators.pop();
        apply_operator(top, output)?;
    }

    operators.push(StackOp::Combinator(incoming));
    Ok(())
}

/// 应用组合符：弹出 right、left 两棵子树，组装新节点压回输出栈
fn apply_operator(op: Combinator, output: &mut Vec<Node>) -> Result<()> {
    let right = output.pop().ok_or(RuleError::InsufficientOperands)?;
    let left = output.pop().ok_or(RuleError::InsufficientOperands)?;
    output.push(Node::combinator(op, left, right));
    Ok(())
}

/// 将条件片段解析为操作数节点
fn parse_condition(text: &str) -> Result<Node> {
    let caps = CONDITION_PATTERN
        .captures(text)
        .ok_or_else(|| RuleError::InvalidToken(text.to_string()))?;

    let field = caps[1].to_string();
    let comparator = caps[2].to_string();
    let literal = parse_literal(&caps[3])?;

    Ok(Node::operand(Condition {
        field,
        comparator,
        literal,
    }))
}

/// 解析字面量：去除成对引号，否则按十进制整数处理
fn parse_literal(raw: &str) -> Result<Literal> {
    let quoted = (raw.starts_with('"') && raw.ends_with('"'))
        || (raw.starts_with('\'') && raw.ends_with('\''));

    if quoted {
        Ok(Literal::Str(raw[1..raw.len() - 1].to_string()))
    } else {
        raw.parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| RuleError::InvalidToken(raw.to_string()))
    }
}

//! 规则文本分词器
//!
//! 将规则源文本切分为关键字、括号与条件片段。

use crate::error::{Result, RuleError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 词法 token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    And,
    Or,
    /// 条件片段，形状由解析器校验
    Condition(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Condition(text) => write!(f, "{}", text),
        }
    }
}

/// token 切分模式，按优先级依次为：两侧带空白的 AND/OR 关键字、括号、
/// 条件片段（标识符 + 比较符 + 双引号字符串/单引号字符串/十进制整数）
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\s+AND\s+|\s+OR\s+|\(|\)|\w+\s*[<>=!]+\s*"[^"]*"|\w+\s*[<>=!]+\s*'[^']*'|\w+\s*[<>=!]+\s*\d+"#,
    )
    .expect("token pattern must compile")
});

/// 将规则文本切分为 token 序列
///
/// 切分保留分隔符：匹配到的片段成为 token，相邻匹配之间的残余文本
/// 去除首尾空白后同样保留为 token，由解析器判定其是否合法。
/// 纯空白片段丢弃，token 顺序与源文本一致。
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    if text.is_empty() {
        return Err(RuleError::EmptyInput);
    }

    let mut tokens = Vec::new();
    let mut last_end = 0;

    for m in TOKEN_PATTERN.find_iter(text) {
        push_piece(&mut tokens, &text[last_end..m.start()]);
        push_piece(&mut tokens, m.as_str());
        last_end = m.end();
    }
    push_piece(&mut tokens, &text[last_end..]);

    if tokens.is_empty() {
        return Err(RuleError::NoTokens);
    }

    Ok(tokens)
}

/// 归类一段文本并压入 token 序列
fn push_piece(tokens: &mut Vec<Token>, piece: &str) {
    let piece = piece.trim();
    if piece.is_empty() {
        return;
    }

    let token = match piece {
        "(" => Token::OpenParen,
        ")" => Token::CloseParen,
        "AND" => Token::And,
        "OR" => Token::Or,
        other => Token::Condition(other.to_string()),
    };
    tokens.push(token);
}

//! 条件规则引擎
//!
//! 将字段比较与 AND/OR 组合的条件文本编译为规则树，支持：
//! - 规则文本分词与算符优先解析
//! - 规则树对输入数据的求值
//! - 多规则合并
//! - 规则树传输结构的（反）序列化

pub mod combiner;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod parser;
pub mod token;
pub mod wire;

pub use combiner::combine;
pub use engine::{combine_all, compile};
pub use error::{Result, RuleError};
pub use evaluator::evaluate;
pub use models::{Combinator, Condition, EvaluationContext, Literal, Node};
pub use parser::parse;
pub use token::{Token, tokenize};
pub use wire::{WireNode, from_value, from_wire, to_wire};

//! 规则引擎集成测试
//!
//! 覆盖完整的编译、传输往返、合并与求值流程。

use rule_engine::{
    EvaluationContext, RuleError, combine_all, compile, evaluate, from_value, to_wire,
};
use serde_json::{Value, json};

fn context(value: Value) -> EvaluationContext {
    match value {
        Value::Object(map) => EvaluationContext::new(map),
        other => panic!("context must be a JSON object, got {}", other),
    }
}

#[test]
fn test_or_binds_looser_than_and() {
    // a = 1 OR (b = 2 AND c = 3)
    let tree = compile("a = 1 OR b = 2 AND c = 3").unwrap();

    assert!(evaluate(&tree, &context(json!({"a": 1, "b": 0, "c": 0}))).unwrap());
    assert!(evaluate(&tree, &context(json!({"a": 0, "b": 2, "c": 3}))).unwrap());
    assert!(!evaluate(&tree, &context(json!({"a": 0, "b": 2, "c": 0}))).unwrap());
}

#[test]
fn test_parentheses_override_precedence() {
    // (a = 1 OR b = 2) AND c = 3
    let tree = compile("(a = 1 OR b = 2) AND c = 3").unwrap();

    assert!(evaluate(&tree, &context(json!({"a": 1, "b": 0, "c": 3}))).unwrap());
    assert!(!evaluate(&tree, &context(json!({"a": 1, "b": 0, "c": 0}))).unwrap());
    assert!(evaluate(&tree, &context(json!({"a": 0, "b": 2, "c": 3}))).unwrap());
}

#[test]
fn test_wire_round_trip_preserves_evaluation() {
    let tree = compile("age > 30 AND department = 'Sales'").unwrap();
    let wire_value = serde_json::to_value(to_wire(&tree)).unwrap();
    let restored = from_value(&wire_value).unwrap();

    let records = [
        json!({"age": 35, "department": "Sales"}),
        json!({"age": 20, "department": "Sales"}),
        json!({"age": 35, "department": "Marketing"}),
    ];

    for record in records {
        let expected = evaluate(&tree, &context(record.clone())).unwrap();
        let actual = evaluate(&restored, &context(record)).unwrap();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_combine_all_evaluates_as_conjunction() {
    let rules = ["age > 30", "department = 'Sales'", "level < 5"];
    let combined = combine_all(&rules).unwrap();

    let records = [
        json!({"age": 40, "department": "Sales", "level": 3}),
        json!({"age": 40, "department": "Marketing", "level": 3}),
        json!({"age": 20, "department": "Sales", "level": 3}),
        json!({"age": 40, "department": "Sales", "level": 7}),
    ];

    for record in records {
        let mut expected = true;
        for rule in &rules {
            let tree = compile(rule).unwrap();
            expected = expected && evaluate(&tree, &context(record.clone())).unwrap();
        }

        let actual = evaluate(&combined, &context(record)).unwrap();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_sales_rule_matches_qualifying_record() {
    let tree = compile("age > 30 AND department = 'Sales'").unwrap();
    let ctx = context(json!({"age": 35, "department": "Sales"}));

    assert!(evaluate(&tree, &ctx).unwrap());
}

#[test]
fn test_sales_rule_rejects_underage_record() {
    let tree = compile("age > 30 AND department = 'Sales'").unwrap();
    let ctx = context(json!({"age": 20, "department": "Sales"}));

    assert!(!evaluate(&tree, &ctx).unwrap());
}

#[test]
fn test_combined_rules_reject_partial_match() {
    let combined = combine_all(&["age > 30", "department = 'Sales'"]).unwrap();
    let ctx = context(json!({"age": 40, "department": "Marketing"}));

    assert!(!evaluate(&combined, &ctx).unwrap());
}

#[test]
fn test_leading_combinator_is_compile_error() {
    assert!(matches!(
        compile("AND age > 5"),
        Err(RuleError::InsufficientOperands)
    ));
}

#[test]
fn test_missing_field_is_evaluation_error() {
    let tree = compile("salary > 1000").unwrap();
    let ctx = context(json!({"age": 35}));

    match evaluate(&tree, &ctx) {
        Err(RuleError::MissingField(field)) => assert_eq!(field, "salary"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_type_mismatch_defaults_false() {
    // name 是字符串，> 比较没有语义，返回 false 而非报错
    let tree = compile("name > 5").unwrap();
    let ctx = context(json!({"name": "Alice"}));

    assert!(!evaluate(&tree, &ctx).unwrap());
}

#[test]
fn test_compile_errors_are_modeled() {
    let cases = [
        ("", RuleError::EmptyInput),
        ("   ", RuleError::NoTokens),
        ("a = 1 )", RuleError::UnmatchedParen),
        ("( a = 1", RuleError::UnmatchedParen),
        ("()", RuleError::EmptyResult),
        ("AND age > 5", RuleError::InsufficientOperands),
    ];

    for (text, expected) in cases {
        let err = compile(text).unwrap_err();
        assert_eq!(
            std::mem::discriminant(&err),
            std::mem::discriminant(&expected),
            "rule {:?} produced {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_deeply_nested_rule() {
    let tree = compile(
        "((age > 30 AND department = 'Sales') OR (age > 50 AND department = 'Support')) AND region = \"East\"",
    )
    .unwrap();

    assert!(
        evaluate(
            &tree,
            &context(json!({"age": 35, "department": "Sales", "region": "East"}))
        )
        .unwrap()
    );
    assert!(
        evaluate(
            &tree,
            &context(json!({"age": 55, "department": "Support", "region": "East"}))
        )
        .unwrap()
    );
    assert!(
        !evaluate(
            &tree,
            &context(json!({"age": 35, "department": "Sales", "region": "West"}))
        )
        .unwrap()
    );
}

#[test]
fn test_wire_round_trip_on_combined_tree() {
    let combined = combine_all(&["age > 30", "department = 'Sales'", "level < 5"]).unwrap();
    let wire_value = serde_json::to_value(to_wire(&combined)).unwrap();
    let restored = from_value(&wire_value).unwrap();

    let record = json!({"age": 40, "department": "Sales", "level": 3});
    assert_eq!(
        evaluate(&restored, &context(record.clone())).unwrap(),
        evaluate(&combined, &context(record)).unwrap()
    );
}

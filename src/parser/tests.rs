#[cfg(test)]
use super::*;

fn table(entries: &[(&str, Value)]) -> ConstantsTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn ab() -> ConstantsTable {
    table(&[("a", Value::Integer(5)), ("b", Value::Integer(10))])
}

#[test]
fn test_integer_operands() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    for n in [0i64, 7, -7, 42, 1_000_000, i64::MAX, i64::MIN] {
        assert_eq!(parser.parse_operand(&n.to_string()), Ok(Value::Integer(n)));
    }
}

#[test]
fn test_float_operands() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    assert_eq!(parser.parse_operand("1.5"), Ok(Value::Float(1.5)));
    assert_eq!(parser.parse_operand(".5"), Ok(Value::Float(0.5)));
    assert_eq!(parser.parse_operand("5."), Ok(Value::Float(5.0)));
    assert_eq!(parser.parse_operand("-2.25"), Ok(Value::Float(-2.25)));
}

#[test]
fn test_integer_literal_overflow() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    let err = parser.parse_operand("99999999999999999999").unwrap_err();
    assert!(matches!(err, JsonconError::Overflow { code: Some(206), .. }));
}

#[test]
fn test_float_literal_overflow() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    let huge = format!("1{}.0", "0".repeat(400));
    let err = parser.parse_operand(&huge).unwrap_err();
    assert!(matches!(err, JsonconError::Overflow { code: Some(206), .. }));

    let err = parser.evaluate(&format!("* -{} 1", huge)).unwrap_err();
    assert!(matches!(err, JsonconError::Overflow { .. }));
}

#[test]
fn test_constant_lookup_copies_value() {
    let constants = table(&[("name", Value::String("svc".into()))]);
    let parser = Parser::new(&constants);

    assert_eq!(parser.parse_operand("name"), Ok(Value::String("svc".into())));
    assert_eq!(constants.get("name"), Some(&Value::String("svc".into())));
}

#[test]
fn test_list_literals() {
    let constants = ab();
    let parser = Parser::new(&constants);

    let expected = Value::List(vec![Value::Integer(1), Value::Integer(5), Value::Float(2.5)]);
    assert_eq!(parser.parse_operand("[1, a, 2.5]"), Ok(expected.clone()));
    assert_eq!(parser.parse_operand("{1,a,2.5}"), Ok(expected));
    assert_eq!(parser.parse_operand("[]"), Ok(Value::List(vec![])));
}

#[test]
fn test_nested_list_literal() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.parse_operand("{[1, 2], 3}"),
        Ok(Value::List(vec![
            Value::List(vec![Value::Integer(1), Value::Integer(2)]),
            Value::Integer(3),
        ]))
    );
}

#[test]
fn test_nested_expression_operand() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert_eq!(parser.parse_operand(".[+ a 2]."), Ok(Value::Integer(7)));
    assert_eq!(parser.evaluate("* .[+ a 1]. 2"), Ok(Value::Integer(12)));
}

#[test]
fn test_unknown_operands() {
    let constants = ab();
    let parser = Parser::new(&constants);

    for token in ["-", "-x", "missing", "1.2.3", "", "[1,,2]"] {
        let err = parser.parse_operand(token).unwrap_err();
        assert!(
            matches!(err, JsonconError::UnknownOperand { .. }),
            "expected UnknownOperand for {:?}, got {:?}",
            token,
            err
        );
    }

    match parser.parse_operand("missing").unwrap_err() {
        JsonconError::UnknownOperand { token, .. } => assert_eq!(token, "missing"),
        other => panic!("Expected UnknownOperand, got {:?}", other),
    }
}

#[test]
fn test_reformat_expr_operations() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert_eq!(parser.evaluate("+ a b"), Ok(Value::Integer(15)));
    assert_eq!(parser.evaluate("- b a"), Ok(Value::Integer(5)));
    assert_eq!(parser.evaluate("* a 3"), Ok(Value::Integer(15)));
    assert_eq!(parser.evaluate("/ b a"), Ok(Value::Float(2.0)));
    assert_eq!(
        parser.evaluate("sort {3, 1, 2}"),
        Ok(Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]))
    );
}

#[test]
fn test_variadic_arithmetic() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert_eq!(parser.evaluate("+ 1 2 3 4"), Ok(Value::Integer(10)));
    assert_eq!(parser.evaluate("+ 7"), Ok(Value::Integer(7)));
    assert_eq!(parser.evaluate("- 20 1 2 3"), Ok(Value::Integer(14)));
    assert_eq!(parser.evaluate("- a"), Ok(Value::Integer(-5)));
    assert_eq!(parser.evaluate("* 2 3 4"), Ok(Value::Integer(24)));
    assert_eq!(parser.evaluate("*"), Ok(Value::Integer(1)));
}

#[test]
fn test_mixed_numeric_promotes_to_float() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert_eq!(parser.evaluate("+ a 0.5"), Ok(Value::Float(5.5)));
    assert_eq!(parser.evaluate("* 2 1.5"), Ok(Value::Float(3.0)));
    assert_eq!(parser.evaluate("- 1.5"), Ok(Value::Float(-1.5)));
    assert_eq!(parser.evaluate("/ 1 4"), Ok(Value::Float(0.25)));
}

#[test]
fn test_infix_form() {
    let constants = table(&[("c", Value::Integer(10))]);
    let parser = Parser::new(&constants);

    assert_eq!(parser.evaluate("4 / 2"), Ok(Value::Float(2.0)));
    assert_eq!(parser.evaluate("c + 1"), Ok(Value::Integer(11)));
    assert_eq!(parser.evaluate("5 * 2"), Ok(Value::Integer(10)));
    assert_eq!(parser.evaluate("-3 - 2"), Ok(Value::Integer(-5)));
}

#[test]
fn test_division_arity() {
    let constants = ab();
    let parser = Parser::new(&constants);

    for expr in ["/ 1", "/ 1 2 3", "/"] {
        let err = parser.evaluate(expr).unwrap_err();
        assert!(
            matches!(err, JsonconError::ArityError { code: Some(202), .. }),
            "expected ArityError for {:?}, got {:?}",
            expr,
            err
        );
    }
}

#[test]
fn test_empty_sum_and_difference_are_arity_errors() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    assert!(matches!(parser.evaluate("+"), Err(JsonconError::ArityError { .. })));
    assert!(matches!(parser.evaluate("-"), Err(JsonconError::ArityError { .. })));
}

#[test]
fn test_division_by_zero() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert!(matches!(parser.evaluate("/ a 0"), Err(JsonconError::DivisionByZero { .. })));
    assert!(matches!(parser.evaluate("/ a 0.0"), Err(JsonconError::DivisionByZero { .. })));
    assert!(matches!(parser.evaluate("/ a .[- b b]."), Err(JsonconError::DivisionByZero { .. })));
}

#[test]
fn test_arithmetic_overflow() {
    let constants = table(&[("big", Value::Integer(i64::MAX))]);
    let parser = Parser::new(&constants);

    assert!(matches!(parser.evaluate("+ big 1"), Err(JsonconError::Overflow { .. })));
    assert!(matches!(parser.evaluate("* big 2"), Err(JsonconError::Overflow { .. })));
    assert_eq!(parser.evaluate("+ big 1.0"), Ok(Value::Float(i64::MAX as f64 + 1.0)));
}

#[test]
fn test_arithmetic_on_strings_and_lists() {
    let constants = table(&[("s", Value::String("text".into()))]);
    let parser = Parser::new(&constants);

    match parser.evaluate("+ s 1").unwrap_err() {
        JsonconError::OperandTypeError { operator, found, .. } => {
            assert_eq!(operator, "+");
            assert_eq!(found, "string");
        }
        other => panic!("Expected OperandTypeError, got {:?}", other),
    }

    match parser.evaluate("* 2 [1, 2]").unwrap_err() {
        JsonconError::OperandTypeError { found, .. } => assert_eq!(found, "list"),
        other => panic!("Expected OperandTypeError, got {:?}", other),
    }

    assert!(matches!(parser.evaluate("- s"), Err(JsonconError::OperandTypeError { .. })));
    assert!(matches!(parser.evaluate("/ s 2"), Err(JsonconError::OperandTypeError { .. })));
}

#[test]
fn test_unsupported_operator() {
    let constants = ab();
    let parser = Parser::new(&constants);

    match parser.evaluate("% a b").unwrap_err() {
        JsonconError::UnsupportedOperator { operator, .. } => assert_eq!(operator, "%"),
        other => panic!("Expected UnsupportedOperator, got {:?}", other),
    }

    assert!(matches!(parser.evaluate("   "), Err(JsonconError::UnsupportedOperator { .. })));
    assert!(matches!(parser.evaluate("a b"), Err(JsonconError::UnsupportedOperator { .. })));
}

#[test]
fn test_sort_with_expressions() {
    let constants = ab();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.evaluate("sort {.[+ a 2]., b, .[- b a].}"),
        Ok(Value::List(vec![Value::Integer(5), Value::Integer(7), Value::Integer(10)]))
    );
}

#[test]
fn test_sort_mixed_numbers_keeps_variants() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.evaluate("sort [2.5, 1, -3, 2]"),
        Ok(Value::List(vec![
            Value::Integer(-3),
            Value::Integer(1),
            Value::Integer(2),
            Value::Float(2.5),
        ]))
    );
}

#[test]
fn test_sort_strings() {
    let constants = table(&[
        ("x", Value::String("pear".into())),
        ("y", Value::String("apple".into())),
    ]);
    let parser = Parser::new(&constants);

    assert_eq!(
        parser.evaluate("sort {x, y}"),
        Ok(Value::List(vec![Value::String("apple".into()), Value::String("pear".into())]))
    );
}

#[test]
fn test_sort_is_idempotent_and_permutation_invariant() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    let permutations = [
        "{1, 2, 3}", "{1, 3, 2}", "{2, 1, 3}", "{2, 3, 1}", "{3, 1, 2}", "{3, 2, 1}",
    ];
    let expected = Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);

    for list in permutations {
        let sorted = parser.evaluate(&format!("sort {}", list)).unwrap();
        assert_eq!(sorted, expected);

        let again = parser.evaluate(&format!("sort {}", sorted)).unwrap();
        assert_eq!(again, sorted);
    }
}

#[test]
fn test_sort_type_errors() {
    let constants = table(&[("s", Value::String("x".into()))]);
    let parser = Parser::new(&constants);

    match parser.evaluate("sort 5").unwrap_err() {
        JsonconError::SortTypeError { found, code, .. } => {
            assert_eq!(found, "integer");
            assert_eq!(code, Some(203));
        }
        other => panic!("Expected SortTypeError, got {:?}", other),
    }

    assert!(matches!(parser.evaluate("sort {[2], [1]}"), Err(JsonconError::SortTypeError { .. })));
    assert!(matches!(parser.evaluate("sort {1, s}"), Err(JsonconError::SortTypeError { .. })));
}

#[test]
fn test_sort_empty_list() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    assert_eq!(parser.evaluate("sort []"), Ok(Value::List(vec![])));
}

#[test]
fn test_sort_large_integers_against_floats() {
    let constants = ConstantsTable::new();
    let parser = Parser::new(&constants);

    // 2^53 + 1 rounds down to 2^53 as a float
    let sorted = parser.evaluate("sort {9007199254740993, 9007199254740992.0, 9007199254740992}").unwrap();
    assert_eq!(
        sorted,
        Value::List(vec![
            Value::Float(9007199254740992.0),
            Value::Integer(9007199254740992),
            Value::Integer(9007199254740993),
        ])
    );

    let sorted = parser.evaluate("sort {9223372036854775807, 9223372036854775808.0, -0.5, -1}").unwrap();
    assert_eq!(
        sorted,
        Value::List(vec![
            Value::Integer(-1),
            Value::Float(-0.5),
            Value::Integer(i64::MAX),
            Value::Float(9223372036854775808.0),
        ])
    );
}

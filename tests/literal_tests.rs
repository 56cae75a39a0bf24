use tinyql::sql::{join_literals, parse_literal_query, Literal, LiteralError};

#[test]
fn test_integers_format_back_exactly() {
    for n in ["0", "1", "-1", "42", "-123456", "9223372036854775807"] {
        let values = parse_literal_query(&format!("SELECT {};", n)).unwrap();

        assert_eq!(join_literals(&values), n);
    }
}

#[test]
fn test_negative_zero() {
    let values = parse_literal_query("SELECT -0;").unwrap();

    assert_eq!(values, vec![Literal::Integer(0)]);
    assert_eq!(join_literals(&values), "0");
}

#[test]
fn test_boolean_output_is_uppercase() {
    assert_eq!(join_literals(&parse_literal_query("SELECT TRUE;").unwrap()), "TRUE");
    assert_eq!(join_literals(&parse_literal_query("SELECT FALSE;").unwrap()), "FALSE");
}

#[test]
fn test_boolean_case_variants_rejected() {
    for query in ["SELECT true;", "SELECT false;", "SELECT True;", "SELECT fAlSe;"] {
        assert!(
            matches!(
                parse_literal_query(query),
                Err(LiteralError::InvalidExpression { .. })
            ),
            "{} should be rejected",
            query
        );
    }
}

#[test]
fn test_mixed_values_keep_their_kind() {
    let values = parse_literal_query("SELECT 7, TRUE, -2, FALSE;").unwrap();

    assert_eq!(
        values,
        vec![
            Literal::Integer(7),
            Literal::Boolean(true),
            Literal::Integer(-2),
            Literal::Boolean(false),
        ]
    );
    assert_eq!(join_literals(&values), "7,TRUE,-2,FALSE");
}

#[test]
fn test_trailing_characters_reject_whole_query() {
    assert!(matches!(
        parse_literal_query("SELECT 1, 2; SELECT 3;"),
        Err(LiteralError::TrailingInput { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_literal_query("SELECT 1 2;").unwrap_err().to_string(),
        "expected \";\" at position 9"
    );
    assert_eq!(
        parse_literal_query("SELECT 1;x").unwrap_err().to_string(),
        "unexpected characters after statement at position 9"
    );
}

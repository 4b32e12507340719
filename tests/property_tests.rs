// tests/property_tests.rs

use dql_lang::ast::Condition;
use dql_lang::parser::Parser;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}(\\.[a-z_][a-z0-9_]{0,4})?"
        .prop_filter("keywords are reserved", |s| {
            !matches!(
                s.as_str(),
                "and" | "or" | "not" | "in" | "order" | "by" | "asc" | "desc" | "true"
                    | "false" | "null"
            )
        })
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..100).prop_map(|(whole, fraction)| format!("{}.{}", whole, fraction)),
        "[a-z0-9 ]{0,8}".prop_map(|s| format!("'{}'", s)),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
    ]
}

fn leaf() -> impl Strategy<Value = String> {
    let comparison = (
        identifier(),
        prop::sample::select(vec!["=", "!=", "<", ">", "<=", ">="]),
        literal(),
    )
        .prop_map(|(identifier, operator, value)| format!("{} {} {}", identifier, operator, value));

    let membership = (
        identifier(),
        any::<bool>(),
        prop::collection::vec(literal(), 1..4),
    )
        .prop_map(|(identifier, negated, values)| {
            format!(
                "{} {}IN ({})",
                identifier,
                if negated { "NOT " } else { "" },
                values.join(", ")
            )
        });

    prop_oneof![comparison, membership]
}

fn where_clause() -> impl Strategy<Value = String> {
    leaf().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..4).prop_map(|parts| parts.join(" AND ")),
            prop::collection::vec(inner.clone(), 2..4).prop_map(|parts| parts.join(" OR ")),
            inner.prop_map(|part| format!("({})", part)),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_parse_is_deterministic(input in where_clause()) {
        let parser = Parser::new();
        let first = parser.parse(&input).unwrap();
        let second = Parser::new().parse(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parenthesized_where_is_equivalent(input in where_clause()) {
        let parser = Parser::new();
        let plain = parser.parse(&input).unwrap();
        let wrapped = parser.parse(&format!("({})", input)).unwrap();
        prop_assert_eq!(plain, wrapped);
    }

    #[test]
    fn prop_trees_are_normalized(input in where_clause()) {
        let query = Parser::new().parse_query(&input).unwrap();
        let condition = query.where_clause.unwrap();
        prop_assert!(condition.is_normalized(), "not normalized: {:?}", condition);
    }

    #[test]
    fn prop_and_run_has_one_child_per_unit(parts in prop::collection::vec(leaf(), 2..8)) {
        let query = Parser::new().parse_query(&parts.join(" AND ")).unwrap();
        match query.where_clause.unwrap() {
            Condition::And(children) => prop_assert_eq!(children.len(), parts.len()),
            other => prop_assert!(false, "expected And, got {:?}", other),
        }
    }

    #[test]
    fn prop_keyword_case_is_irrelevant(input in where_clause()) {
        let lower = input.replace(" AND ", " and ").replace(" OR ", " or ")
            .replace("NOT IN", "not in").replace(" IN (", " in (");
        prop_assert_eq!(
            Parser::new().parse(&input).unwrap(),
            Parser::new().parse(&lower).unwrap()
        );
    }

    #[test]
    fn prop_arbitrary_input_never_panics(input in "\\PC{0,40}") {
        let _ = Parser::new().parse(&input);
    }
}

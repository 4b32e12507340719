// tests/adapter_tests.rs

use std::sync::Arc;

use dql_lang::adapter::Translator;
use dql_lang::ast::Operator;
use dql_lang::config::{Defaults, TranslatorConfig};
use dql_lang::error::ParseError;
use dql_lang::hook::Operand;
use serde_json::{Value, json};

fn translator_with_defaults() -> (Translator, Arc<Value>, Arc<Value>) {
    let where_default = Arc::new(json!({}));
    let order_by_default = Arc::new(json!({}));
    let translator = Translator::default()
        .with_default_where(Arc::clone(&where_default))
        .with_default_order_by(Arc::clone(&order_by_default));
    (translator, where_default, order_by_default)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_use_all() {
    let (translator, where_default, order_by_default) = translator_with_defaults();
    let result = translator.translate(Some("")).unwrap();

    assert!(Arc::ptr_eq(&result.where_clause, &where_default));
    assert!(Arc::ptr_eq(&result.order_by, &order_by_default));
}

#[test]
fn test_defaults_use_order_by_only() {
    let (translator, where_default, order_by_default) = translator_with_defaults();
    let result = translator.translate(Some("x=1")).unwrap();

    assert!(!Arc::ptr_eq(&result.where_clause, &where_default));
    assert!(Arc::ptr_eq(&result.order_by, &order_by_default));
    assert_eq!(*result.where_clause, json!({"x": 1}));
}

#[test]
fn test_defaults_use_where_only() {
    let (translator, where_default, order_by_default) = translator_with_defaults();
    let result = translator.translate(Some("ORDER BY y")).unwrap();

    assert!(Arc::ptr_eq(&result.where_clause, &where_default));
    assert!(!Arc::ptr_eq(&result.order_by, &order_by_default));
}

#[test]
fn test_defaults_use_none() {
    let (translator, where_default, order_by_default) = translator_with_defaults();
    let result = translator.translate(Some("x=1 ORDER BY y")).unwrap();

    assert!(!Arc::ptr_eq(&result.where_clause, &where_default));
    assert!(!Arc::ptr_eq(&result.order_by, &order_by_default));
}

#[test]
fn test_missing_input_is_empty() {
    let (translator, where_default, order_by_default) = translator_with_defaults();
    let result = translator.translate(None).unwrap();

    assert!(Arc::ptr_eq(&result.where_clause, &where_default));
    assert!(Arc::ptr_eq(&result.order_by, &order_by_default));
}

#[test]
fn test_unset_defaults_are_empty_objects() {
    let result = Translator::default().translate(Some("")).unwrap();
    assert_eq!(result.to_json(), json!({"where": {}, "orderBy": {}}));
}

#[test]
fn test_invalid_input_never_defaults() {
    let (translator, _, _) = translator_with_defaults();
    for input in ["id=", "   ", "order by", "a='x"] {
        assert!(
            translator.translate(Some(input)).is_err(),
            "Expected error for input: {}",
            input
        );
    }
    assert!(matches!(
        translator.translate(Some("id=id")),
        Err(ParseError::Syntax(_))
    ));
}

// ============================================================================
// Sort Mappings
// ============================================================================

#[test]
fn test_order_by_mappings() {
    let translator = Translator::default()
        .with_sort_mapping("identifier", "mapped1")
        .with_sort_mapping("qualified.identifier", "mapped2");

    let result = translator
        .translate(Some("ORDER BY identifier ASC, qualified.identifier DESC, unmapped ASC"))
        .unwrap();

    assert_eq!(*result.order_by, json!({"mapped1": 1, "mapped2": -1, "unmapped": 1}));
    let keys: Vec<&String> = result.order_by.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["mapped1", "mapped2", "unmapped"]);
}

#[test]
fn test_sort_mappings_leave_conditions_alone() {
    let translator = Translator::default().with_sort_mapping("a", "b");
    let result = translator.translate(Some("a=1 ORDER BY a")).unwrap();

    assert_eq!(*result.where_clause, json!({"a": 1}));
    assert_eq!(*result.order_by, json!({"b": 1}));
}

// ============================================================================
// Condition Transform
// ============================================================================

#[test]
fn test_where_transformer() {
    let translator = Translator::default().with_hook(
        |identifier: &str, _op: Operator, operand: Operand<'_>| {
            (identifier == "name").then(|| {
                json!({
                    "$or": [
                        {"firstName": {"$regexp": operand.to_json()}},
                        {"lastName": {"$regexp": operand.to_json()}}
                    ]
                })
            })
        },
    );

    assert_eq!(
        *translator.translate(Some("name='foulen' AND age < 10")).unwrap().where_clause,
        json!({
            "$and": [
                {
                    "$or": [
                        {"firstName": {"$regexp": "foulen"}},
                        {"lastName": {"$regexp": "foulen"}}
                    ]
                },
                {"age": {"$lt": 10}}
            ]
        })
    );
    assert!(translator.parser().has_hook());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_translator_from_config() {
    let config = TranslatorConfig::from_toml_str(
        r#"
        [sort_mappings]
        identifier = "mapped1"

        [condition_mappings]
        name = "profile.name"

        [defaults.where]
        active = true

        [defaults.order_by]
        created = -1
        "#,
    )
    .unwrap();
    let translator = Translator::new(config);

    let empty = translator.translate(Some("")).unwrap();
    assert_eq!(empty.to_json(), json!({"where": {"active": true}, "orderBy": {"created": -1}}));
    assert!(Arc::ptr_eq(&empty.where_clause, translator.default_where()));
    assert!(Arc::ptr_eq(&empty.order_by, translator.default_order_by()));

    let full = translator
        .translate(Some("name='ana' ORDER BY identifier DESC"))
        .unwrap();
    assert_eq!(
        full.to_json(),
        json!({"where": {"profile.name": "ana"}, "orderBy": {"mapped1": -1}})
    );
}

#[test]
fn test_translator_from_struct_config() {
    let config = TranslatorConfig {
        defaults: Defaults {
            where_clause: Some(json!({"deleted": false})),
            order_by: None,
        },
        ..TranslatorConfig::default()
    };
    let translator = Translator::new(config);

    assert!(!translator.parser().has_hook());
    assert_eq!(
        translator.translate(None).unwrap().to_json(),
        json!({"where": {"deleted": false}, "orderBy": {}})
    );
}

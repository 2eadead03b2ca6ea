use crate::ast::Span;
use crate::error::FerryError;
use std::sync::Arc;

fn create_test_error(
    variant: fn(String, Span, String, Arc<str>, String, usize) -> FerryError,
) -> FerryError {
    let source_text = "boat capacity two";
    let span = Span {
        start: 14,
        end: 17,
        line: 1,
        col: 15,
    };
    variant(
        "Expected a number".to_string(),
        span,
        "test.river".to_string(),
        Arc::from(source_text),
        "test_puzzle".to_string(),
        1,
    )
}

#[test]
fn test_error_creation_and_display() {
    let parse_error = create_test_error(FerryError::parse);
    let parse_error_display = format!("{}", parse_error);
    assert!(parse_error_display.contains("Parse error: Expected a number"));
    assert!(parse_error_display.contains("test.river:1:15"));

    let semantic_error = create_test_error(FerryError::semantic);
    let semantic_error_display = format!("{}", semantic_error);
    assert!(semantic_error_display.contains("Semantic error: Expected a number"));
    assert!(semantic_error_display.contains("test.river:1:15"));

    let source_text = "Goat dies with wolf";
    let span = Span {
        start: 15,
        end: 19,
        line: 1,
        col: 16,
    };
    let semantic_error_with_suggestion = FerryError::semantic_with_suggestion(
        "Undefined species: 'wolf'",
        span,
        "suggestion.river",
        Arc::from(source_text),
        "suggestion_puzzle",
        1,
        "Did you mean 'Wolf'?",
    );
    let display = format!("{}", semantic_error_with_suggestion);
    assert!(display.contains("Undefined species: 'wolf'"));
    assert!(display.contains("(suggestion: Did you mean 'Wolf'?)"));
    assert!(display.contains("suggestion.river:1:16"));

    let engine_error = FerryError::Engine("Something went wrong".to_string());
    assert_eq!(
        format!("{}", engine_error),
        "Engine error: Something went wrong"
    );

    let multiple_errors =
        FerryError::MultipleErrors(vec![parse_error, semantic_error, engine_error]);
    let multiple_errors_display = format!("{}", multiple_errors);
    assert!(multiple_errors_display.contains("Multiple errors:"));
    assert!(multiple_errors_display.contains("  1. Parse error: Expected a number"));
    assert!(multiple_errors_display.contains("  2. Semantic error: Expected a number"));
    assert!(multiple_errors_display.contains("  3. Engine error: Something went wrong"));
}

#[test]
fn test_move_errors() {
    let no_boat = FerryError::NoBoat {
        passenger: "Wolf".to_string(),
    };
    assert_eq!(
        no_boat.to_string(),
        "Wolf can't board, the boat is on the other shore"
    );
    assert!(!no_boat.is_invalid_move());

    let no_navigator = FerryError::NoNavigator {
        location: "Boat".to_string(),
    };
    assert_eq!(no_navigator.to_string(), "No navigator present on Boat");
    assert!(no_navigator.is_invalid_move());

    let death = FerryError::Death {
        location: "Right".to_string(),
        victim: "Cabbage".to_string(),
        predators: vec!["Goat".to_string()],
    };
    assert!(death.is_invalid_move());
}

#[test]
fn test_resource_limit_display() {
    let err = FerryError::ResourceLimitExceeded {
        limit_name: "max_visited_states".to_string(),
        limit_value: "10".to_string(),
        actual_value: "11".to_string(),
        suggestion: "Raise the limit".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Resource limit exceeded: max_visited_states (limit: 10, actual: 11). Raise the limit"
    );
}

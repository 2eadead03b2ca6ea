use crate::ast::Span;
use std::sync::Arc;
use thiserror::Error;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub puzzle_name: String,
    pub puzzle_start_line: usize,
    pub suggestion: Option<String>,
}

/// Error types for puzzle loading, river moves and search
#[derive(Debug, Clone, Error)]
pub enum FerryError {
    /// Parse error with source location
    #[error("{}", describe("Parse error", .0))]
    Parse(Box<ErrorDetails>),

    /// Semantic validation error with source location
    #[error("{}", describe("Semantic error", .0))]
    Semantic(Box<ErrorDetails>),

    /// A passenger tried to board while the boat rests on the other shore
    /// (or the passenger is on no shore at all).
    #[error("{passenger} can't board, the boat is on the other shore")]
    NoBoat { passenger: String },

    /// The boat tried to cross without anybody able to steer it.
    #[error("No navigator present on {location}")]
    NoNavigator { location: String },

    /// A survival check found an unprotected predator/prey co-presence.
    #[error("{victim} is killed by: {} (on {location})", predators.join(", "))]
    Death {
        location: String,
        victim: String,
        predators: Vec<String>,
    },

    /// A budget from `ResourceLimits` was exhausted
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Engine error without specific source location
    #[error("Engine error: {0}")]
    Engine(String),

    /// Multiple errors collected together
    #[error("{}", describe_all(.0))]
    MultipleErrors(Vec<FerryError>),
}

impl FerryError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: None,
        }))
    }

    /// Create a semantic error with source information
    pub fn semantic(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
    ) -> Self {
        Self::Semantic(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: None,
        }))
    }

    /// Create a semantic error with suggestion
    pub fn semantic_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Semantic(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// True for the outcomes of an invalid move: the search prunes these.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            FerryError::NoNavigator { .. } | FerryError::Death { .. }
        )
    }
}

fn describe(kind: &str, details: &ErrorDetails) -> String {
    let mut text = format!("{}: {}", kind, details.message);
    if let Some(suggestion) = &details.suggestion {
        text.push_str(&format!(" (suggestion: {})", suggestion));
    }
    text.push_str(&format!(
        " at {}:{}:{}",
        details.source_id, details.span.line, details.span.col
    ));
    text
}

fn describe_all(errors: &[FerryError]) -> String {
    let lines: Vec<String> = errors
        .iter()
        .enumerate()
        .map(|(i, error)| format!("  {}. {}", i + 1, error))
        .collect();
    format!("Multiple errors:\n{}", lines.join("\n"))
}

use crate::ast::Span;
use crate::error::FerryError;
use crate::resource_limits::ResourceLimits;
use crate::semantic::*;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod declarations;
pub mod relations;

#[derive(Parser)]
#[grammar = "src/parser/puzzle.pest"]
pub struct PuzzleParser;

/// Where in the source the parser currently is, for error reporting
pub(crate) struct ParseContext<'a> {
    pub source_id: &'a str,
    pub source_text: Arc<str>,
    pub puzzle_name: String,
    pub start_line: usize,
    pub max_relation_depth: usize,
}

impl ParseContext<'_> {
    pub fn error(&self, message: impl Into<String>, span: Span) -> FerryError {
        FerryError::parse(
            message,
            span,
            self.source_id,
            Arc::clone(&self.source_text),
            self.puzzle_name.clone(),
            self.start_line,
        )
    }
}

/// Parse every puzzle of a `.river` source
pub fn parse(
    content: &str,
    source_id: &str,
    limits: &ResourceLimits,
) -> Result<Vec<PuzzleDoc>, FerryError> {
    if content.len() > limits.max_file_size_bytes {
        return Err(FerryError::ResourceLimitExceeded {
            limit_name: "max_file_size_bytes".to_string(),
            limit_value: format!(
                "{} bytes ({} MB)",
                limits.max_file_size_bytes,
                limits.max_file_size_bytes / (1024 * 1024)
            ),
            actual_value: format!(
                "{} bytes ({:.2} MB)",
                content.len(),
                content.len() as f64 / (1024.0 * 1024.0)
            ),
            suggestion: "Reduce file size or split the puzzles over several files".to_string(),
        });
    }

    // Bound the nesting before pest recurses into it
    let nesting = max_paren_nesting(content);
    if nesting > limits.max_relation_depth {
        return Err(relations::depth_exceeded(nesting, limits));
    }

    let source_text: Arc<str> = Arc::from(content);

    match PuzzleParser::parse(Rule::puzzle_file, content) {
        Ok(pairs) => {
            let mut docs = Vec::new();
            for pair in pairs {
                if pair.as_rule() == Rule::puzzle_file {
                    for inner_pair in pair.into_inner() {
                        if inner_pair.as_rule() == Rule::puzzle {
                            let doc = parse_puzzle(inner_pair, source_id, &source_text, limits)?;
                            check_passenger_count(&doc, limits)?;
                            docs.push(doc);
                        }
                    }
                }
            }
            Ok(docs)
        }
        Err(e) => {
            let (start, end) = match e.location {
                pest::error::InputLocation::Pos(pos) => (pos, pos),
                pest::error::InputLocation::Span((start, end)) => (start, end),
            };
            let (line, col) = match e.line_col {
                pest::error::LineColLocation::Pos((line, col)) => (line, col),
                pest::error::LineColLocation::Span((line, col), _) => (line, col),
            };

            Err(FerryError::parse(
                format!("Parse error: {}", e.variant),
                Span {
                    start,
                    end,
                    line,
                    col,
                },
                source_id,
                source_text,
                "<parse-error>",
                1,
            ))
        }
    }
}

fn check_passenger_count(doc: &PuzzleDoc, limits: &ResourceLimits) -> Result<(), FerryError> {
    let total = doc
        .passengers
        .iter()
        .fold(0usize, |total, passenger| total.saturating_add(passenger.count));
    if total > limits.max_passengers {
        return Err(FerryError::ResourceLimitExceeded {
            limit_name: "max_passengers".to_string(),
            limit_value: limits.max_passengers.to_string(),
            actual_value: total.to_string(),
            suggestion: format!("Puzzle '{}' declares too many passenger instances", doc.name),
        });
    }
    Ok(())
}

fn parse_puzzle(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
    limits: &ResourceLimits,
) -> Result<PuzzleDoc, FerryError> {
    let mut inner = pair.into_inner();
    let declaration = inner.next().ok_or_else(|| {
        FerryError::Engine("Grammar error: puzzle missing puzzle_declaration".to_string())
    })?;

    let mut doc = parse_puzzle_declaration(declaration, source_id, source_text)?;
    let context = ParseContext {
        source_id,
        source_text: Arc::clone(source_text),
        puzzle_name: doc.name.clone(),
        start_line: doc.start_line,
        max_relation_depth: limits.max_relation_depth,
    };

    for statement in inner {
        match statement.as_rule() {
            Rule::boat_declaration => {
                doc.boats
                    .push(declarations::parse_boat_declaration(statement, &context)?);
            }
            Rule::passenger_declaration => {
                doc.passengers
                    .push(declarations::parse_passenger_declaration(statement, &context)?);
            }
            Rule::start_declaration => {
                doc.starts
                    .push(declarations::parse_placement(statement, &context)?);
            }
            Rule::goal_declaration => {
                doc.goals
                    .push(declarations::parse_placement(statement, &context)?);
            }
            Rule::threat_declaration => {
                doc.threats
                    .push(relations::parse_threat_declaration(statement, &context)?);
            }
            _ => {}
        }
    }

    Ok(doc)
}

fn parse_puzzle_declaration(
    pair: Pair<Rule>,
    source_id: &str,
    source_text: &Arc<str>,
) -> Result<PuzzleDoc, FerryError> {
    let mut doc = None;
    let mut description = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::puzzle_name => {
                doc = Some(PuzzleDoc::new(
                    inner_pair.as_str(),
                    Span::from_pest_span(inner_pair.as_span()),
                    source_id,
                    Arc::clone(source_text),
                ));
            }
            Rule::description => {
                description = inner_pair
                    .into_inner()
                    .next()
                    .map(|text| text.as_str().to_string());
            }
            _ => {}
        }
    }

    let mut doc = doc.ok_or_else(|| {
        FerryError::Engine("Grammar error: puzzle_declaration missing puzzle_name".to_string())
    })?;
    doc.description = description;
    Ok(doc)
}

/// Deepest parenthesis nesting outside comments and quoted names
fn max_paren_nesting(content: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_comment = false;
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '\n' => {
                in_comment = false;
                in_quotes = false;
            }
            _ if in_comment => {}
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            '#' => in_comment = true,
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

use crate::puzzle::{PassengerSpec, Puzzle};
use crate::relation::{RelationGraphBuilder, RelationId};
use crate::semantic::*;
use crate::{FerryError, FerryResult, Span};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;

/// Semantic checks between parsing and solving
///
/// Every problem found in a batch of puzzles is reported, not just the first.
#[derive(Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate parsed puzzles and lower them into solvable [`Puzzle`]s
    ///
    /// `existing` holds the names already present in the workspace.
    pub fn validate_all(
        &self,
        docs: Vec<PuzzleDoc>,
        existing: &HashSet<String>,
    ) -> FerryResult<Vec<Puzzle>> {
        let mut errors = Vec::new();

        self.validate_puzzle_names(&docs, existing, &mut errors);
        for doc in &docs {
            self.validate_declarations(doc, &mut errors);
            self.validate_species(doc, &mut errors);
        }

        match errors.len() {
            0 => {}
            1 => return Err(errors.remove(0)),
            _ => return Err(FerryError::MultipleErrors(errors)),
        }

        docs.iter().map(lower).collect()
    }

    fn validate_puzzle_names(
        &self,
        docs: &[PuzzleDoc],
        existing: &HashSet<String>,
        errors: &mut Vec<FerryError>,
    ) {
        let mut seen: HashMap<&str, &PuzzleDoc> = HashMap::new();
        for doc in docs {
            if existing.contains(&doc.name) {
                errors.push(semantic_error(
                    doc,
                    format!("Puzzle '{}' is already defined in the workspace", doc.name),
                    doc.name_span,
                    Some("Rename the puzzle or remove the other definition".to_string()),
                ));
            } else if let Some(first) = seen.get(doc.name.as_str()) {
                errors.push(semantic_error(
                    doc,
                    format!("Duplicate puzzle definition: '{}'", doc.name),
                    doc.name_span,
                    Some(format!(
                        "Puzzle '{}' was already defined at {}:{}",
                        doc.name, first.source, first.name_span.line
                    )),
                ));
            } else {
                seen.insert(doc.name.as_str(), doc);
            }
        }
    }

    /// One boat, one start and one goal; every species declared once with instances
    fn validate_declarations(&self, doc: &PuzzleDoc, errors: &mut Vec<FerryError>) {
        check_single(doc, "boat", doc.boats.iter().map(|b| b.span), errors);
        check_single(doc, "start", doc.starts.iter().map(|s| s.span), errors);
        check_single(doc, "goal", doc.goals.iter().map(|g| g.span), errors);

        let mut species: HashMap<&str, Span> = HashMap::new();
        for passenger in &doc.passengers {
            if let Some(first) = species.get(passenger.species.as_str()) {
                errors.push(semantic_error(
                    doc,
                    format!("Duplicate passenger declaration: '{}'", passenger.species),
                    passenger.span,
                    Some(format!(
                        "'{}' was already declared on line {}. Use x<n> for several instances",
                        passenger.species, first.line
                    )),
                ));
            } else {
                species.insert(passenger.species.as_str(), passenger.span);
            }

            if passenger.count == 0 {
                errors.push(semantic_error(
                    doc,
                    format!("Passenger '{}' needs at least one instance", passenger.species),
                    passenger.span,
                    None,
                ));
            }
        }

        if !doc.passengers.is_empty() && !doc.passengers.iter().any(|p| p.navigator) {
            warn!(puzzle = %doc.name, "No passenger can navigate; the puzzle has no solution");
        }
    }

    /// Threat subjects and relation leaves must name declared species
    fn validate_species(&self, doc: &PuzzleDoc, errors: &mut Vec<FerryError>) {
        let declared: Vec<&str> = doc.passengers.iter().map(|p| p.species.as_str()).collect();

        for threat in &doc.threats {
            let mut names = vec![(threat.subject.as_str(), threat.subject_span)];
            match &threat.threat {
                ThreatExpr::Guarded { killer, protector } => {
                    names.extend(killer.leaves());
                    if let Some(protector) = protector {
                        names.extend(protector.leaves());
                    }
                }
                ThreatExpr::Count {
                    killers,
                    protectors,
                } => {
                    names.extend(killers.leaves());
                    names.extend(protectors.leaves());
                }
            }

            for (name, span) in names {
                if declared.contains(&name) {
                    continue;
                }
                let suggestion = closest_species(name, &declared)
                    .map(|candidate| format!("Did you mean '{}'?", candidate))
                    .or_else(|| {
                        Some(format!(
                            "Declare it with 'passenger {}' before using it in a threat",
                            name
                        ))
                    });
                errors.push(semantic_error(
                    doc,
                    format!("Undefined species: '{}'", name),
                    span,
                    suggestion,
                ));
            }
        }
    }
}

fn check_single(
    doc: &PuzzleDoc,
    keyword: &str,
    spans: impl Iterator<Item = Span>,
    errors: &mut Vec<FerryError>,
) {
    let spans: Vec<Span> = spans.collect();
    match spans.as_slice() {
        [] => errors.push(semantic_error(
            doc,
            format!("Puzzle '{}' has no '{}' declaration", doc.name, keyword),
            doc.name_span,
            Some(missing_hint(keyword).to_string()),
        )),
        [_] => {}
        [first, rest @ ..] => {
            for span in rest {
                errors.push(semantic_error(
                    doc,
                    format!("Duplicate '{}' declaration", keyword),
                    *span,
                    Some(format!("'{}' was already declared on line {}", keyword, first.line)),
                ));
            }
        }
    }
}

fn missing_hint(keyword: &str) -> &'static str {
    match keyword {
        "boat" => "Add a line such as 'boat capacity 2'",
        "start" => "Add a line such as 'start left'",
        _ => "Add a line such as 'goal right'",
    }
}

/// A declared species equal up to case, or one being a prefix of the other
fn closest_species<'a>(name: &str, declared: &[&'a str]) -> Option<&'a str> {
    let lower = name.to_lowercase();
    declared
        .iter()
        .find(|candidate| candidate.to_lowercase() == lower)
        .or_else(|| {
            declared.iter().find(|candidate| {
                let candidate = candidate.to_lowercase();
                !lower.is_empty() && (candidate.starts_with(&lower) || lower.starts_with(&candidate))
            })
        })
        .copied()
}

fn semantic_error(
    doc: &PuzzleDoc,
    message: String,
    span: Span,
    suggestion: Option<String>,
) -> FerryError {
    match suggestion {
        Some(suggestion) => FerryError::semantic_with_suggestion(
            message,
            span,
            doc.source.clone(),
            Arc::clone(&doc.source_text),
            doc.name.clone(),
            doc.start_line,
            suggestion,
        ),
        None => FerryError::semantic(
            message,
            span,
            doc.source.clone(),
            Arc::clone(&doc.source_text),
            doc.name.clone(),
            doc.start_line,
        ),
    }
}

/// Build the puzzle of a validated doc
fn lower(doc: &PuzzleDoc) -> FerryResult<Puzzle> {
    let (Some(boat), Some(start), Some(goal)) =
        (doc.boats.first(), doc.starts.first(), doc.goals.first())
    else {
        return Err(FerryError::Engine(format!(
            "Puzzle '{}' reached lowering without boat, start and goal",
            doc.name
        )));
    };

    let mut builder = Puzzle::builder(doc.name.clone())
        .capacity(boat.capacity)
        .empty_on_arrival(!boat.keep_passengers)
        .start(start.side)
        .goal(goal.side);
    if let Some(side) = boat.side {
        builder = builder.boat_at(side);
    }
    if let Some(description) = &doc.description {
        builder = builder.description(description.clone());
    }

    let mut threats: HashMap<&str, Vec<RelationId>> = HashMap::new();
    let relations = builder.relations();
    for threat in &doc.threats {
        let relation = lower_threat(&threat.threat, relations);
        threats.entry(threat.subject.as_str()).or_default().push(relation);
    }

    for passenger in &doc.passengers {
        let mut spec = PassengerSpec::new(passenger.species.clone())
            .count(passenger.count)
            .weight(passenger.weight);
        if passenger.navigator {
            spec = spec.navigator();
        }
        for relation in threats.get(passenger.species.as_str()).into_iter().flatten() {
            spec = spec.threatened_by(*relation);
        }
        builder = builder.passenger(spec);
    }

    builder.build()
}

fn lower_threat(threat: &ThreatExpr, relations: &mut RelationGraphBuilder) -> RelationId {
    match threat {
        ThreatExpr::Guarded {
            killer,
            protector: None,
        } => lower_expr(killer, relations),
        ThreatExpr::Guarded {
            killer,
            protector: Some(protector),
        } => {
            let killer = lower_expr(killer, relations);
            let protector = lower_expr(protector, relations);
            relations.guarded(killer, protector)
        }
        ThreatExpr::Count {
            killers,
            protectors,
        } => {
            let killers = lower_expr(killers, relations);
            let protectors = lower_expr(protectors, relations);
            relations.count(killers, protectors)
        }
    }
}

fn lower_expr(expr: &RelationExpr, relations: &mut RelationGraphBuilder) -> RelationId {
    match &expr.kind {
        RelationExprKind::Species(name) => relations.species(name.clone()),
        RelationExprKind::And(left, right) => {
            let left = lower_expr(left, relations);
            let right = lower_expr(right, relations);
            relations.all(left, right)
        }
        RelationExprKind::Or(left, right) => {
            let left = lower_expr(left, relations);
            let right = lower_expr(right, relations);
            relations.any(left, right)
        }
    }
}


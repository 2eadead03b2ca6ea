use crate::ast::Span;
use crate::error::FerryError;
use crate::parser::declarations::parse_species;
use crate::parser::{ParseContext, Rule};
use crate::resource_limits::ResourceLimits;
use crate::semantic::*;
use pest::iterators::Pair;

pub(crate) fn depth_exceeded(depth: usize, limits: &ResourceLimits) -> FerryError {
    depth_error(depth, limits.max_relation_depth)
}

fn depth_error(depth: usize, limit: usize) -> FerryError {
    FerryError::ResourceLimitExceeded {
        limit_name: "max_relation_depth".to_string(),
        limit_value: limit.to_string(),
        actual_value: depth.to_string(),
        suggestion: "Simplify the relation or split it into several threats".to_string(),
    }
}

fn check_depth(depth: usize, context: &ParseContext) -> Result<(), FerryError> {
    if depth > context.max_relation_depth {
        return Err(depth_error(depth, context.max_relation_depth));
    }
    Ok(())
}

pub(crate) fn parse_threat_declaration(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<ThreatDecl, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut subject = None;
    let mut threat = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::species => {
                let subject_span = Span::from_pest_span(inner_pair.as_span());
                subject = Some((parse_species(inner_pair)?, subject_span));
            }
            Rule::guarded_threat => threat = Some(parse_guarded_threat(inner_pair, context)?),
            Rule::count_threat => threat = Some(parse_count_threat(inner_pair, context)?),
            _ => {}
        }
    }

    let (subject, subject_span) = subject.ok_or_else(|| {
        FerryError::Engine("Grammar error: threat_declaration missing species".to_string())
    })?;
    let threat = threat.ok_or_else(|| {
        FerryError::Engine("Grammar error: threat_declaration missing threat".to_string())
    })?;

    Ok(ThreatDecl {
        subject,
        subject_span,
        threat,
        span,
    })
}

fn parse_guarded_threat(pair: Pair<Rule>, context: &ParseContext) -> Result<ThreatExpr, FerryError> {
    let mut killer = None;
    let mut protector = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::killer => killer = Some(parse_wrapped(inner_pair, context)?),
            Rule::protector => protector = Some(parse_wrapped(inner_pair, context)?),
            _ => {}
        }
    }

    let (killer, killer_depth) = killer.ok_or_else(|| {
        FerryError::Engine("Grammar error: guarded_threat missing killer".to_string())
    })?;
    let protector_depth = protector.as_ref().map_or(0, |(_, depth)| *depth);
    check_depth(1 + killer_depth.max(protector_depth), context)?;

    Ok(ThreatExpr::Guarded {
        killer,
        protector: protector.map(|(expr, _)| expr),
    })
}

fn parse_count_threat(pair: Pair<Rule>, context: &ParseContext) -> Result<ThreatExpr, FerryError> {
    let mut operands = Vec::new();
    for inner_pair in pair.into_inner() {
        if inner_pair.as_rule() == Rule::relation_expr {
            operands.push(parse_relation_expr(inner_pair, context)?);
        }
    }

    let mut operands = operands.into_iter();
    let (Some((killers, killers_depth)), Some((protectors, protectors_depth))) =
        (operands.next(), operands.next())
    else {
        return Err(FerryError::Engine(
            "Grammar error: count_threat needs two relation expressions".to_string(),
        ));
    };
    check_depth(1 + killers_depth.max(protectors_depth), context)?;

    Ok(ThreatExpr::Count {
        killers,
        protectors,
    })
}

/// `killer` and `protector` each hold a single relation_expr
fn parse_wrapped(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<(RelationExpr, usize), FerryError> {
    let expr = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::relation_expr)
        .ok_or_else(|| FerryError::Engine("Grammar error: missing relation_expr".to_string()))?;
    parse_relation_expr(expr, context)
}

/// Parse `a or b or ...`, returning the expression and its nesting depth
pub(crate) fn parse_relation_expr(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<(RelationExpr, usize), FerryError> {
    fold_operands(pair, context, RelationExprKind::Or)
}

fn parse_and_expr(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<(RelationExpr, usize), FerryError> {
    fold_operands(pair, context, RelationExprKind::And)
}

/// Combine the operands of one precedence level into a balanced tree
///
/// Leaf order is kept, so a flat chain of n operands nests about log2(n)
/// levels deep rather than n.
fn fold_operands(
    pair: Pair<Rule>,
    context: &ParseContext,
    combine: fn(Box<RelationExpr>, Box<RelationExpr>) -> RelationExprKind,
) -> Result<(RelationExpr, usize), FerryError> {
    let mut level: Vec<(RelationExpr, usize)> = Vec::new();

    for inner_pair in pair.into_inner() {
        let operand = match inner_pair.as_rule() {
            Rule::and_expr => parse_and_expr(inner_pair, context)?,
            Rule::relation_expr => parse_relation_expr(inner_pair, context)?,
            Rule::species => {
                let span = Span::from_pest_span(inner_pair.as_span());
                let name = parse_species(inner_pair)?;
                (RelationExpr::new(RelationExprKind::Species(name), span), 1)
            }
            _ => continue,
        };
        level.push(operand);
    }

    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut operands = level.into_iter();
        while let Some(left) = operands.next() {
            match operands.next() {
                Some(right) => next.push(join(left, right, combine, context)?),
                None => next.push(left),
            }
        }
        level = next;
    }

    level
        .pop()
        .ok_or_else(|| FerryError::Engine("Grammar error: empty relation expression".to_string()))
}

fn join(
    (left, left_depth): (RelationExpr, usize),
    (right, right_depth): (RelationExpr, usize),
    combine: fn(Box<RelationExpr>, Box<RelationExpr>) -> RelationExprKind,
    context: &ParseContext,
) -> Result<(RelationExpr, usize), FerryError> {
    let depth = 1 + left_depth.max(right_depth);
    check_depth(depth, context)?;
    let span = Span {
        start: left.span.start,
        end: right.span.end,
        line: left.span.line,
        col: left.span.col,
    };
    Ok((
        RelationExpr::new(combine(Box::new(left), Box::new(right)), span),
        depth,
    ))
}

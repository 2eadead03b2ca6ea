use crate::ast::Span;
use crate::error::FerryError;
use crate::location::Side;
use crate::parser::{ParseContext, Rule};
use crate::semantic::*;
use pest::iterators::Pair;

pub(crate) fn parse_boat_declaration(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<BoatDecl, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut capacity = None;
    let mut side = None;
    let mut keep_passengers = false;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::number => capacity = Some(parse_number(inner_pair, context)?),
            Rule::boat_side => {
                if let Some(side_pair) = inner_pair.into_inner().next() {
                    side = Some(parse_side(side_pair, context)?);
                }
            }
            Rule::keep_passengers => keep_passengers = true,
            _ => {}
        }
    }

    let capacity = capacity.ok_or_else(|| {
        FerryError::Engine("Grammar error: boat_declaration missing number".to_string())
    })?;

    Ok(BoatDecl {
        capacity,
        side,
        keep_passengers,
        span,
    })
}

pub(crate) fn parse_passenger_declaration(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<PassengerDecl, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut species = None;
    let mut count = 1usize;
    let mut weight = 1u32;
    let mut navigator = false;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::species => species = Some(parse_species(inner_pair)?),
            Rule::multiplicity => {
                if let Some(number) = inner_pair.into_inner().next() {
                    count = parse_number(number, context)? as usize;
                }
            }
            Rule::weight_clause => {
                if let Some(number) = inner_pair.into_inner().next() {
                    weight = parse_number(number, context)?;
                }
            }
            Rule::navigator => navigator = true,
            _ => {}
        }
    }

    let species = species.ok_or_else(|| {
        FerryError::Engine("Grammar error: passenger_declaration missing species".to_string())
    })?;

    Ok(PassengerDecl {
        species,
        count,
        weight,
        navigator,
        span,
    })
}

/// `start <side>` and `goal <side>` share a shape
pub(crate) fn parse_placement(
    pair: Pair<Rule>,
    context: &ParseContext,
) -> Result<PlacementDecl, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    let side_pair = pair.into_inner().find(|p| p.as_rule() == Rule::side).ok_or_else(|| {
        FerryError::Engine("Grammar error: placement missing side".to_string())
    })?;

    Ok(PlacementDecl {
        side: parse_side(side_pair, context)?,
        span,
    })
}

pub(crate) fn parse_species(pair: Pair<Rule>) -> Result<String, FerryError> {
    let inner = pair.into_inner().next().ok_or_else(|| {
        FerryError::Engine("Grammar error: species missing name".to_string())
    })?;

    match inner.as_rule() {
        Rule::bare_species => Ok(inner.as_str().to_string()),
        Rule::quoted_species => inner
            .into_inner()
            .next()
            .map(|text| text.as_str().to_string())
            .ok_or_else(|| {
                FerryError::Engine("Grammar error: quoted_species missing text".to_string())
            }),
        _ => Err(FerryError::Engine(format!(
            "Grammar error: unexpected {:?} in species",
            inner.as_rule()
        ))),
    }
}

fn parse_side(pair: Pair<Rule>, context: &ParseContext) -> Result<Side, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    pair.as_str()
        .parse::<Side>()
        .map_err(|e| context.error(e.to_string(), span))
}

fn parse_number(pair: Pair<Rule>, context: &ParseContext) -> Result<u32, FerryError> {
    let span = Span::from_pest_span(pair.as_span());
    pair.as_str().parse::<u32>().map_err(|_| {
        context.error(
            format!("Number '{}' is too large (maximum {})", pair.as_str(), u32::MAX),
            span,
        )
    })
}

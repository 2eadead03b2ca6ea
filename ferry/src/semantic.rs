//! Syntax tree of `.river` puzzle files
//!
//! The parser produces these declarations as written, duplicates and
//! undefined species included. The validator checks them and lowers a
//! [`PuzzleDoc`] into a [`crate::Puzzle`].

use crate::ast::Span;
use crate::location::Side;
use std::fmt;
use std::sync::Arc;

/// One `puzzle` block of a source file
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleDoc {
    pub name: String,
    pub name_span: Span,
    pub description: Option<String>,
    pub source: String,
    pub source_text: Arc<str>,
    pub start_line: usize,
    pub boats: Vec<BoatDecl>,
    pub passengers: Vec<PassengerDecl>,
    pub threats: Vec<ThreatDecl>,
    pub starts: Vec<PlacementDecl>,
    pub goals: Vec<PlacementDecl>,
}

impl PuzzleDoc {
    pub fn new(name: impl Into<String>, name_span: Span, source: impl Into<String>, source_text: Arc<str>) -> Self {
        Self {
            name: name.into(),
            name_span,
            description: None,
            source: source.into(),
            source_text,
            start_line: name_span.line,
            boats: Vec::new(),
            passengers: Vec::new(),
            threats: Vec::new(),
            starts: Vec::new(),
            goals: Vec::new(),
        }
    }
}

/// `boat capacity <n> [at <side>] [keep passengers]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoatDecl {
    pub capacity: u32,
    pub side: Option<Side>,
    pub keep_passengers: bool,
    pub span: Span,
}

/// `passenger <Species> [x<n>] [weight <n>] [navigator]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerDecl {
    pub species: String,
    pub count: usize,
    pub weight: u32,
    pub navigator: bool,
    pub span: Span,
}

/// `<Species> dies ...`
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatDecl {
    pub subject: String,
    pub subject_span: Span,
    pub threat: ThreatExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThreatExpr {
    /// `with <killer> [unless <protector>]`
    Guarded {
        killer: RelationExpr,
        protector: Option<RelationExpr>,
    },
    /// `when <killers> outnumbers <protectors>`
    Count {
        killers: RelationExpr,
        protectors: RelationExpr,
    },
}

/// A species expression with its location in the source
#[derive(Debug, Clone, PartialEq)]
pub struct RelationExpr {
    pub kind: RelationExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelationExprKind {
    Species(String),
    And(Box<RelationExpr>, Box<RelationExpr>),
    Or(Box<RelationExpr>, Box<RelationExpr>),
}

impl RelationExpr {
    pub fn new(kind: RelationExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Every species leaf with its span, left to right
    pub fn leaves(&self) -> Vec<(&str, Span)> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<(&'a str, Span)>) {
        match &self.kind {
            RelationExprKind::Species(name) => leaves.push((name.as_str(), self.span)),
            RelationExprKind::And(left, right) | RelationExprKind::Or(left, right) => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }
}

impl fmt::Display for RelationExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RelationExprKind::Species(name) => write!(f, "{}", name),
            RelationExprKind::And(left, right) => write!(f, "({} and {})", left, right),
            RelationExprKind::Or(left, right) => write!(f, "({} or {})", left, right),
        }
    }
}

/// `start <side>` or `goal <side>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementDecl {
    pub side: Side,
    pub span: Span,
}

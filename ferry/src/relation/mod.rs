//! Lethality relations
//!
//! A relation describes when a passenger is endangered by whoever shares its
//! location. Relations form a small expression language:
//!
//! - a species leaf matches every co-located passenger of that species,
//! - a guarded relation fires its killer unless its protector is present,
//! - a boolean relation combines two matches with `and` / `or`,
//! - a count relation fires when its killers strictly outnumber its protectors.
//!
//! Expressions live in a [`RelationGraph`]: an append-only arena built once per
//! puzzle and shared by every river derived from it. Nodes only ever refer to
//! nodes created before them, so the graph is acyclic by construction.

pub mod evaluate;
pub mod presence;

pub use presence::Presence;

use std::collections::HashMap;
use std::fmt;

/// Index of a node in a [`RelationGraph`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationId(usize);

impl RelationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "relation_{}", self.0)
    }
}

/// Operator of a boolean relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperator {
    And,
    Or,
}

impl BooleanOperator {
    pub fn keyword(&self) -> &'static str {
        match self {
            BooleanOperator::And => "and",
            BooleanOperator::Or => "or",
        }
    }
}

/// A node of the relation expression language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationNode {
    /// Matches co-located passengers by species name
    Species(String),
    /// Killer matches unless the protector matches anything
    Guarded {
        killer: RelationId,
        protector: RelationId,
    },
    /// Union of two matches, gated by the operator
    Boolean {
        left: RelationId,
        operator: BooleanOperator,
        right: RelationId,
    },
    /// Killers match only while they strictly outnumber the protectors
    Count {
        killers: RelationId,
        protectors: RelationId,
    },
}

/// Immutable arena of relation nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationGraph {
    nodes: Vec<RelationNode>,
}

impl RelationGraph {
    pub fn builder() -> RelationGraphBuilder {
        RelationGraphBuilder::default()
    }

    pub fn node(&self, id: RelationId) -> Option<&RelationNode> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, id: RelationId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nesting depth of the expression rooted at `id` (a leaf has depth 1)
    pub fn depth(&self, id: RelationId) -> usize {
        match self.node(id) {
            None => 0,
            Some(RelationNode::Species(_)) => 1,
            Some(RelationNode::Guarded { killer, protector }) => {
                1 + self.depth(*killer).max(self.depth(*protector))
            }
            Some(RelationNode::Boolean { left, right, .. }) => {
                1 + self.depth(*left).max(self.depth(*right))
            }
            Some(RelationNode::Count {
                killers,
                protectors,
            }) => 1 + self.depth(*killers).max(self.depth(*protectors)),
        }
    }

    /// Every species named by a leaf reachable from `id`, without duplicates
    pub fn species(&self, id: RelationId) -> Vec<&str> {
        let mut found = Vec::new();
        self.collect_species(id, &mut found);
        found
    }

    fn collect_species<'g>(&'g self, id: RelationId, found: &mut Vec<&'g str>) {
        match self.node(id) {
            None => {}
            Some(RelationNode::Species(name)) => {
                if !found.contains(&name.as_str()) {
                    found.push(name.as_str());
                }
            }
            Some(RelationNode::Guarded { killer, protector }) => {
                self.collect_species(*killer, found);
                self.collect_species(*protector, found);
            }
            Some(RelationNode::Boolean { left, right, .. }) => {
                self.collect_species(*left, found);
                self.collect_species(*right, found);
            }
            Some(RelationNode::Count {
                killers,
                protectors,
            }) => {
                self.collect_species(*killers, found);
                self.collect_species(*protectors, found);
            }
        }
    }

    /// Render the expression in puzzle-file syntax (without the subject)
    pub fn describe(&self, id: RelationId) -> String {
        match self.node(id) {
            None => format!("<unknown {}>", id),
            Some(RelationNode::Species(name)) => species_label(name),
            Some(RelationNode::Guarded { killer, protector }) => format!(
                "with {} unless {}",
                self.describe_operand(*killer),
                self.describe_operand(*protector)
            ),
            Some(RelationNode::Boolean {
                left,
                operator,
                right,
            }) => format!(
                "{} {} {}",
                self.describe_operand(*left),
                operator.keyword(),
                self.describe_operand(*right)
            ),
            Some(RelationNode::Count {
                killers,
                protectors,
            }) => format!(
                "when {} outnumbers {}",
                self.describe_operand(*killers),
                self.describe_operand(*protectors)
            ),
        }
    }

    /// Render `id` as the tail of a `<Species> dies ...` declaration
    pub fn describe_threat(&self, id: RelationId) -> String {
        match self.node(id) {
            Some(RelationNode::Guarded { .. }) | Some(RelationNode::Count { .. }) => {
                self.describe(id)
            }
            _ => format!("with {}", self.describe(id)),
        }
    }

    fn describe_operand(&self, id: RelationId) -> String {
        match self.node(id) {
            Some(RelationNode::Boolean { .. }) => format!("({})", self.describe(id)),
            Some(RelationNode::Species(_)) => self.describe(id),
            _ => format!("[{}]", self.describe(id)),
        }
    }
}

pub(crate) fn species_label(name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}

/// Builds a [`RelationGraph`], sharing structurally equal nodes
#[derive(Debug, Default)]
pub struct RelationGraphBuilder {
    nodes: Vec<RelationNode>,
    interned: HashMap<RelationNode, RelationId>,
}

impl RelationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, node: RelationNode) -> RelationId {
        if let Some(id) = self.interned.get(&node) {
            return *id;
        }
        let id = RelationId(self.nodes.len());
        self.nodes.push(node.clone());
        self.interned.insert(node, id);
        id
    }

    pub fn species(&mut self, name: impl Into<String>) -> RelationId {
        self.intern(RelationNode::Species(name.into()))
    }

    pub fn guarded(&mut self, killer: RelationId, protector: RelationId) -> RelationId {
        self.intern(RelationNode::Guarded { killer, protector })
    }

    pub fn boolean(
        &mut self,
        left: RelationId,
        operator: BooleanOperator,
        right: RelationId,
    ) -> RelationId {
        self.intern(RelationNode::Boolean {
            left,
            operator,
            right,
        })
    }

    pub fn all(&mut self, left: RelationId, right: RelationId) -> RelationId {
        self.boolean(left, BooleanOperator::And, right)
    }

    pub fn any(&mut self, left: RelationId, right: RelationId) -> RelationId {
        self.boolean(left, BooleanOperator::Or, right)
    }

    pub fn count(&mut self, killers: RelationId, protectors: RelationId) -> RelationId {
        self.intern(RelationNode::Count {
            killers,
            protectors,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn build(self) -> RelationGraph {
        RelationGraph { nodes: self.nodes }
    }
}

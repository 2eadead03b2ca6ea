//! Relation evaluation
//!
//! Recursively evaluates relation nodes against the passengers sharing a
//! location. Evaluation is pure: it never mutates the graph or the passengers.

use super::{BooleanOperator, Presence, RelationGraph, RelationId, RelationNode};
use crate::passenger::Passenger;

impl RelationGraph {
    /// Evaluate the relation rooted at `id` against `co_located`
    ///
    /// Ids that do not belong to this graph evaluate to `Absent`.
    pub fn evaluate<'a>(&self, id: RelationId, co_located: &[&'a Passenger]) -> Presence<'a> {
        let Some(node) = self.node(id) else {
            return Presence::Absent;
        };

        match node {
            RelationNode::Species(name) => Presence::from_matches(
                co_located
                    .iter()
                    .filter(|passenger| passenger.species == *name)
                    .copied()
                    .collect(),
            ),

            RelationNode::Guarded { killer, protector } => {
                if self.evaluate(*protector, co_located).is_present() {
                    return Presence::Absent;
                }
                self.evaluate(*killer, co_located)
            }

            RelationNode::Boolean {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(*left, co_located);
                let right = self.evaluate(*right, co_located);
                match operator {
                    BooleanOperator::And if left.is_present() && right.is_present() => {
                        left.union(right, co_located)
                    }
                    BooleanOperator::And => Presence::Absent,
                    BooleanOperator::Or => left.union(right, co_located),
                }
            }

            RelationNode::Count {
                killers,
                protectors,
            } => {
                let killers = self.evaluate(*killers, co_located);
                if !killers.is_present() {
                    return Presence::Absent;
                }
                let protectors = self.evaluate(*protectors, co_located);
                if !protectors.is_present() || killers.len() > protectors.len() {
                    killers
                } else {
                    Presence::Absent
                }
            }
        }
    }

    /// Fold `evaluate` over a passenger's relations, unioning whatever fires
    pub fn endangerment<'a>(
        &self,
        relations: &[RelationId],
        co_located: &[&'a Passenger],
    ) -> Presence<'a> {
        relations
            .iter()
            .fold(Presence::Absent, |acc, relation| {
                acc.union(self.evaluate(*relation, co_located), co_located)
            })
    }
}

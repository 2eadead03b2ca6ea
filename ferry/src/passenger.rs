//! Passengers and the puzzle manifest
//!
//! A passenger is identified by its species for every semantic purpose
//! (relations, fingerprints). The `PassengerId` only distinguishes instances
//! so that a location can hold two goats and the river can say which one moved.

use crate::relation::{Presence, RelationGraph, RelationId};
use crate::{FerryError, FerryResult};
use serde::Serialize;
use std::fmt;

/// Instance number of a passenger within its manifest
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PassengerId(pub usize);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub species: String,
    /// Cost against the boat's capacity
    pub weight: u32,
    pub navigator: bool,
    /// Relations this passenger is subject to, in declaration order
    pub relations: Vec<RelationId>,
}

impl Passenger {
    /// Present if any co-located passenger shares this species
    pub fn presence<'a>(&self, co_located: &[&'a Passenger]) -> Presence<'a> {
        Presence::from_matches(
            co_located
                .iter()
                .filter(|other| other.species == self.species)
                .copied()
                .collect(),
        )
    }

    /// Who endangers this passenger among `co_located`
    pub fn endangerment<'a>(
        &self,
        relations: &RelationGraph,
        co_located: &[&'a Passenger],
    ) -> Presence<'a> {
        relations.endangerment(&self.relations, co_located)
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.species)
    }
}

/// The immutable half of a puzzle: who takes part and what kills whom
///
/// Shared by `Arc` between every river of a puzzle; locations only store ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    passengers: Vec<Passenger>,
    relations: RelationGraph,
}

impl Manifest {
    /// Passenger ids must be dense and in order, and every relation must
    /// belong to `relations`.
    pub fn new(passengers: Vec<Passenger>, relations: RelationGraph) -> FerryResult<Self> {
        for (index, passenger) in passengers.iter().enumerate() {
            if passenger.id != PassengerId(index) {
                return Err(FerryError::Engine(format!(
                    "Passenger {} has id {} but sits at position {} of the manifest",
                    passenger.species, passenger.id, index
                )));
            }
            if let Some(unknown) = passenger
                .relations
                .iter()
                .find(|relation| !relations.contains(**relation))
            {
                return Err(FerryError::Engine(format!(
                    "Passenger {} refers to {} which is not in the relation graph",
                    passenger.species, unknown
                )));
            }
        }

        Ok(Self {
            passengers,
            relations,
        })
    }

    /// Look up a passenger by id; ids are minted by this manifest
    pub fn passenger(&self, id: PassengerId) -> &Passenger {
        &self.passengers[id.0]
    }

    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.0)
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn relations(&self) -> &RelationGraph {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.passengers.iter().map(|passenger| passenger.id)
    }

    /// Species label for diagnostics, tolerant of foreign ids
    pub fn species_of(&self, id: PassengerId) -> String {
        self.get(id)
            .map(|passenger| passenger.species.clone())
            .unwrap_or_else(|| format!("passenger {}", id))
    }

    /// Distinct species in declaration order with their instance counts
    pub fn species_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for passenger in &self.passengers {
            match counts
                .iter_mut()
                .find(|(species, _)| *species == passenger.species)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((passenger.species.as_str(), 1)),
            }
        }
        counts
    }
}

//! Shores and the boat
//!
//! Both are locations: a multiset of passengers that can receive newcomers,
//! hand them over, and check whether everybody there survives. The boat adds a
//! weight limit, a resting side, and the crossing itself.

use crate::passenger::{Manifest, Passenger, PassengerId};
use crate::relation::Presence;
use crate::{FerryError, FerryResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the two banks of the river
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = FerryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Side::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Side::Right)
        } else {
            Err(FerryError::Engine(format!(
                "Unknown side '{}', expected 'left' or 'right'",
                s
            )))
        }
    }
}

/// Common behavior of shores and the boat
pub trait Location {
    /// Name used in fingerprints and diagnostics
    fn name(&self) -> String;

    fn occupants(&self) -> &[PassengerId];

    fn occupants_mut(&mut self) -> &mut Vec<PassengerId>;

    /// Whether `passenger` may be added right now
    fn accepts(&self, _passenger: &Passenger, _manifest: &Manifest) -> bool {
        true
    }

    fn contains(&self, id: PassengerId) -> bool {
        self.occupants().contains(&id)
    }

    fn is_empty(&self) -> bool {
        self.occupants().is_empty()
    }

    /// Add a passenger; a refused or unknown passenger is silently left out
    fn add(&mut self, id: PassengerId, manifest: &Manifest) -> bool {
        let Some(passenger) = manifest.get(id) else {
            return false;
        };
        if !self.accepts(passenger, manifest) {
            return false;
        }
        self.occupants_mut().push(id);
        true
    }

    /// Hand `id` over to `destination`
    ///
    /// No-op if the passenger is not here. If the destination refuses the
    /// passenger, it stays where it was.
    fn move_to(
        &mut self,
        id: PassengerId,
        destination: &mut dyn Location,
        manifest: &Manifest,
    ) -> bool {
        let Some(position) = self.occupants().iter().position(|occupant| *occupant == id) else {
            return false;
        };
        if !destination.add(id, manifest) {
            return false;
        }
        self.occupants_mut().remove(position);
        true
    }

    /// Move every occupant to `destination`, keeping whoever it refuses
    fn empty_into(&mut self, destination: &mut dyn Location, manifest: &Manifest) {
        let leaving = std::mem::take(self.occupants_mut());
        for id in leaving {
            if !destination.add(id, manifest) {
                self.occupants_mut().push(id);
            }
        }
    }

    /// Total weight of the occupants, saturating at `u32::MAX`
    fn weight(&self, manifest: &Manifest) -> u32 {
        self.occupants()
            .iter()
            .filter_map(|id| manifest.get(*id))
            .fold(0u32, |total, passenger| total.saturating_add(passenger.weight))
    }

    /// Occupant species, sorted
    fn species<'m>(&self, manifest: &'m Manifest) -> Vec<&'m str> {
        let mut names: Vec<&str> = self
            .occupants()
            .iter()
            .filter_map(|id| manifest.get(*id))
            .map(|passenger| passenger.species.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Fail with `Death` for the first occupant endangered by the others
    fn check_survival(&self, manifest: &Manifest) -> FerryResult<()> {
        let co_located: Vec<&Passenger> = self
            .occupants()
            .iter()
            .filter_map(|id| manifest.get(*id))
            .collect();

        for passenger in &co_located {
            if let Presence::Present(predators) =
                passenger.endangerment(manifest.relations(), &co_located)
            {
                return Err(FerryError::Death {
                    location: self.name(),
                    victim: passenger.species.clone(),
                    predators: predators
                        .iter()
                        .map(|predator| predator.species.clone())
                        .collect(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shore {
    side: Side,
    occupants: Vec<PassengerId>,
}

impl Shore {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            occupants: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl Location for Shore {
    fn name(&self) -> String {
        self.side.name().to_string()
    }

    fn occupants(&self) -> &[PassengerId] {
        &self.occupants
    }

    fn occupants_mut(&mut self) -> &mut Vec<PassengerId> {
        &mut self.occupants
    }
}

/// Passengers disembark automatically unless told otherwise
pub const EMPTY_ON_ARRIVAL: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boat {
    max_weight: u32,
    empty_on_arrival: bool,
    side: Side,
    occupants: Vec<PassengerId>,
}

impl Boat {
    pub fn new(max_weight: u32, side: Side) -> Self {
        Self {
            max_weight,
            empty_on_arrival: EMPTY_ON_ARRIVAL,
            side,
            occupants: Vec::new(),
        }
    }

    pub fn with_empty_on_arrival(mut self, empty_on_arrival: bool) -> Self {
        self.empty_on_arrival = empty_on_arrival;
        self
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn empty_on_arrival(&self) -> bool {
        self.empty_on_arrival
    }

    /// The shore the boat currently rests on
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn has_navigator(&self, manifest: &Manifest) -> bool {
        self.occupants
            .iter()
            .filter_map(|id| manifest.get(*id))
            .any(|passenger| passenger.navigator)
    }

    /// Take the boat to `destination`
    ///
    /// Requires a navigator aboard. On arrival the passengers disembark onto
    /// `destination` when `empty_on_arrival` is set.
    pub fn cross(&mut self, destination: &mut Shore, manifest: &Manifest) -> FerryResult<()> {
        if !self.has_navigator(manifest) {
            return Err(FerryError::NoNavigator {
                location: self.name(),
            });
        }

        self.side = destination.side();

        if self.empty_on_arrival {
            self.empty_into(destination, manifest);
        }
        Ok(())
    }
}

impl Location for Boat {
    fn name(&self) -> String {
        "Boat".to_string()
    }

    fn occupants(&self) -> &[PassengerId] {
        &self.occupants
    }

    fn occupants_mut(&mut self) -> &mut Vec<PassengerId> {
        &mut self.occupants
    }

    fn accepts(&self, passenger: &Passenger, manifest: &Manifest) -> bool {
        self.weight(manifest)
            .checked_add(passenger.weight)
            .is_some_and(|total| total <= self.max_weight)
    }
}

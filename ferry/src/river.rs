use crate::location::{Boat, Location, Shore, Side};
use crate::passenger::{Manifest, PassengerId};
use crate::{FerryError, FerryResult};
use std::sync::Arc;

/// Where a passenger currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Shore(Side),
    Boat,
}

/// Two shores and a boat
///
/// Every passenger of the manifest sits in exactly one of the three locations
/// once placed. Cloning copies placement only; the manifest is shared.
#[derive(Debug, Clone)]
pub struct River {
    manifest: Arc<Manifest>,
    left: Shore,
    right: Shore,
    boat: Boat,
}

impl River {
    /// An empty river; passengers are added with [`River::place`]
    pub fn new(manifest: Arc<Manifest>, boat: Boat) -> Self {
        Self {
            manifest,
            left: Shore::new(Side::Left),
            right: Shore::new(Side::Right),
            boat,
        }
    }

    pub fn manifest(&self) -> &Arc<Manifest> {
        &self.manifest
    }

    pub fn left(&self) -> &Shore {
        &self.left
    }

    pub fn right(&self) -> &Shore {
        &self.right
    }

    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    pub fn shore(&self, side: Side) -> &Shore {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Put a passenger on a shore during setup
    pub fn place(&mut self, id: PassengerId, side: Side) -> FerryResult<()> {
        if self.manifest.get(id).is_none() {
            return Err(FerryError::Engine(format!(
                "Passenger {} is not part of this puzzle",
                id
            )));
        }
        if let Some(placement) = self.locate(id) {
            return Err(FerryError::Engine(format!(
                "{} {} is already placed ({:?})",
                self.manifest.species_of(id),
                id,
                placement
            )));
        }
        let manifest = Arc::clone(&self.manifest);
        match side {
            Side::Left => self.left.add(id, &manifest),
            Side::Right => self.right.add(id, &manifest),
        };
        Ok(())
    }

    /// Put every passenger not yet placed on `side`
    pub fn place_all(&mut self, side: Side) -> FerryResult<()> {
        let unplaced: Vec<PassengerId> = self
            .manifest
            .ids()
            .filter(|id| self.locate(*id).is_none())
            .collect();
        for id in unplaced {
            self.place(id, side)?;
        }
        Ok(())
    }

    /// Find which location holds `id`
    pub fn locate(&self, id: PassengerId) -> Option<Placement> {
        if self.left.contains(id) {
            Some(Placement::Shore(Side::Left))
        } else if self.right.contains(id) {
            Some(Placement::Shore(Side::Right))
        } else if self.boat.contains(id) {
            Some(Placement::Boat)
        } else {
            None
        }
    }

    /// Move a passenger from its shore onto the boat
    ///
    /// Fails with `NoBoat` when the passenger is on no shore or the boat rests
    /// on the other one. A passenger over the boat's remaining capacity is
    /// silently left on the shore.
    pub fn board(&mut self, id: PassengerId) -> FerryResult<()> {
        let side = match self.locate(id) {
            Some(Placement::Shore(side)) => side,
            _ => {
                return Err(FerryError::NoBoat {
                    passenger: self.manifest.species_of(id),
                })
            }
        };
        if self.boat.side() != side {
            return Err(FerryError::NoBoat {
                passenger: self.manifest.species_of(id),
            });
        }

        let shore = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        shore.move_to(id, &mut self.boat, &self.manifest);
        Ok(())
    }

    /// Take the boat to the other shore
    ///
    /// Survival is checked on all three locations before and after the boat
    /// moves. A failure leaves the river as it was at the point of failure.
    pub fn cross(&mut self) -> FerryResult<()> {
        self.check_survival()?;

        let destination = match self.boat.side().opposite() {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        self.boat.cross(destination, &self.manifest)?;

        self.check_survival()
    }

    /// Survival check of the left shore, the right shore and the boat
    pub fn check_survival(&self) -> FerryResult<()> {
        self.left.check_survival(&self.manifest)?;
        self.right.check_survival(&self.manifest)?;
        self.boat.check_survival(&self.manifest)
    }

    /// True when every passenger sits in exactly one location
    pub fn is_partitioned(&self) -> bool {
        let mut seen = vec![0usize; self.manifest.len()];
        for id in self
            .left
            .occupants()
            .iter()
            .chain(self.right.occupants())
            .chain(self.boat.occupants())
        {
            match seen.get_mut(id.0) {
                Some(count) => *count += 1,
                None => return false,
            }
        }
        seen.iter().all(|count| *count == 1)
    }

    /// Canonical, order-independent text form of this configuration
    ///
    /// `<left>|<right>|<boat>|<boat side>`, each location's species sorted and
    /// comma-joined, e.g. `Farmer,Goat|Wolf|Cabbage|Left`.
    pub fn fingerprint(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.left.species(&self.manifest).join(","),
            self.right.species(&self.manifest).join(","),
            self.boat.species(&self.manifest).join(","),
            self.boat.side()
        )
    }
}

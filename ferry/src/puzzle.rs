//! Puzzles: a manifest plus a start and a goal river
//!
//! [`PuzzleBuilder`] is the one way puzzles get made, whether by the catalog,
//! by the validator lowering a `.river` file, or by hand in tests.

use crate::location::{Boat, Location, Side};
use crate::passenger::{Manifest, Passenger, PassengerId};
use crate::relation::{species_label, RelationGraphBuilder, RelationId};
use crate::river::River;
use crate::{FerryError, FerryResult};
use std::fmt::Write;
use std::sync::Arc;

/// A solvable unit: where everybody starts and where they must end up
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: String,
    pub description: Option<String>,
    pub start: River,
    pub goal: River,
}

impl Puzzle {
    pub fn builder(name: impl Into<String>) -> PuzzleBuilder {
        PuzzleBuilder::new(name)
    }

    pub fn manifest(&self) -> &Arc<Manifest> {
        self.start.manifest()
    }

    /// The shore holding the passengers at the start
    pub fn start_side(&self) -> Side {
        if self.start.right().is_empty() {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Render the puzzle in `.river` syntax
    ///
    /// The output parses back into an equivalent puzzle as long as guarded and
    /// count relations only appear at the top of a threat.
    pub fn to_source(&self) -> String {
        let manifest = self.manifest();
        let boat = self.start.boat();
        let mut out = String::new();

        let _ = write!(out, "puzzle {}", self.name);
        if let Some(description) = &self.description {
            let _ = write!(out, " \"{}\"", description);
        }
        out.push('\n');

        let _ = write!(out, "boat capacity {} at {}", boat.max_weight(), boat.side().name().to_lowercase());
        if !boat.empty_on_arrival() {
            out.push_str(" keep passengers");
        }
        out.push('\n');

        for (species, count) in manifest.species_counts() {
            let Some(first) = manifest.passengers().iter().find(|p| p.species == species) else {
                continue;
            };
            let _ = write!(out, "passenger {}", species_label(species));
            if count > 1 {
                let _ = write!(out, " x{}", count);
            }
            if first.weight != 1 {
                let _ = write!(out, " weight {}", first.weight);
            }
            if first.navigator {
                out.push_str(" navigator");
            }
            out.push('\n');
        }

        for (species, _) in manifest.species_counts() {
            let Some(first) = manifest.passengers().iter().find(|p| p.species == species) else {
                continue;
            };
            for relation in &first.relations {
                let _ = writeln!(
                    out,
                    "{} dies {}",
                    species_label(species),
                    manifest.relations().describe_threat(*relation)
                );
            }
        }

        let _ = writeln!(out, "start {}", self.start_side().name().to_lowercase());
        let _ = writeln!(out, "goal {}", self.goal.boat().side().name().to_lowercase());
        out
    }
}

/// One species entry of a puzzle, possibly with several instances
#[derive(Debug, Clone)]
pub struct PassengerSpec {
    species: String,
    count: usize,
    weight: u32,
    navigator: bool,
    relations: Vec<RelationId>,
}

impl PassengerSpec {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            count: 1,
            weight: 1,
            navigator: false,
            relations: Vec::new(),
        }
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn navigator(mut self) -> Self {
        self.navigator = true;
        self
    }

    /// Attach a relation this species is subject to
    pub fn threatened_by(mut self, relation: RelationId) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

/// Builds a [`Puzzle`] from passenger specs and relations
#[derive(Debug)]
pub struct PuzzleBuilder {
    name: String,
    description: Option<String>,
    relations: RelationGraphBuilder,
    passengers: Vec<PassengerSpec>,
    capacity: u32,
    empty_on_arrival: bool,
    boat_side: Option<Side>,
    start: Side,
    goal: Side,
}

impl PuzzleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            relations: RelationGraphBuilder::new(),
            passengers: Vec::new(),
            capacity: 2,
            empty_on_arrival: crate::location::EMPTY_ON_ARRIVAL,
            boat_side: None,
            start: Side::Left,
            goal: Side::Right,
        }
    }

    /// Relation arena the passengers' threats are built in
    pub fn relations(&mut self) -> &mut RelationGraphBuilder {
        &mut self.relations
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn empty_on_arrival(mut self, empty_on_arrival: bool) -> Self {
        self.empty_on_arrival = empty_on_arrival;
        self
    }

    /// Where the boat starts; defaults to the start side
    pub fn boat_at(mut self, side: Side) -> Self {
        self.boat_side = Some(side);
        self
    }

    pub fn passenger(mut self, passenger: PassengerSpec) -> Self {
        self.passengers.push(passenger);
        self
    }

    /// Every passenger starts on `side`
    pub fn start(mut self, side: Side) -> Self {
        self.start = side;
        self
    }

    /// Every passenger and the boat must end on `side`
    pub fn goal(mut self, side: Side) -> Self {
        self.goal = side;
        self
    }

    pub fn build(self) -> FerryResult<Puzzle> {
        let mut passengers = Vec::new();
        for spec in &self.passengers {
            if spec.count == 0 {
                return Err(FerryError::Engine(format!(
                    "Passenger {} in puzzle '{}' has no instances",
                    spec.species, self.name
                )));
            }
            for _ in 0..spec.count {
                passengers.push(Passenger {
                    id: PassengerId(passengers.len()),
                    species: spec.species.clone(),
                    weight: spec.weight,
                    navigator: spec.navigator,
                    relations: spec.relations.clone(),
                });
            }
        }

        let manifest = Arc::new(Manifest::new(passengers, self.relations.build())?);
        let boat = Boat::new(self.capacity, self.boat_side.unwrap_or(self.start))
            .with_empty_on_arrival(self.empty_on_arrival);

        let mut start = River::new(Arc::clone(&manifest), boat);
        start.place_all(self.start)?;

        let goal_boat = Boat::new(self.capacity, self.goal).with_empty_on_arrival(self.empty_on_arrival);
        let mut goal = River::new(manifest, goal_boat);
        goal.place_all(self.goal)?;

        Ok(Puzzle {
            name: self.name,
            description: self.description,
            start,
            goal,
        })
    }
}

//! # Ferry Engine
//!
//! **Get everybody across, and nobody eaten**
//!
//! Ferry models river-crossing puzzles (a farmer with a wolf, a goat and a
//! cabbage, missionaries and cannibals, jealous couples) and finds a shortest
//! sequence of boat crossings that never leaves a passenger in danger.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ferry::{Engine, FerryResult};
//!
//! fn main() -> FerryResult<()> {
//!     let mut engine = Engine::new();
//!
//!     engine.add_puzzle_code(r#"
//!         puzzle farmer
//!         boat capacity 2
//!         passenger Farmer navigator
//!         passenger Wolf
//!         passenger Goat
//!         passenger Cabbage
//!         Goat dies with Wolf unless Farmer
//!         Cabbage dies with Goat unless Farmer
//!         start left
//!         goal right
//!     "#, "farmer.river")?;
//!
//!     let outcome = engine.solve("farmer")?;
//!     if let Some(solution) = outcome.solution() {
//!         println!("{} crossings", solution.crossings());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Passengers
//! A passenger has a species, a weight counted against the boat's capacity,
//! and may or may not be able to steer the boat. Passengers of the same
//! species are interchangeable.
//!
//! ### Relations
//! Relations say when a passenger dies: a species leaf, a killer held off by
//! a protector, `and`/`or` combinations, and "killers outnumber protectors".
//!
//! ### Search
//! The solver runs a breadth-first search over river configurations, keyed
//! by a canonical fingerprint such as `Farmer,Goat|Wolf|Cabbage|Left`.

pub mod ast;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod location;
pub mod parser;
pub mod passenger;
pub mod puzzle;
pub mod relation;
pub mod resource_limits;
pub mod river;
pub mod search;
pub mod semantic;
pub mod validator;

pub use ast::Span;
pub use engine::Engine;
pub use error::{ErrorDetails, FerryError};
pub use location::{Boat, Location, Shore, Side};
pub use parser::parse;
pub use passenger::{Manifest, Passenger, PassengerId};
pub use puzzle::{PassengerSpec, Puzzle, PuzzleBuilder};
pub use relation::{BooleanOperator, Presence, RelationGraph, RelationGraphBuilder, RelationId};
pub use resource_limits::ResourceLimits;
pub use river::{Placement, River};
pub use search::{Crossing, Outcome, SearchStats, Solution, Solver, Step};
pub use validator::Validator;

/// Result type for Ferry operations
pub type FerryResult<T> = Result<T, FerryError>;

#[cfg(test)]
mod tests;

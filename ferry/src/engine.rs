use crate::search::{Outcome, Solver};
use crate::{catalog, parse, FerryError, FerryResult, Puzzle, ResourceLimits, Validator};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The Ferry puzzle engine.
///
/// Holds a workspace of named puzzles loaded from the catalog or from
/// `.river` sources, and solves them on request.
pub struct Engine {
    puzzles: HashMap<String, Puzzle>,
    validator: Validator,
    solver: Solver,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_limits(ResourceLimits::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            puzzles: HashMap::new(),
            validator: Validator,
            solver: Solver::with_limits(limits.clone()),
            limits,
        }
    }

    /// Create an engine preloaded with every built-in puzzle
    pub fn with_catalog() -> FerryResult<Self> {
        let mut engine = Self::new();
        engine.add_catalog()?;
        Ok(engine)
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Add every built-in puzzle to the workspace
    pub fn add_catalog(&mut self) -> FerryResult<()> {
        for puzzle in catalog::all()? {
            self.add_puzzle(puzzle)?;
        }
        Ok(())
    }

    /// Parse, validate and add every puzzle of a `.river` source
    ///
    /// Nothing is added when any puzzle of the source is invalid. Returns the
    /// names of the added puzzles in source order.
    pub fn add_puzzle_code(&mut self, code: &str, source: &str) -> FerryResult<Vec<String>> {
        let docs = parse(code, source, &self.limits)?;

        let existing: HashSet<String> = self.puzzles.keys().cloned().collect();
        let puzzles = self.validator.validate_all(docs, &existing)?;

        let names: Vec<String> = puzzles.iter().map(|puzzle| puzzle.name.clone()).collect();
        for puzzle in puzzles {
            debug!(puzzle = %puzzle.name, source, "Loaded puzzle");
            self.puzzles.insert(puzzle.name.clone(), puzzle);
        }
        Ok(names)
    }

    /// Add an already built puzzle; its name must be free
    pub fn add_puzzle(&mut self, puzzle: Puzzle) -> FerryResult<()> {
        if self.puzzles.contains_key(&puzzle.name) {
            return Err(FerryError::Engine(format!(
                "Puzzle '{}' is already defined in the workspace",
                puzzle.name
            )));
        }
        self.puzzles.insert(puzzle.name.clone(), puzzle);
        Ok(())
    }

    pub fn remove_puzzle(&mut self, name: &str) -> Option<Puzzle> {
        self.puzzles.remove(name)
    }

    /// Names of every puzzle in the workspace, sorted
    pub fn list_puzzles(&self) -> Vec<String> {
        let mut names: Vec<String> = self.puzzles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get_puzzle(&self, name: &str) -> Option<&Puzzle> {
        self.puzzles.get(name)
    }

    /// Find a minimal crossing sequence for a workspace puzzle
    pub fn solve(&self, name: &str) -> FerryResult<Outcome> {
        let puzzle = self.puzzles.get(name).ok_or_else(|| {
            FerryError::Engine(format!(
                "Puzzle '{}' not found. Available: {}",
                name,
                self.list_puzzles().join(", ")
            ))
        })?;
        self.solver.solve(&puzzle.start, &puzzle.goal)
    }
}

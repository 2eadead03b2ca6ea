//! Breadth-first search over river configurations
//!
//! Search runs in a loop:
//! 1. Pop the oldest state off the frontier
//! 2. Stop if it matches the goal fingerprint
//! 3. Otherwise try every feasible boat load from the boat's shore
//! 4. Keep the children that cross without a death or a missing navigator
//!
//! Every crossing costs one, so the first goal state popped is on a shortest
//! path.

pub mod combinations;
pub mod outcome;
pub mod state;
pub mod timeout;

pub use combinations::feasible_loads;
pub use outcome::{Crossing, Outcome, SearchStats, Solution, Step};
pub use state::{RiverState, StateArena, StateId};

use crate::location::Location;
use crate::passenger::{Passenger, PassengerId};
use crate::river::River;
use crate::{FerryError, FerryResult, ResourceLimits};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use timeout::TimeoutTracker;
use tracing::{debug, info, trace};

/// Finds a minimal sequence of crossings between two rivers
#[derive(Debug, Clone, Default)]
pub struct Solver {
    limits: ResourceLimits,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Search from `start` until a state with the fingerprint of `goal`
    ///
    /// Both rivers must share a manifest. Returns `NoSolution` when the
    /// reachable states are exhausted, and an error only for broken
    /// invariants or exhausted resource limits.
    pub fn solve(&self, start: &River, goal: &River) -> FerryResult<Outcome> {
        if !Arc::ptr_eq(start.manifest(), goal.manifest()) && start.manifest() != goal.manifest()
        {
            return Err(FerryError::Engine(
                "Start and goal rivers describe different passengers".to_string(),
            ));
        }

        let timeout_tracker = TimeoutTracker::new();
        let goal_fingerprint = goal.fingerprint();
        let mut stats = SearchStats::default();

        let mut arena = StateArena::new();
        let root = RiverState::root(start.clone());
        let root_fingerprint = root.fingerprint();
        let mut frontier = VecDeque::new();
        frontier.push_back((arena.push(root), root_fingerprint));
        let mut visited: HashSet<String> = HashSet::new();

        debug!(start = %start.fingerprint(), goal = %goal_fingerprint, "Starting search");

        while let Some((state_id, fingerprint)) = frontier.pop_front() {
            timeout_tracker.check_timeout(&self.limits)?;

            if fingerprint == goal_fingerprint {
                stats.elapsed_ms = timeout_tracker.elapsed_ms();
                info!(
                    expanded = stats.expanded,
                    generated = stats.generated,
                    "Solution found"
                );
                let steps = build_steps(&arena, state_id);
                return Ok(Outcome::Solved(Solution { steps, stats }));
            }

            if !visited.insert(fingerprint) {
                stats.duplicates += 1;
                continue;
            }
            if visited.len() > self.limits.max_visited_states {
                return Err(FerryError::ResourceLimitExceeded {
                    limit_name: "max_visited_states".to_string(),
                    limit_value: self.limits.max_visited_states.to_string(),
                    actual_value: visited.len().to_string(),
                    suggestion: "Reduce the number of passengers or raise the visited state limit"
                        .to_string(),
                });
            }

            stats.expanded += 1;
            self.expand(state_id, &mut arena, &mut frontier, &visited, &mut stats)?;
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        stats.elapsed_ms = timeout_tracker.elapsed_ms();
        info!(expanded = stats.expanded, "No solution");
        Ok(Outcome::NoSolution { stats })
    }

    fn expand(
        &self,
        state_id: StateId,
        arena: &mut StateArena,
        frontier: &mut VecDeque<(StateId, String)>,
        visited: &HashSet<String>,
        stats: &mut SearchStats,
    ) -> FerryResult<()> {
        let (manifest, from, waiting, capacity) = {
            let river = arena
                .get(state_id)
                .ok_or_else(|| FerryError::Engine(format!("State {} vanished", state_id.index())))?
                .river();
            let boat = river.boat();
            (
                Arc::clone(river.manifest()),
                boat.side(),
                waiting_passengers(river),
                boat.max_weight()
                    .saturating_sub(boat.weight(river.manifest())),
            )
        };

        let passengers: Vec<&Passenger> = waiting
            .iter()
            .filter_map(|id| manifest.get(*id))
            .collect();

        for load in feasible_loads(&passengers, capacity) {
            let mut child = arena.create_child(state_id)?;
            let river = child.river_mut();
            for passenger in &load {
                river.board(passenger.id).map_err(|err| {
                    FerryError::Engine(format!("Boarding a feasible load failed: {}", err))
                })?;
            }

            match river.cross() {
                Ok(()) => {}
                Err(FerryError::NoNavigator { .. }) => {
                    stats.pruned_no_navigator += 1;
                    continue;
                }
                Err(err @ FerryError::Death { .. }) => {
                    trace!(load = ?species(&load), reason = %err, "Pruned");
                    stats.pruned_death += 1;
                    continue;
                }
                Err(err) => return Err(err),
            }

            let fingerprint = child.fingerprint();
            if visited.contains(&fingerprint) {
                stats.duplicates += 1;
                continue;
            }

            child.set_crossing(Crossing {
                from,
                to: from.opposite(),
                passengers: species(&load),
            });
            trace!(state = %fingerprint, "Enqueued");
            let child_id = arena.push(child);
            frontier.push_back((child_id, fingerprint));
            stats.generated += 1;
        }
        Ok(())
    }
}

fn species(load: &[&Passenger]) -> Vec<String> {
    let mut names: Vec<String> = load.iter().map(|passenger| passenger.species.clone()).collect();
    names.sort();
    names
}

fn build_steps(arena: &StateArena, goal: StateId) -> Vec<Step> {
    arena
        .path(goal)
        .into_iter()
        .enumerate()
        .map(|(index, state)| Step {
            index,
            fingerprint: state.fingerprint(),
            crossing: state.crossing().cloned(),
            river: state.river().clone(),
        })
        .collect()
}

/// Ids of every passenger on the shore the boat rests on
pub fn waiting_passengers(river: &River) -> Vec<PassengerId> {
    river.shore(river.boat().side()).occupants().to_vec()
}

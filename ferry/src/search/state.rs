use super::outcome::Crossing;
use crate::river::River;
use crate::{FerryError, FerryResult};

/// Position of a state in a [`StateArena`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search node: a river snapshot and the state it was reached from
#[derive(Debug, Clone)]
pub struct RiverState {
    river: River,
    parent: Option<StateId>,
    crossing: Option<Crossing>,
}

impl RiverState {
    /// The initial state, with no parent
    pub fn root(river: River) -> Self {
        Self {
            river,
            parent: None,
            crossing: None,
        }
    }

    pub fn river(&self) -> &River {
        &self.river
    }

    pub fn river_mut(&mut self) -> &mut River {
        &mut self.river
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// The crossing that produced this state from its parent
    pub fn crossing(&self) -> Option<&Crossing> {
        self.crossing.as_ref()
    }

    pub fn set_crossing(&mut self, crossing: Crossing) {
        self.crossing = Some(crossing);
    }

    pub fn fingerprint(&self) -> String {
        self.river.fingerprint()
    }
}

/// Flat store of search states; parents are indices into it
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<RiverState>,
}

impl StateArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: RiverState) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub fn get(&self, id: StateId) -> Option<&RiverState> {
        self.states.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Clone the river of `parent` into a new state pointing back at it
    ///
    /// The child is not stored until [`StateArena::push`] is called, so a
    /// move that turns out invalid costs nothing but the clone.
    pub fn create_child(&self, parent: StateId) -> FerryResult<RiverState> {
        let state = self.get(parent).ok_or_else(|| {
            FerryError::Engine(format!("State {} not found in arena", parent.0))
        })?;
        Ok(RiverState {
            river: state.river.clone(),
            parent: Some(parent),
            crossing: None,
        })
    }

    /// States from the root down to `id`, inclusive
    pub fn path(&self, id: StateId) -> Vec<&RiverState> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(state) = current {
            path.push(state);
            current = state.parent.and_then(|parent| self.get(parent));
        }
        path.reverse();
        path
    }
}

use crate::passenger::Passenger;

/// Result of evaluating a relation against a set of co-located passengers
///
/// Doubles as a boolean (did the relation fire?) and as an attribution (who is
/// responsible), which is what ends up in a `Death` error.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence<'a> {
    /// The relation does not fire
    Absent,
    /// The relation fires; never holds an empty list
    Present(Vec<&'a Passenger>),
}

impl<'a> Presence<'a> {
    /// `Absent` for an empty match, `Present` otherwise
    pub fn from_matches(matches: Vec<&'a Passenger>) -> Self {
        if matches.is_empty() {
            Presence::Absent
        } else {
            Presence::Present(matches)
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }

    pub fn passengers(&self) -> &[&'a Passenger] {
        match self {
            Presence::Absent => &[],
            Presence::Present(passengers) => passengers,
        }
    }

    pub fn len(&self) -> usize {
        self.passengers().len()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Species names of the implicated passengers, in match order
    pub fn species(&self) -> Vec<String> {
        self.passengers()
            .iter()
            .map(|passenger| passenger.species.clone())
            .collect()
    }

    /// Every passenger implicated by either side, once each, in co-location order
    pub fn union(self, other: Presence<'a>, co_located: &[&'a Passenger]) -> Presence<'a> {
        match (self, other) {
            (Presence::Absent, other) => other,
            (this, Presence::Absent) => this,
            (Presence::Present(left), Presence::Present(right)) => {
                let merged = co_located
                    .iter()
                    .filter(|candidate| {
                        left.iter().any(|p| p.id == candidate.id)
                            || right.iter().any(|p| p.id == candidate.id)
                    })
                    .copied()
                    .collect();
                Presence::from_matches(merged)
            }
        }
    }
}

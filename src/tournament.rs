use std::collections::HashMap;

/// Points awarded for each outcome of a fixture. "Other" covers draws,
/// washouts and anything else that is neither a win nor a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRules {
    pub win: i32,
    pub loss: i32,
    pub other: i32,
}

impl Default for PointsRules {
    fn default() -> Self {
        Self {
            win: 2,
            loss: 0,
            other: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    pub name: String,
    pub tid: usize,
    pub points: i32,
    // The performance of this team cannot affect the favourite's position.
    pub inconsequential: bool,
}

/// Owns every team for the lifetime of a run. Team ids are dense indices in
/// first-seen order, so they double as positions into the backing vector.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    ids: HashMap<String, usize>,
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a name to a team id, registering the team with zero points if
    /// it has not been seen before.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&tid) = self.ids.get(name) {
            return tid;
        }
        let tid = self.teams.len();
        self.ids.insert(name.to_string(), tid);
        self.teams.push(Team {
            name: name.to_string(),
            tid,
            points: 0,
            inconsequential: false,
        });
        tid
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn team(&self, tid: usize) -> &Team {
        &self.teams[tid]
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn set_points(&mut self, tid: usize, points: i32) {
        self.teams[tid].points = points;
    }

    pub fn add_points(&mut self, tid: usize, delta: i32) {
        self.teams[tid].points += delta;
    }
}

/// An unresolved fixture between two registered teams. `a_won` is only
/// meaningful while the search holds this fixture simulated; the reporter
/// reads it to list the winner first.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub a: usize,
    pub b: usize,
    pub a_won: bool,
    pub inconsequential: bool,
}

impl Fixture {
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "fixture must pair two distinct teams");
        Self {
            a,
            b,
            a_won: true,
            inconsequential: false,
        }
    }

    pub fn involves(&self, tid: usize) -> bool {
        self.a == tid || self.b == tid
    }

    pub fn winner(&self) -> usize {
        if self.a_won { self.a } else { self.b }
    }

    pub fn loser(&self) -> usize {
        if self.a_won { self.b } else { self.a }
    }
}

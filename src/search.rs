use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::{compute_bounds, mark_inconsequential};
use crate::report::{LeafReport, build_report};
use crate::tournament::{Fixture, PointsRules, TeamRegistry};

/// Depth-first enumeration of every way the remaining fixtures can resolve,
/// pruned down to the fixtures that can actually move the favourite.
///
/// The favourite is assumed to win every fixture it plays, so those fixtures
/// contribute a single branch. Fixtures between two teams that provably
/// cannot overlap the favourite's final total contribute a single arbitrary
/// branch. Only the rest branch both ways.
pub struct ProjectionSearch<'a> {
    registry: &'a mut TeamRegistry,
    fixtures: &'a mut Vec<Fixture>,
    rules: PointsRules,
    favourite: usize,
    rng: StdRng,
}

impl<'a> ProjectionSearch<'a> {
    /// Seeding the RNG keeps the arbitrary winner picked for inconsequential
    /// fixtures reproducible across runs; the pick never changes the
    /// favourite's rank, only how the fixture line is printed.
    pub fn new(
        registry: &'a mut TeamRegistry,
        fixtures: &'a mut Vec<Fixture>,
        rules: PointsRules,
        favourite: usize,
        seed: u64,
    ) -> Self {
        Self {
            registry,
            fixtures,
            rules,
            favourite,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Classify the fixtures, then walk every consequential assignment,
    /// handing a standings report to `sink` at each complete one.
    pub fn run<F: FnMut(LeafReport)>(&mut self, sink: &mut F) {
        let bounds = compute_bounds(self.registry, self.fixtures, self.rules, self.favourite);
        mark_inconsequential(self.registry, self.fixtures, &bounds, self.favourite);
        self.walk(0, sink);
    }

    fn walk<F: FnMut(LeafReport)>(&mut self, idx: usize, sink: &mut F) {
        if idx >= self.fixtures.len() {
            sink(build_report(self.registry, self.fixtures, self.favourite));
            return;
        }

        let fixture = &self.fixtures[idx];
        let (a, b, inconsequential) = (fixture.a, fixture.b, fixture.inconsequential);
        if inconsequential {
            let a_won = self.rng.gen_bool(0.5);
            self.play(idx, a_won, sink);
            return;
        }

        // The favourite never loses, so the branch where its opponent wins
        // is skipped; between two consequential outsiders, both outcomes
        // produce distinct continuations.
        if a != self.favourite {
            self.play(idx, false, sink);
        }
        if b != self.favourite {
            self.play(idx, true, sink);
        }
    }

    /// Simulate one outcome, recurse, then restore the points exactly.
    fn play<F: FnMut(LeafReport)>(&mut self, idx: usize, a_won: bool, sink: &mut F) {
        self.fixtures[idx].a_won = a_won;
        let winner = self.fixtures[idx].winner();
        let loser = self.fixtures[idx].loser();
        self.registry.add_points(winner, self.rules.win);
        self.registry.add_points(loser, self.rules.loss);
        self.walk(idx + 1, sink);
        self.registry.add_points(loser, -self.rules.loss);
        self.registry.add_points(winner, -self.rules.win);
    }
}

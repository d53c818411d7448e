use crate::tournament::{Fixture, PointsRules, TeamRegistry};

/// Feasible final-points interval for one team, assuming the favourite wins
/// every remaining fixture it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBounds {
    pub min: i32,
    pub max: i32,
}

/// Compute the minimum and maximum points each team can finish with.
///
/// The favourite's outcome is fixed, so its interval collapses to a point.
/// Every other participant is credited with the loss points at the low end
/// and the win points at the high end of each of its fixtures. Two teams
/// sharing a fixture cannot both realise their maximum, so these intervals
/// are loose, but never too narrow: a team whose interval misses the
/// favourite's really can never catch it.
pub fn compute_bounds(
    registry: &TeamRegistry,
    fixtures: &[Fixture],
    rules: PointsRules,
    favourite: usize,
) -> Vec<PointsBounds> {
    let mut bounds: Vec<PointsBounds> = registry
        .teams()
        .iter()
        .map(|t| PointsBounds {
            min: t.points,
            max: t.points,
        })
        .collect();

    for fixture in fixtures {
        if fixture.involves(favourite) {
            bounds[favourite].min += rules.win;
            bounds[favourite].max += rules.win;
        }
        if fixture.a != favourite {
            bounds[fixture.a].min += rules.loss;
            bounds[fixture.a].max += rules.win;
        }
        if fixture.b != favourite {
            bounds[fixture.b].min += rules.loss;
            bounds[fixture.b].max += rules.win;
        }
    }

    bounds
}

/// Flag every team whose interval cannot overlap the favourite's, and every
/// fixture played between two such teams. Neither can change whether the
/// favourite finishes above or below them, so the search never needs to
/// branch on them.
pub fn mark_inconsequential(
    registry: &mut TeamRegistry,
    fixtures: &mut [Fixture],
    bounds: &[PointsBounds],
    favourite: usize,
) {
    let fav = bounds[favourite];
    for team in registry.teams_mut() {
        let b = bounds[team.tid];
        team.inconsequential = b.max < fav.min || b.min > fav.max;
    }
    for fixture in fixtures.iter_mut() {
        fixture.inconsequential = registry.team(fixture.a).inconsequential
            && registry.team(fixture.b).inconsequential;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_points(points: &[(&str, i32)]) -> TeamRegistry {
        let mut reg = TeamRegistry::new();
        for (name, pts) in points {
            let tid = reg.register(name);
            reg.set_points(tid, *pts);
        }
        reg
    }

    #[test]
    fn bounds_bracket_current_points() {
        let reg = registry_with_points(&[("A", 10), ("B", 8), ("F", 8), ("C", 0)]);
        let fixtures = vec![Fixture::new(2, 1), Fixture::new(0, 3), Fixture::new(1, 3)];
        let bounds = compute_bounds(&reg, &fixtures, PointsRules::default(), 2);
        for team in reg.teams() {
            let b = bounds[team.tid];
            assert!(b.min <= team.points, "min too high for {}", team.name);
            assert!(b.max >= team.points, "max too low for {}", team.name);
            assert!(b.min <= b.max);
        }
    }

    #[test]
    fn favourite_interval_is_a_point() {
        let reg = registry_with_points(&[("F", 4), ("B", 4), ("C", 4)]);
        let fixtures = vec![Fixture::new(0, 1), Fixture::new(0, 2), Fixture::new(1, 2)];
        let bounds = compute_bounds(&reg, &fixtures, PointsRules::default(), 0);
        // Two favourite fixtures, two points each.
        assert_eq!(bounds[0], PointsBounds { min: 8, max: 8 });
        // B: loses to F (0..0), open against C (0..2).
        assert_eq!(bounds[1], PointsBounds { min: 4, max: 8 });
    }

    #[test]
    fn distant_teams_and_their_fixtures_are_inconsequential() {
        // F ends on exactly 10; A is already out of reach on 20, C can never
        // get past 4, B straddles the favourite's total.
        let mut reg = registry_with_points(&[("F", 8), ("A", 20), ("B", 9), ("C", 2)]);
        let mut fixtures = vec![Fixture::new(0, 2), Fixture::new(1, 3), Fixture::new(1, 2)];
        let bounds = compute_bounds(&reg, &fixtures, PointsRules::default(), 0);
        mark_inconsequential(&mut reg, &mut fixtures, &bounds, 0);

        assert!(!reg.team(0).inconsequential);
        assert!(reg.team(1).inconsequential);
        assert!(!reg.team(2).inconsequential);
        assert!(reg.team(3).inconsequential);

        assert!(!fixtures[0].inconsequential);
        assert!(fixtures[1].inconsequential);
        assert!(!fixtures[2].inconsequential);
    }

    #[test]
    fn relevance_is_sound_under_exhaustive_outcomes() {
        // Brute-force every outcome of three non-favourite fixtures and check
        // no inconsequential team ever lands inside the favourite's interval.
        let mut reg = registry_with_points(&[("F", 10), ("A", 0), ("B", 9), ("C", 1)]);
        let mut fixtures = vec![Fixture::new(1, 2), Fixture::new(2, 3), Fixture::new(1, 3)];
        let rules = PointsRules::default();
        let bounds = compute_bounds(&reg, &fixtures, rules, 0);
        mark_inconsequential(&mut reg, &mut fixtures, &bounds, 0);
        let fav = bounds[0];

        for mask in 0u32..1 << fixtures.len() {
            let mut points: Vec<i32> = reg.teams().iter().map(|t| t.points).collect();
            for (i, f) in fixtures.iter().enumerate() {
                let (w, l) = if mask & (1 << i) != 0 {
                    (f.a, f.b)
                } else {
                    (f.b, f.a)
                };
                points[w] += rules.win;
                points[l] += rules.loss;
            }
            for team in reg.teams() {
                if team.inconsequential {
                    let p = points[team.tid];
                    assert!(
                        p < fav.min || p > fav.max,
                        "{} reached {} inside [{}, {}] under mask {:b}",
                        team.name,
                        p,
                        fav.min,
                        fav.max,
                        mask
                    );
                }
            }
        }
    }
}

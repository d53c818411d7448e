use serde::{Deserialize, Serialize};

use crate::tournament::{Fixture, TeamRegistry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingRow {
    pub team: String,
    pub points: i32,
}

/// One upcoming fixture as resolved at this leaf, winner listed first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSummary {
    pub winner: String,
    pub loser: String,
    pub inconsequential: bool,
}

/// Snapshot of one complete assignment of fixture outcomes: the favourite's
/// rank, the sorted table, and the fixture list that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafReport {
    pub rank: usize,
    pub standings: Vec<StandingRow>,
    pub fixtures: Vec<FixtureSummary>,
}

/// Build a report from the current simulated state. Works on a sorted copy;
/// the live registry is left untouched so the search can keep unwinding.
pub fn build_report(
    registry: &TeamRegistry,
    fixtures: &[Fixture],
    favourite: usize,
) -> LeafReport {
    let mut order: Vec<(usize, i32)> = registry.teams().iter().map(|t| (t.tid, t.points)).collect();
    // Descending points; on equal points the favourite takes the higher spot.
    order.sort_by(|x, y| {
        y.1.cmp(&x.1).then_with(|| {
            if x.0 == favourite {
                std::cmp::Ordering::Less
            } else if y.0 == favourite {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
    });

    let rank = order
        .iter()
        .position(|&(tid, _)| tid == favourite)
        .map(|pos| pos + 1)
        .unwrap_or(0);

    let standings = order
        .iter()
        .map(|&(tid, points)| StandingRow {
            team: registry.team(tid).name.clone(),
            points,
        })
        .collect();

    let fixtures = fixtures
        .iter()
        .map(|f| FixtureSummary {
            winner: registry.team(f.winner()).name.clone(),
            loser: registry.team(f.loser()).name.clone(),
            inconsequential: f.inconsequential,
        })
        .collect();

    LeafReport {
        rank,
        standings,
        fixtures,
    }
}

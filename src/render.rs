use std::env;
use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::report::LeafReport;

/// Whether to strip colours and box-drawing glyphs from the output.
/// The CLI flag wins; otherwise honour the usual environment switches.
pub fn raw_output_requested(cli_flag: bool) -> bool {
    if cli_flag {
        return true;
    }
    let env_set = |key: &str| env::var(key).map(|v| !v.is_empty()).unwrap_or(false);
    env_set("NO_COLOR") || env_set("RAW_OUTPUT")
}

/// Render one leaf report as the tree-shaped block the tool prints:
/// the favourite's rank, the sorted table, then the resolved fixture list
/// with inconsequential fixtures dimmed.
pub fn render_report(report: &LeafReport, raw: bool) -> String {
    let (tee, bar, elbow, dash) = if raw {
        (" ", " ", " ", " ")
    } else {
        ("├", "│", "└", "─")
    };
    let section = |name: &str| {
        if raw {
            format!("[{name}]")
        } else {
            format!("[{}]", name.green())
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", report.rank);
    let _ = writeln!(out, "{tee}{dash}{}", section("table"));
    for row in &report.standings {
        let _ = writeln!(out, "{bar} {}:{}", row.team, row.points);
    }
    let _ = writeln!(out, "{elbow}{dash}{}", section("upcoming"));
    for fixture in &report.fixtures {
        let line = format!("{},{}", fixture.winner, fixture.loser);
        if fixture.inconsequential && !raw {
            let _ = writeln!(out, "  {}", line.dark_grey());
        } else {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

pub fn print_report(report: &LeafReport, raw: bool) {
    print!("{}", render_report(report, raw));
}

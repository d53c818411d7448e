use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use ptable_projector::input::parse_projection;
use ptable_projector::search::ProjectionSearch;

// Ten mid-table rivals within reach of the favourite, so most of the
// round-robin tail actually branches, plus a pair of runaway leaders whose
// fixtures collapse to a single branch.
fn sample_input() -> String {
    let mut text = String::from("[team]\nT0\n\n[table]\n");
    for i in 0..10 {
        text.push_str(&format!("T{i} {}\n", 10 + (i % 3)));
    }
    text.push_str("L0 90\nL1 91\n");
    text.push_str("\n[upcoming]\n");
    text.push_str("T0,T1\nT0,T2\n");
    for i in 1..9 {
        text.push_str(&format!("T{},T{}\n", i, i + 1));
    }
    text.push_str("L0,L1\n");
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_input();
    c.bench_function("parse_projection", |b| {
        b.iter(|| {
            let projection = parse_projection(black_box(&text), "bench", false).unwrap();
            black_box(projection.fixtures.len());
        })
    });
}

fn bench_solve(c: &mut Criterion) {
    let text = sample_input();
    c.bench_function("projection_search", |b| {
        b.iter(|| {
            let mut projection = parse_projection(&text, "bench", false).unwrap();
            let mut search = ProjectionSearch::new(
                &mut projection.registry,
                &mut projection.fixtures,
                projection.rules,
                projection.favourite,
                0,
            );
            let mut leaves = 0usize;
            search.run(&mut |report| {
                leaves += 1;
                black_box(report.rank);
            });
            black_box(leaves);
        })
    });
}

criterion_group!(benches, bench_parse, bench_solve);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sequent_prover::{find_proof, parse, prove, RuleSet};

const GOALS: [&str; 4] = [
    "(P => Q) & (Q => R) => (P => R).",
    "!(P & Q) <=> (!P | !Q).",
    "((P => Q) => P) => P.",
    "(A & (B | C) & (D <=> E)) | !(F => (G & H)) | (A => !C).",
];

pub fn bench_refutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resolution refutation");
    for source in GOALS.iter() {
        let goal = parse(source).expect("benchmark goals parse");
        group.bench_with_input(BenchmarkId::new("find proof", source), &goal,
            |b, goal| {
                b.iter(|| find_proof(black_box(goal), RuleSet::Uniform))
            });
    }
    group.finish();
}

pub fn bench_sequent(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequent search");
    for source in GOALS.iter() {
        let goal = parse(source).expect("benchmark goals parse");
        group.bench_with_input(BenchmarkId::new("prove", source), &goal,
            |b, goal| {
                b.iter(|| prove(black_box(goal)))
            });
    }
    group.finish();
}

criterion_group!(benches, bench_refutation, bench_sequent);
criterion_main!(benches);

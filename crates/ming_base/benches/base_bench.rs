use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ming_base::{Element, Pillar, Polarity, Stem, classify, component_strength, ten_god_map};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ganzhi");
    group.bench_function("from_cycle_index", |b| {
        b.iter(|| Pillar::from_cycle_index(black_box(41_234)))
    });
    group.bench_function("cycle_index", |b| {
        let p = Pillar::from_cycle_index(37);
        b.iter(|| black_box(p).cycle_index())
    });
    group.bench_function("void_branches", |b| {
        let p = Pillar::from_cycle_index(37);
        b.iter(|| black_box(p).void_branches())
    });
    group.finish();
}

fn relation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("relations");
    group.bench_function("classify", |b| {
        b.iter(|| {
            classify(
                black_box(Element::Metal),
                Polarity::Yang,
                black_box(Element::Fire),
                Polarity::Yang,
            )
        })
    });
    group.bench_function("ten_god_map", |b| b.iter(|| ten_god_map(black_box(Stem::Xin))));
    group.bench_function("component_strength", |b| {
        b.iter(|| component_strength(black_box(Element::Fire), black_box(Element::Wood)))
    });
    group.finish();
}

criterion_group!(benches, cycle_bench, relation_bench);
criterion_main!(benches);

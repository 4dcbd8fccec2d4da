use criterion::{criterion_group, criterion_main, Criterion};
use k4mirror::consts::{REFERENCE_CIPHER, REFERENCE_KEYWORD, REFERENCE_PLAIN, REFERENCE_START};
use k4mirror::expander::expand;
use k4mirror::grid::factory::GridFactory;
use k4mirror::search::evaluate;
use k4mirror::tabula::TabulaRecta;
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let phase1 = TabulaRecta::build(REFERENCE_KEYWORD)
        .apply(REFERENCE_CIPHER, REFERENCE_START)
        .unwrap();

    let mut factory = GridFactory::new(Some(42));
    c.bench_function("generate_pair", |b| b.iter(|| black_box(factory.generate())));

    let pair = GridFactory::new(Some(7)).generate();
    c.bench_function("translate_13", |b| {
        b.iter(|| black_box(pair.translate(black_box(&phase1))))
    });

    let marked = "EA/STNO/RTHE/AST";
    c.bench_function("expand_3_markers", |b| b.iter(|| black_box(expand(black_box(marked)))));

    let mut factory = GridFactory::new(Some(9));
    c.bench_function("evaluate_attempt", |b| {
        b.iter(|| {
            let pair = factory.generate();
            black_box(evaluate(pair, &phase1, REFERENCE_PLAIN, 2, 1))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);

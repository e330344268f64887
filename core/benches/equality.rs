use criterion::{Criterion, black_box, criterion_group, criterion_main};
use duality_core::{Maybe, Outcome};

fn bench_outcome_equality(c: &mut Criterion) {
    let first: Outcome<String, i32> = Outcome::right(1);
    let second: Outcome<String, i32> = Outcome::right(2);
    let left: Outcome<String, i32> = Outcome::left("ABC".to_string());

    c.bench_function("outcome_eq_same_state", |b| {
        b.iter(|| black_box(&first) == black_box(&second))
    });
    c.bench_function("outcome_eq_mixed_state", |b| {
        b.iter(|| black_box(&first) == black_box(&left))
    });
}

fn bench_maybe_equality(c: &mut Criterion) {
    let first = Maybe::present(vec![1u8; 64]);
    let second = Maybe::present(vec![1u8; 64]);

    c.bench_function("maybe_eq_present", |b| {
        b.iter(|| black_box(&first) == black_box(&second))
    });
}

criterion_group!(benches, bench_outcome_equality, bench_maybe_equality);
criterion_main!(benches);

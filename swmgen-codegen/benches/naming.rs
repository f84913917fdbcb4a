//! Name resolution benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use swmgen_codegen::{
    BindingResolver, FieldShape, RecordNameResolver, TupleNameResolver, capitalize_words,
};

fn benchmark_capitalize(c: &mut Criterion) {
    c.bench_function("capitalize_words", |b| {
        b.iter(|| capitalize_words(black_box("partition_id_uint64_t")))
    });
}

fn benchmark_tuple(c: &mut Criterion) {
    let resolver = TupleNameResolver::new();
    let signature = ["atom()", "string()", "job_id()", "integer()", "any()"];

    c.bench_function("tuple_resolve", |b| {
        b.iter(|| resolver.resolve(black_box(&signature)))
    });
}

fn benchmark_record(c: &mut Criterion) {
    let resolver = RecordNameResolver::new();

    c.bench_function("record_resolve", |b| {
        b.iter(|| resolver.resolve(black_box("#job_record{}")))
    });
}

fn benchmark_entity(c: &mut Criterion) {
    let resolver = BindingResolver::new();
    let fields = vec![
        ("id", FieldShape::scalar("pos_integer()")),
        ("name", FieldShape::scalar("string()")),
        ("jobs", FieldShape::list(FieldShape::scalar("job_id()"))),
        ("resources", FieldShape::list(FieldShape::tuple(["atom()", "any()"]))),
        ("owner", FieldShape::record("#user{}")),
    ];

    c.bench_function("entity_resolve", |b| {
        b.iter(|| resolver.entity(black_box("queue"), black_box(&fields)))
    });
}

criterion_group!(
    benches,
    benchmark_capitalize,
    benchmark_tuple,
    benchmark_record,
    benchmark_entity
);
criterion_main!(benches);

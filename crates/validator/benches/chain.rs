//! Chain evaluation and error tree benchmarks
//!
//! Measures the happy path (every rule passes), the failing path (message
//! already built, only cloned) and serialization of a populated error tree.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fieldcheck_validator::prelude::*;
use std::hint::black_box;

struct Sample {
    name: String,
    port: u16,
    tags: Vec<String>,
}

impl Validatable for Sample {
    fn validate(&self) -> Result<(), Error> {
        validate_all!(
            Validator::new(&self.name, "name").required(true).length(1, Some(64)),
            Validator::new(&self.port, "port").between_or_equal(1024, 49151),
            Validator::new(&self.tags, "tags")
                .not_empty(true)
                .dive(Validator::unbound().required(true)),
        )
    }
}

fn sample(valid: bool) -> Sample {
    if valid {
        Sample {
            name: "collector".into(),
            port: 8080,
            tags: vec!["edge".into(), "eu".into()],
        }
    } else {
        Sample {
            name: String::new(),
            port: 80,
            tags: vec!["edge".into(), String::new()],
        }
    }
}

fn bench_single_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_rule");

    let rule = between(10_i64, 20);
    group.bench_function("between_pass", |b| b.iter(|| rule.validate(black_box(&15))));
    group.bench_function("between_fail", |b| b.iter(|| rule.validate(black_box(&25))));

    group.finish();
}

fn bench_struct(c: &mut Criterion) {
    let mut group = c.benchmark_group("struct");

    for valid in [true, false] {
        let input = sample(valid);
        group.bench_with_input(BenchmarkId::new("validate", valid), &input, |b, input| {
            b.iter(|| black_box(input).validate());
        });
    }

    group.finish();
}

fn bench_dive(c: &mut Criterion) {
    let mut group = c.benchmark_group("dive");

    for size in [10_usize, 100, 1000] {
        let values: Vec<u32> = (1..=size as u32).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                Validator::new(black_box(values), "values")
                    .dive(Validator::unbound().greater(0))
                    .valid()
            });
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let error = sample(false).validate().unwrap_err();

    group.bench_function("flat", |b| b.iter(|| black_box(&error).to_string()));
    group.bench_function("json_string", |b| {
        b.iter(|| serde_json::to_string(black_box(&error)).unwrap());
    });
    group.bench_function("json_value", |b| b.iter(|| black_box(&error).to_json_value()));

    group.finish();
}

criterion_group!(benches, bench_single_rule, bench_struct, bench_dive, bench_serialize);
criterion_main!(benches);

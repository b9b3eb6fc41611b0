use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use minicalc_rs::ast::Parser;
use minicalc_rs::{compute, functions};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3";
    let parsed = Parser::parse_expression(expr).unwrap();
    let table = functions::standard();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compute_arithmetic", |b| {
        b.iter(|| compute(black_box(expr)))
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| table.evaluate_ast(black_box(&parsed)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let parsed = Parser::parse_expression(expr).unwrap();
    let table = functions::standard();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compute_complex_arithmetic", |b| {
        b.iter(|| compute(black_box(expr)))
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| table.evaluate_ast(black_box(&parsed)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark function calls from the table, trig in degrees
fn benchmark_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Table Evaluation");

    let expr = "sin(30) + sqrt(pow(3, 2) + 16) * log(1000) - abs(-2)";
    let parsed = Parser::parse_expression(expr).unwrap();
    let table = functions::standard();

    group.bench_function("compute_functions", |b| b.iter(|| compute(black_box(expr))));

    group.bench_function("preparsed_functions", |b| {
        b.iter(|| table.evaluate_ast(black_box(&parsed)))
    });

    group.bench_function("parse_only_functions", |b| {
        b.iter(|| Parser::parse_expression(black_box(expr)))
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_functions
);
criterion_main!(benches);

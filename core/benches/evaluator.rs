//! Benchmarks for the stack evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. eval_quiet: evaluation without a trace
//! 2. eval_verbose: evaluation recording one trace line per instruction
//! 3. tokenize_only: splitting and classifying tokens, for comparison

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stackbot_core::stack::{classify, evaluate, tokenize};

/// Generate a program like "1 1 + 1 + ... 1 +" with `n` additions.
fn generate_addition_chain(n: usize) -> String {
    let mut program = String::from("1");
    for _ in 0..n {
        program.push_str(" 1 +");
    }
    program
}

fn bench_eval(c: &mut Criterion, group_name: &str, verbose: bool) {
    let mut group = c.benchmark_group(group_name);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let source = generate_addition_chain(size);
            b.iter(|| {
                let evaluation =
                    evaluate(black_box(&source), black_box(verbose)).expect("Eval failed");
                black_box(evaluation.value)
            });
        });
    }

    group.finish();
}

fn bench_eval_quiet(c: &mut Criterion) {
    bench_eval(c, "eval_quiet", false);
}

/// Verbose runs format a string per instruction; compare with eval_quiet.
fn bench_eval_verbose(c: &mut Criterion) {
    bench_eval(c, "eval_verbose", true);
}

fn bench_tokenize_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_only");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let source = generate_addition_chain(size);
            b.iter(|| {
                let count = tokenize(black_box(&source))
                    .iter()
                    .map(|token| classify(token.text))
                    .count();
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_eval_quiet, bench_eval_verbose, bench_tokenize_only);
criterion_main!(benches);

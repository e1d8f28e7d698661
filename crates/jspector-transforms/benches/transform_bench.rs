//! Transform pipeline benchmarks.
//!
//! Measures parse + all passes + print for hand-written and generated sources.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jspector_transforms::{TransformOptions, transform};

const SIMPLE_SOURCE: &str = r#"
var count = 0;
var step = 2;
count += step;
count++;
function report(value) {
    console.log("count", value);
}
report(count);
"#;

const CALLBACK_SOURCE: &str = r#"
var users = [];
function load(ids, done) {
    ids.forEach(function (id) {
        users.push({ id: id, name: "user" + id });
    });
    done(users.map(u => u.name));
}
load([1, 2, 3], function (names) {
    var total = names.length;
    for (var i = 0; i < total; i++) {
        console.log(names[i]);
    }
});
"#;

/// Generate `functions` functions of `statements` declarations each, plus call sites.
fn generate_source(functions: usize, statements: usize) -> String {
    let mut source = String::with_capacity(functions * statements * 48);
    for f in 0..functions {
        source.push_str(&format!("function fn{f}(x, y) {{\n"));
        for s in 0..statements {
            source.push_str(&format!("    var v{s} = x + {s};\n    v{s} += 1;\n"));
        }
        source.push_str("    return x + y;\n}\n");
    }
    for f in 0..functions {
        source.push_str(&format!("var r{f} = fn{f}(1, 2);\nlist.map(v => v + r{f});\n"));
    }
    source
}

fn bench_transform_small(c: &mut Criterion) {
    let options = TransformOptions::default();
    c.bench_function("transform_simple", |b| {
        b.iter(|| black_box(transform(black_box(SIMPLE_SOURCE), &options)))
    });
    c.bench_function("transform_callbacks", |b| {
        b.iter(|| black_box(transform(black_box(CALLBACK_SOURCE), &options)))
    });
}

fn bench_transform_throughput(c: &mut Criterion) {
    let options = TransformOptions::default().with_client(true);
    let mut group = c.benchmark_group("transform_throughput");

    for (functions, statements) in [(10, 5), (50, 5), (100, 10)] {
        let source = generate_source(functions, statements);
        let label = format!("{functions}fn_{statements}stmt");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("transform", &label), &source, |b, source| {
            b.iter(|| black_box(transform(source, &options)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transform_small, bench_transform_throughput);
criterion_main!(benches);

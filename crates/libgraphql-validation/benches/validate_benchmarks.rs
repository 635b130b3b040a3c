mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_validation::Document;
use libgraphql_validation::Schema;
use libgraphql_validation::validation;

fn build_schema(type_count: usize) -> Schema {
    Schema::builder()
        .load_from_str(fixtures::chained_schema(type_count))
        .and_then(|builder| builder.build())
        .expect("fixture schema is valid")
}

// ─── Group 1: Schema Building ─────────────────────────────

fn schema_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_build");

    for type_count in [10, 100, 1000] {
        let sdl = fixtures::chained_schema(type_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &sdl,
            |b, sdl| {
                b.iter(|| {
                    black_box(
                        Schema::builder()
                            .load_from_str(sdl)
                            .and_then(|builder| builder.build()),
                    )
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Document Validation ─────────────────────────

fn validate_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let schema = build_schema(100);
    let rules = validation::specified_rules();

    for depth in [5, 25, 99] {
        let doc = Document::parse_executable(fixtures::deeply_nested_query(depth))
            .expect("fixture query parses");
        group.bench_with_input(
            BenchmarkId::new("deeply_nested", depth),
            &doc,
            |b, doc| {
                b.iter(|| black_box(validation::validate(&schema, doc, &rules)))
            },
        );
    }

    let doc = Document::parse_executable(fixtures::misspelled_variables_query(50))
        .expect("fixture query parses");
    group.bench_function("misspelled_variables", |b| {
        b.iter(|| black_box(validation::validate(&schema, &doc, &rules)))
    });

    group.finish();
}

// ─── Group 3: Error Limit ─────────────────────────────────

fn validate_with_error_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_limit");
    let schema = build_schema(100);
    let rules = validation::specified_rules();
    let doc = Document::parse_executable(fixtures::misspelled_variables_query(50))
        .expect("fixture query parses");

    for max_errors in [None, Some(10)] {
        let options = validation::ValidationOptions { max_errors };
        let label = max_errors.map_or("unlimited".to_string(), |max| max.to_string());
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &options,
            |b, options| {
                b.iter(|| {
                    black_box(validation::validate_with_options(
                        &schema,
                        &doc,
                        &rules,
                        options,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    schema_build,
    validate_documents,
    validate_with_error_limit,
);
criterion_main!(benches);

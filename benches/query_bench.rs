//! Benchmarks for the csvsift query pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use csvsift::query::{
    aggregate_rows, filter_rows, group_aggregate, run_query, sort_rows, QueryRequest,
};
use csvsift::rows::{Row, RowSet};

fn create_test_rows(count: usize) -> RowSet {
    let headers = vec!["name".to_string(), "price".to_string(), "brand".to_string()];
    let brands = ["Sony", "LG", "Samsung", "Philips"];

    let rows = (0..count)
        .map(|i| {
            let mut row = Row::new();
            row.insert("name".to_string(), format!("product-{}", i));
            row.insert("price".to_string(), format!("{}", (i * 37) % 1000));
            row.insert("brand".to_string(), brands[i % brands.len()].to_string());
            row
        })
        .collect();

    RowSet::new(headers, rows)
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let set = create_test_rows(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("int_gt_{}", size), |b| {
            b.iter(|| filter_rows(black_box(&set), "price>500").unwrap())
        });

        group.bench_function(format!("float_gte_{}", size), |b| {
            b.iter(|| filter_rows(black_box(&set), "price>=499.5").unwrap())
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let set = create_test_rows(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("numeric_asc_{}", size), |b| {
            b.iter(|| {
                let mut rows = set.clone();
                sort_rows(&mut rows, black_box("price=asc")).unwrap();
                rows
            })
        });

        group.bench_function(format!("string_desc_{}", size), |b| {
            b.iter(|| {
                let mut rows = set.clone();
                sort_rows(&mut rows, black_box("name=desc")).unwrap();
                rows
            })
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1000, 10000] {
        let set = create_test_rows(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("global_avg_{}", size), |b| {
            b.iter(|| aggregate_rows(black_box(&set), "price=avg").unwrap())
        });

        group.bench_function(format!("grouped_avg_{}", size), |b| {
            b.iter(|| group_aggregate(black_box(&set), "brand", "price=avg").unwrap())
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let request = QueryRequest {
        where_clause: Some("price>250".to_string()),
        order_by: Some("price=desc".to_string()),
        select: Some(vec!["name".to_string(), "price".to_string()]),
        group_by: Some("brand".to_string()),
        aggregate: Some("price=avg".to_string()),
    };

    for size in [1000, 10000] {
        let set = create_test_rows(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("full_{}", size), |b| {
            b.iter(|| run_query(black_box(set.clone()), &request).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter,
    bench_sort,
    bench_aggregate,
    bench_pipeline
);
criterion_main!(benches);

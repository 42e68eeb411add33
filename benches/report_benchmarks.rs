//! Performance benchmarks for the Labour Payment Engine.
//!
//! Measures payment recomputation and report rendering over growing
//! collections, plus one ragged case where the sequences differ in length.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use labour_engine::calculation::{build_report, calculate_payments};
use labour_engine::models::{AttendanceRecord, ContractRecord, Employee};

fn employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee::new(format!("Employee {:04}", i), format!("emp{}@example.com", i)))
        .collect()
}

fn contracts(count: usize) -> Vec<ContractRecord> {
    (0..count)
        .map(|i| {
            ContractRecord::new(
                format!("Job {:04}", i),
                (i % 12) as i32 + 1,
                Decimal::new(2500 + (i as i64 % 1000), 2),
            )
        })
        .collect()
}

fn attendance(count: usize) -> Vec<AttendanceRecord> {
    (0..count)
        .map(|i| AttendanceRecord::new(format!("2024-01-{:02}", i % 28 + 1), (i % 12) as i32))
        .collect()
}

fn bench_calculate_payments(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_payments");

    for size in [10usize, 100, 1000, 10_000] {
        let contracts = contracts(size);
        let attendance = attendance(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| calculate_payments(black_box(&contracts), black_box(&attendance)))
        });
    }

    group.finish();
}

fn bench_build_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_report");

    for size in [10usize, 100, 1000, 10_000] {
        let employees = employees(size);
        let contracts = contracts(size);
        let attendance = attendance(size);
        let payments = calculate_payments(&contracts, &attendance);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                build_report(
                    black_box(&employees),
                    black_box(&contracts),
                    black_box(&attendance),
                    black_box(&payments),
                )
            })
        });
    }

    group.finish();
}

fn bench_ragged_report(c: &mut Criterion) {
    let employees = employees(1000);
    let contracts = contracts(400);
    let attendance = attendance(700);

    c.bench_function("ragged_report_recompute_and_render", |b| {
        b.iter(|| {
            let payments = calculate_payments(black_box(&contracts), black_box(&attendance));
            build_report(
                black_box(&employees),
                black_box(&contracts),
                black_box(&attendance),
                &payments,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_payments,
    bench_build_report,
    bench_ragged_report
);
criterion_main!(benches);

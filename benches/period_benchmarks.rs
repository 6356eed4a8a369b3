//! Performance benchmarks for the Attendance Reconciliation Engine.
//!
//! This benchmark suite covers the two hot paths of the engine:
//! - period resolution, called once per report row
//! - download deduplication, called once per device fetch
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::calculation::{filter_new_records, resolve_period};
use attendance_engine::config::{WorkPeriodConfig, WorkPeriodMode};
use attendance_engine::models::{AttendanceRecord, VerifyMethod};
use chrono::{Duration, NaiveDateTime};

fn config_for(mode: WorkPeriodMode) -> WorkPeriodConfig {
    WorkPeriodConfig {
        mode,
        monthly_start_day: 31,
        fortnight_first_day: 1,
        fortnight_second_day: 16,
        ..WorkPeriodConfig::default()
    }
}

/// Builds a batch of records spaced one minute apart.
fn make_records(count: usize) -> Vec<AttendanceRecord> {
    let base =
        NaiveDateTime::parse_from_str("2024-03-01 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    (0..count)
        .map(|i| {
            AttendanceRecord::new(
                format!("emp_{:03}", i % 50),
                base + Duration::minutes(i as i64),
                VerifyMethod::Fingerprint,
            )
        })
        .collect()
}

fn bench_period_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_period");

    for (name, mode) in [
        ("weekly", WorkPeriodMode::Weekly),
        ("fortnightly", WorkPeriodMode::Fortnightly),
        ("monthly", WorkPeriodMode::Monthly),
    ] {
        let config = config_for(mode);
        group.bench_function(name, |b| {
            b.iter(|| {
                for number in 1..=24 {
                    black_box(resolve_period(
                        black_box(&config),
                        black_box(2024),
                        black_box(number),
                    ));
                }
            })
        });
    }

    group.finish();
}

fn bench_deduplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_new_records");

    for size in [100usize, 1_000, 10_000] {
        let existing = make_records(size);
        // Half of the candidates overlap the existing window
        let mut candidates = existing[size / 2..].to_vec();
        candidates.extend(make_records(size / 2).into_iter().map(|mut r| {
            r.check_time += Duration::days(1);
            r
        }));

        group.throughput(Throughput::Elements(candidates.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(candidates, existing),
            |b, (candidates, existing)| {
                b.iter(|| black_box(filter_new_records(candidates, existing)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_period_resolution, bench_deduplication);
criterion_main!(benches);

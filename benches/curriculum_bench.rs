// ABOUTME: Criterion benchmarks for the curriculum tiler and energy engine
// ABOUTME: Measures curriculum projection per membership tier and daily budget computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! Criterion benchmarks for the coaching rule engine.
//!
//! Measures complete curriculum projection for each membership tier, the
//! daily energy budget, and calendar location.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elsa_coach::intelligence::calendar::locate;
use elsa_coach::intelligence::catalog::{InMemoryCatalog, PlanCatalog};
use elsa_coach::intelligence::config::CoachingConfig;
use elsa_coach::intelligence::{curriculum, energy};
use elsa_coach::models::{
    CyclingIntensity, Gender, PhysicalIntensity, PlanBucket, PlanEntry, Profile, SportsGoal,
    SportsLevel,
};

fn bucket() -> PlanBucket {
    PlanBucket::new(Gender::Male, SportsLevel::Intermediate, SportsGoal::Performance)
}

/// Four-week base cycle: cycling five days a week, gym three
fn seeded_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for week in 1..=4 {
        for day in 1..=5 {
            let minutes = 45.0 + 5.0 * f64::from(day);
            catalog = catalog
                .try_with_plan(
                    PlanEntry::cycling(week, day, minutes, CyclingIntensity::Moderate, "Ride")
                        .for_bucket(bucket()),
                )
                .unwrap();
        }
        for day in [2, 4, 6] {
            catalog = catalog
                .try_with_plan(
                    PlanEntry::physical(week, day, 50.0, PhysicalIntensity::Strong, "Gym")
                        .for_bucket(bucket()),
                )
                .unwrap();
        }
    }
    catalog
}

fn profile() -> Profile {
    Profile::new(Gender::Male, SportsLevel::Intermediate, SportsGoal::Performance)
        .with_biometrics(29, 178.0, 74.0, 77.0)
}

fn bench_complete_curriculum(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_curriculum");
    let catalog = seeded_catalog();
    let config = CoachingConfig::default();
    let profile = profile();

    for months in [3_u32, 6, 12] {
        group.throughput(Throughput::Elements(u64::from(months * 4)));
        group.bench_with_input(BenchmarkId::new("months", months), &months, |b, &months| {
            b.iter(|| {
                curriculum::build(
                    black_box(&profile),
                    black_box(months),
                    &catalog,
                    &config,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_daily_energy(c: &mut Criterion) {
    let catalog = seeded_catalog();
    let config = CoachingConfig::default();
    let biometrics = profile().biometrics().unwrap();
    let sessions = catalog.find_sessions(&bucket(), 2, 3);

    c.bench_function("energy_compute_for", |b| {
        b.iter(|| energy::compute_for(black_box(&biometrics), black_box(&sessions), &config));
    });
}

fn bench_locate(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap();
    let now = start + Duration::days(200) + Duration::hours(13);

    c.bench_function("calendar_locate", |b| {
        b.iter(|| locate(black_box(Some(start)), black_box(now)));
    });
}

criterion_group!(
    benches,
    bench_complete_curriculum,
    bench_daily_energy,
    bench_locate
);
criterion_main!(benches);

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use fitness_tracker::models::{FitnessGoal, FoodEntry, StepImportEntry, WorkoutEntry};
use fitness_tracker::services::{aggregate, suggest};
use std::hint::black_box;

const EXERCISES: [&str; 6] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weight Training",
    "Yoga",
    "Rowing",
];

/// A year of history: three workouts, four meals and one import per day.
fn year_of_entries() -> (Vec<WorkoutEntry>, Vec<FoodEntry>, Vec<StepImportEntry>) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let mut workouts = Vec::new();
    let mut foods = Vec::new();
    let mut imports = Vec::new();

    for day in 0..365 {
        let date = start + Duration::days(day);
        for i in 0..3 {
            workouts.push(WorkoutEntry {
                date,
                name: EXERCISES[(day as usize + i) % EXERCISES.len()].to_string(),
                duration_minutes: 20 + (i as u32 * 10),
                reps: 0,
            });
        }
        for i in 0..4 {
            foods.push(FoodEntry {
                date,
                name: format!("Meal {}", i),
                calories: 300 + i * 50,
                protein_grams: 12.5,
            });
        }
        imports.push(StepImportEntry {
            date,
            steps: 8000 + day as u64,
            calories_burned: 350,
        });
    }

    (workouts, foods, imports)
}

fn benchmark_aggregation(c: &mut Criterion) {
    let (workouts, foods, imports) = year_of_entries();

    let mut group = c.benchmark_group("progress");

    group.bench_function("aggregate_one_year", |b| {
        b.iter(|| {
            aggregate(
                black_box(&workouts),
                black_box(&foods),
                black_box(&imports),
                black_box(70.0),
            )
        })
    });

    group.bench_function("suggest_one_year", |b| {
        b.iter(|| {
            suggest(
                black_box(&workouts),
                black_box(&foods),
                black_box(&FitnessGoal::MuscleBuilding),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);

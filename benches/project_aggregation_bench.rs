use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roimap::{compute_project_metrics, ProjectCosts, RoiCalculator};
use serde_json::{json, Value};
use std::hint::black_box;

fn create_indicators(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                // legacy-shaped rows
                json!({
                    "id": format!("ind-{i}"),
                    "projectId": "bench",
                    "baselineData": {
                        "persons": [
                            {"name": "a", "hourlyRate": 40 + i % 20, "timeSpentMinutes": 45,
                             "frequencyQuantity": 1 + i % 3, "frequencyPeriod": "Semanal"}
                        ]
                    },
                    "postChangeData": {
                        "persons": [
                            {"name": "a", "hourlyRate": 40 + i % 20, "timeSpentMinutes": 15,
                             "frequencyQuantity": 1 + i % 3, "frequencyPeriod": "Semanal"}
                        ],
                        "tools": [{"value": 600, "kind": "annual"}]
                    }
                })
            } else {
                json!({
                    "id": format!("ind-{i}"),
                    "projectId": "bench",
                    "frequencyValue": 5 + i % 40,
                    "frequencyUnit": "week",
                    "personsBaseline": [
                        {"hourlyRate": 55, "timeSpentMinutes": 30 + i % 60},
                        {"hourlyRate": 70, "timeSpentMinutes": 20}
                    ],
                    "personsPostChange": [
                        {"hourlyRate": 55, "timeSpentMinutes": 10},
                        {"hourlyRate": 70, "timeSpentMinutes": 5}
                    ],
                    "toolsPostChange": [{"monthlyCost": 25, "costPerExecution": 0.1}]
                })
            }
        })
        .collect()
}

fn bench_project_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_aggregation");
    let project = ProjectCosts::new(25_000.0, 300.0);

    for size in [10usize, 100, 1_000] {
        let indicators = create_indicators(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &indicators, |b, indicators| {
            b.iter(|| compute_project_metrics(black_box("bench"), black_box(indicators), &project))
        });
    }
    group.finish();
}

fn bench_single_indicator(c: &mut Criterion) {
    let calculator = RoiCalculator::new();
    let indicators = create_indicators(3);

    c.bench_function("indicator_metrics_normalized", |b| {
        b.iter(|| calculator.compute_indicator_metrics(black_box(&indicators[1])))
    });
    c.bench_function("indicator_metrics_legacy", |b| {
        b.iter(|| calculator.compute_indicator_metrics(black_box(&indicators[0])))
    });
}

criterion_group!(benches, bench_project_aggregation, bench_single_indicator);
criterion_main!(benches);

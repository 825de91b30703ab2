use bayes_core::config::ValidationConfig;
use bayes_core::Evidence;
use bayes_inference::{infer, loader, marginals};
use criterion::{criterion_group, criterion_main, Criterion};
use test_fixtures::network_str;

fn bench_enumeration(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let alarm = loader::load_str(&network_str("alarm.json"), &config)
        .unwrap()
        .network;
    let sprinkler = loader::load_str(&network_str("sprinkler.json"), &config)
        .unwrap()
        .network;

    let calls = Evidence::new()
        .with("JohnCalls", "true")
        .with("MaryCalls", "true");
    c.bench_function("alarm_burglary_given_calls", |b| {
        b.iter(|| infer(&alarm, "Burglary", &calls).unwrap())
    });

    let wet = Evidence::new().with("WetGrass", "true");
    c.bench_function("sprinkler_rain_given_wet", |b| {
        b.iter(|| infer(&sprinkler, "Rain", &wet).unwrap())
    });

    c.bench_function("alarm_marginals_sequential", |b| {
        b.iter(|| marginals(&alarm, &calls, false).unwrap())
    });
    c.bench_function("alarm_marginals_parallel", |b| {
        b.iter(|| marginals(&alarm, &calls, true).unwrap())
    });
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use stockroom::domain::product::Product;
use stockroom::services::search::filter_products;
use stockroom::services::validation::ProductForm;
use stockroom::services::Dashboard;
use stockroom::utils::{format_currency, format_short_currency};
use std::time::Duration;

const WORDS: [&str; 8] = ["Beras", "Kopi", "Teh", "Gula", "Minyak", "Susu", "Mie", "Garam"];

fn random_catalog(count: usize) -> Vec<Product> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            let mut product = Product::new(
                i as i64 + 1,
                format!("{} {}", word, i),
                rng.gen_range(500.0..250_000.0),
                rng.gen_range(0..200),
            );
            if rng.gen_bool(0.3) {
                product.category = Some(word.to_lowercase());
            }
            product
        })
        .collect()
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    for count in [100, 1000, 10_000].iter() {
        let products = random_catalog(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &products, |b, products| {
            b.iter(|| black_box(Dashboard::from_products(products)));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_products");
    group.sample_size(20);

    for count in [100, 1000, 10_000].iter() {
        let products = random_catalog(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &products, |b, products| {
            b.iter(|| black_box(filter_products(products, "kopi").len()));
        });
    }
    group.finish();
}

fn bench_form_validation(c: &mut Criterion) {
    let form = ProductForm::new("Kopi Bubuk Toraja", "95000", "6");
    c.bench_function("validate_form", |b| b.iter(|| black_box(form.validate())));
}

fn bench_formatting(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let amounts: Vec<f64> = (0..1000).map(|_| rng.gen_range(0.0..5_000_000_000.0)).collect();

    c.bench_function("format_currency", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(format_currency(*amount));
            }
        })
    });
    c.bench_function("format_short_currency", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(format_short_currency(*amount));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_dashboard,
    bench_search,
    bench_form_validation,
    bench_formatting
);
criterion_main!(benches);

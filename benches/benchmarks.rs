use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratesync::prelude::*;
use std::sync::Arc;

struct NullView;

impl ConverterView for NullView {
    fn set_field_text(&mut self, _side: FieldSide, _text: &str) {}
    fn set_rate_label(&mut self, _text: &str) {}
}

fn benchmark_rate_lookup(c: &mut Criterion) {
    let table = RateTable::builtin();
    let pairs: Vec<(Currency, Currency)> = Currency::all()
        .into_iter()
        .flat_map(|from| Currency::all().into_iter().map(move |to| (from, to)))
        .collect();

    c.bench_function("rate_lookup_all_pairs", |b| {
        b.iter(|| {
            for &(from, to) in &pairs {
                black_box(table.lookup(black_box(from), black_box(to)));
            }
        });
    });
}

fn benchmark_format_amount(c: &mut Criterion) {
    c.bench_function("format_amount_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(format_amount(black_box(i as f64 * 0.9261)));
            }
        });
    });
}

fn benchmark_edit_propagation(c: &mut Criterion) {
    let table = Arc::new(RateTable::builtin());

    c.bench_function("edit_propagation_100", |b| {
        b.iter(|| {
            let mut controller = ConversionController::new(
                table.clone(),
                Currency::USD,
                Currency::EUR,
                NullView,
            );

            for i in 0..100 {
                controller.handle_event(ConverterEvent::TextChanged(
                    FieldSide::Source,
                    black_box(i.to_string()),
                ));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_rate_lookup,
    benchmark_format_amount,
    benchmark_edit_propagation
);
criterion_main!(benches);

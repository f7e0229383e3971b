use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csevents::{EventHandler, Handlers};
use std::cell::Cell;

fn bench_invoke(c: &mut Criterion) {
    let total = Cell::new(0u64);
    let mut handler: EventHandler<u64> = EventHandler::new();
    for _ in 0..100 {
        handler.add(|_, n| total.set(total.get().wrapping_add(*n)));
    }

    c.bench_function("invoke 100 handlers", |b| {
        b.iter(|| handler.invoke(&(), black_box(&1)))
    });
}

fn bench_add_remove(c: &mut Criterion) {
    let mut handler: EventHandler<u64> = EventHandler::new();
    for _ in 0..100 {
        handler.add(|_, _| {});
    }

    c.bench_function("add then remove with 100 registered", |b| {
        b.iter(|| {
            let id = handler.add(|_, _| {});
            black_box(handler.remove(id))
        })
    });
}

criterion_group!(benches, bench_invoke, bench_add_remove);
criterion_main!(benches);

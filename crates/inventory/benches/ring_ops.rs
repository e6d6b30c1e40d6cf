use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockring_inventory::{ItemListing, ItemRegistry};

fn seeded(size: usize) -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    for i in 0..size {
        registry
            .add_item(format!("item-{i}"), (i as u32 % 100) + 1)
            .unwrap();
    }
    registry
}

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_item");
    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| seeded(black_box(size)));
        });
    }
    group.finish();
}

fn bench_full_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_items");
    for size in [100usize, 1_000, 10_000] {
        let registry = seeded(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| match registry.display_items() {
                ItemListing::NoItems => unreachable!(),
                ItemListing::Items(items) => black_box(items.len()),
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_item, bench_full_traversal);
criterion_main!(benches);

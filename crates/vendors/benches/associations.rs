use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use forgemarket_vendors::{Channel, Product, Vendor};

fn bench_channel_attach_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_attach_detach");

    for channel_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*channel_count as u64));
        group.bench_with_input(
            BenchmarkId::new("attach_then_detach_all", channel_count),
            channel_count,
            |b, &count| {
                let mut channels: Vec<Channel> = (0..count)
                    .map(|i| Channel::new(format!("CH-{i}"), format!("Channel {i}")))
                    .collect();

                b.iter(|| {
                    let mut vendor = Vendor::new();
                    for channel in channels.iter_mut() {
                        vendor.add_channel(channel);
                    }
                    for channel in channels.iter_mut() {
                        vendor.remove_channel(channel);
                    }
                    black_box(vendor.channels().len());
                });
            },
        );
    }

    group.finish();
}

fn bench_vendor_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vendor_snapshot");

    for product_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("to_record", product_count),
            product_count,
            |b, &count| {
                let mut vendor = Vendor::new();
                vendor.set_name("Bench Vendor");
                let mut products: Vec<Product> = (0..count)
                    .map(|i| Product::new(format!("SKU-{i}"), format!("Product {i}")))
                    .collect();
                for product in products.iter_mut() {
                    vendor.add_product(product);
                }
                for code in ["en", "de_DE", "fr_FR"] {
                    vendor.set_description(&code.parse().unwrap(), "Benchmark description");
                }

                b.iter(|| black_box(vendor.to_record()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_channel_attach_detach, bench_vendor_snapshot);
criterion_main!(benches);

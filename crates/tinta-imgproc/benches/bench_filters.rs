use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use tinta_image::{ImageSize, Rgb8Image};
use tinta_imgproc::filters::Filter;

fn sample_image(size: ImageSize) -> Rgb8Image {
    let data = (0..size.width * size.height * 3)
        .map(|i| (i % 251) as u8)
        .collect();
    Rgb8Image::new(size, data).unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = sample_image([*width, *height].into());

        for filter in Filter::ALL {
            group.bench_with_input(
                BenchmarkId::new(filter.name(), &parameter_string),
                &image,
                |b, i| {
                    b.iter_batched(
                        || i.clone(),
                        |mut image| {
                            filter.apply(&mut image).unwrap();
                            black_box(image)
                        },
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use nametag::render::{Generator, synthesize_squiggle};
use nametag::{Fingerprint, GenerationRequest};

fn requests() -> Vec<(&'static str, GenerationRequest)> {
    let fingerprint =
        Fingerprint::from_hex("3f1c8a72d09be5641f2a7c3e9d8b0a6c5e4f3d2a").expect("valid hex");
    vec![
        ("plain", GenerationRequest::new("jackie*", "per, pers, pers")),
        (
            "fingerprint",
            GenerationRequest::new("Ada Lovelace", "she/her").with_fingerprint(fingerprint),
        ),
        (
            "gradient",
            GenerationRequest::new("Grace Hopper", "she/they").with_gradient(true),
        ),
    ]
}

fn bench_generate_sync(c: &mut Criterion) {
    let generator = Generator::new();

    let mut group = c.benchmark_group("generate_sync");
    for (name, request) in requests() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || request.clone(),
                |request| {
                    let artifact = generator.generate_sync(&request).unwrap();
                    std::hint::black_box(artifact);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_squiggle(c: &mut Criterion) {
    let long_name = "Wolfeschlegelsteinhausenbergerdorff".repeat(8);
    c.bench_function("synthesize_squiggle/long_name", |b| {
        b.iter(|| synthesize_squiggle(std::hint::black_box(&long_name)).unwrap())
    });
}

criterion_group!(benches, bench_generate_sync, bench_squiggle);
criterion_main!(benches);

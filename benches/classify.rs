use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mimesniff::domain::services::{Classifier, MismatchEvaluator};

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::default();

    let mut webp = b"RIFF\x00\x10\x00\x00WEBPVP8 ".to_vec();
    webp.resize(4100, 0x42);
    let text = "timestamp,level,message\n".repeat(200).into_bytes();
    let binary = vec![0xA5u8; 4100];

    c.bench_function("classify_webp_last_rule", |b| {
        b.iter(|| classifier.classify(black_box(&webp)))
    });
    c.bench_function("classify_text_fallback", |b| {
        b.iter(|| classifier.classify(black_box(&text)))
    });
    c.bench_function("classify_unknown_binary", |b| {
        b.iter(|| classifier.classify(black_box(&binary)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = MismatchEvaluator::default();
    c.bench_function("evaluate_with_parameters", |b| {
        b.iter(|| evaluator.evaluate(black_box("text/plain; charset=utf-8"), black_box("text/plain")))
    });
}

criterion_group!(benches, bench_classify, bench_evaluate);
criterion_main!(benches);

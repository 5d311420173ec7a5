use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use precis_core::{StopWords, Summarizer, rank_sentences, similarity, split_sentences, summarize};

fn article() -> String {
    std::fs::read_to_string("../../tests/fixtures/article.txt").unwrap()
}

fn bench_split(c: &mut Criterion) {
    let text = article();

    c.bench_function("split_sentences", |b| b.iter(|| split_sentences(black_box(&text))));
}

fn bench_similarity(c: &mut Criterion) {
    let a = "Coral reefs support roughly a quarter of all known marine species.";
    let b = "Protecting coral reefs is important for marine species.";

    c.bench_function("similarity", |bench| bench.iter(|| similarity(black_box(a), black_box(b))));
}

fn bench_rank(c: &mut Criterion) {
    let sentences = split_sentences(&article());
    let stop_words = StopWords::english();

    c.bench_function("rank_sentences", |b| {
        b.iter(|| rank_sentences(black_box(&sentences[..]), stop_words, &[]))
    });
}

fn bench_summarize(c: &mut Criterion) {
    let base = article();
    let summarizer = Summarizer::new();

    let mut group = c.benchmark_group("summarize");

    for copies in [1usize, 4, 16] {
        let text = vec![base.as_str(); copies].join("\n\n");
        let sentences = copies * 14;
        group.bench_with_input(BenchmarkId::new("sentences", sentences), &text, |b, text| {
            b.iter(|| summarizer.summarize(black_box(text)))
        });
    }

    group.finish();
}

fn bench_summarize_default(c: &mut Criterion) {
    let text = article();

    c.bench_function("summarize_default", |b| b.iter(|| summarize(black_box(&text))));
}

criterion_group!(
    benches,
    bench_split,
    bench_similarity,
    bench_rank,
    bench_summarize,
    bench_summarize_default
);
criterion_main!(benches);

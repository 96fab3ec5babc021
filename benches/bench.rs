//! Criterion benchmarks for the Lexis analysis pipeline.
//!
//! Covers:
//! - Tokenizers on their own
//! - Preset analyzers end to end
//! - Stream reuse versus a fresh stream per document
//! - Parallel batch analysis

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexis::analysis::analyzer::analyzer::Analyzer;
use lexis::analysis::analyzer::batch::analyze_batch;
use lexis::analysis::analyzer::courtesy_title::CourtesyTitleAnalyzer;
use lexis::analysis::analyzer::pipeline::PipelineAnalyzer;
use lexis::analysis::analyzer::simple::SimpleAnalyzer;
use lexis::analysis::analyzer::standard::StandardAnalyzer;
use lexis::analysis::attribute::AttributeSet;
use lexis::analysis::config::AnalyzerConfig;
use lexis::analysis::token_stream::TokenStream;
use lexis::analysis::tokenizer::regex::RegexTokenizer;
use lexis::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "the", "film", "Mr", "and", "Mrs", "Smith", "is", "a", "good", "morning", "in", "Dr",
        "Watson", "met", "at", "Baker", "Street", "for", "tea", "with", "Holmes", "on", "a",
        "rainy", "evening", "they", "talked", "about", "the", "case", "of", "it",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        documents.push(doc_words.join(" "));
    }

    documents
}

/// Drain a tokenizer over `text`, counting tokens.
fn drain<T: TokenStream>(tokenizer: &mut T, text: &str) -> usize {
    let mut attrs = AttributeSet::new();
    let mut count = 0;
    tokenizer.reset(text).unwrap();
    while tokenizer.increment_token(&mut attrs).unwrap() {
        count += 1;
    }
    tokenizer.end(&mut attrs).unwrap();
    count
}

/// Benchmark tokenizers.
fn bench_tokenizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizers");
    let text = generate_test_documents(1).remove(0);
    group.throughput(Throughput::Bytes(text.len() as u64));

    let mut whitespace = WhitespaceTokenizer::new();
    group.bench_function("whitespace", |b| {
        b.iter(|| black_box(drain(&mut whitespace, black_box(&text))))
    });

    let mut unicode_word = UnicodeWordTokenizer::new();
    group.bench_function("unicode_word", |b| {
        b.iter(|| black_box(drain(&mut unicode_word, black_box(&text))))
    });

    let mut regex = RegexTokenizer::new().unwrap();
    group.bench_function("regex", |b| {
        b.iter(|| black_box(drain(&mut regex, black_box(&text))))
    });

    group.finish();
}

/// Benchmark preset analyzers.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let texts = generate_test_documents(100);

    let analyzers: Vec<Box<dyn Analyzer>> = vec![
        Box::new(SimpleAnalyzer::default()),
        Box::new(StandardAnalyzer::new()),
        Box::new(CourtesyTitleAnalyzer::new()),
        Box::new(PipelineAnalyzer::from_config(&AnalyzerConfig::courtesy_title()).unwrap()),
    ];

    group.throughput(Throughput::Elements(texts.len() as u64));
    for (i, analyzer) in analyzers.iter().enumerate() {
        group.bench_function(format!("{}_{i}", analyzer.name()), |b| {
            b.iter(|| {
                for text in &texts {
                    let _ = black_box(analyzer.analyze(black_box(text)));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark one reused stream against a fresh stream per document.
fn bench_stream_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_reuse");
    let analyzer = StandardAnalyzer::new();
    let texts = generate_test_documents(100);
    group.throughput(Throughput::Elements(texts.len() as u64));

    group.bench_function("fresh_stream", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(analyzer.analyze(text));
            }
        })
    });

    let mut stream = analyzer.token_stream().unwrap();
    group.bench_function("reused_stream", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(stream.analyze(text));
            }
        })
    });

    group.finish();
}

/// Benchmark parallel batch analysis.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    let analyzer = CourtesyTitleAnalyzer::new();
    let texts = generate_test_documents(1000);
    group.throughput(Throughput::Elements(texts.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let results: Vec<_> = texts.iter().map(|text| analyzer.analyze(text)).collect();
            black_box(results)
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| black_box(analyze_batch(&analyzer, &texts)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenizers,
    bench_text_analysis,
    bench_stream_reuse,
    bench_batch
);

criterion_main!(benches);

//! Criterion benchmarks for Dalil.
//!
//! Covers the hot paths of a query:
//! - Text normalization and tokenization
//! - Edit distance and fuzzy scoring
//! - Intent extraction
//! - Full smart search over a synthetic directory, sequential and parallel

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dalil::analysis::normalizer::normalize;
use dalil::analysis::tokenizer::tokenize;
use dalil::config::EngineConfig;
use dalil::document::{CandidateRecord, CategoryRecord};
use dalil::search::{Locale, SmartSearchEngine};
use dalil::util::levenshtein::{edit_distance, fuzzy_score};

const QUERIES: &[&str] = &[
    "مقهى في مسقط",
    "best verified restaurants in sohar",
    "صيدلية مفتوحة قريب السيب",
    "coffe shop muscat",
    "",
];

/// Generate a synthetic directory for benchmarking.
fn generate_directory(count: usize) -> Vec<CandidateRecord> {
    let names = [
        ("Blue Café", "مقهى الأزرق", "cafe"),
        ("Sunrise Bakery", "مخبز الشروق", "bakery"),
        ("Corner Pharmacy", "صيدلية الزاوية", "pharmacy"),
        ("Al Bahar Seafood", "مطعم البحر", "restaurant"),
        ("Desert Rose Hotel", "فندق وردة الصحراء", "hotel"),
        ("City Gym", "نادي المدينة", "gym"),
    ];
    let cities = ["Muscat", "Sohar", "Nizwa", "Salalah", "Seeb", "Sur"];

    (0..count)
        .map(|i| {
            let (en, ar, tag) = names[i % names.len()];
            CandidateRecord::new(format!("{en} {i}"), format!("{ar} {i}"))
                .with_id(format!("b{i}"))
                .with_city(cities[i % cities.len()])
                .with_category_id(format!("c{}", i % names.len()))
                .with_description(format!("{en} serving the neighbourhood"), ar)
                .with_tags([tag, "family"])
                .verified(i % 3 == 0)
                .special(i % 7 == 0)
        })
        .collect()
}

fn generate_categories() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new("c0", "cafes", "Cafes", "مقاهي"),
        CategoryRecord::new("c1", "bakeries", "Bakeries", "مخابز"),
        CategoryRecord::new("c2", "pharmacies", "Pharmacies", "صيدليات"),
        CategoryRecord::new("c3", "restaurants", "Restaurants", "مطاعم"),
        CategoryRecord::new("c4", "hotels", "Hotels", "فنادق"),
        CategoryRecord::new("c5", "gyms", "Gyms", "نوادي"),
    ]
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let text = "أبحث عن مَقْهى مميّز في مسقط - Looking for the BEST coffee-shop in Muscat!";
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("normalize", |b| b.iter(|| normalize(black_box(text))));
    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(text))));

    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy");
    let pairs = [
        ("restaurant", "restuarant"),
        ("pharmacy", "pharmacies"),
        ("مطعم", "مطاعم"),
        ("coffee", "bakery"),
    ];

    group.bench_function("edit_distance", |b| {
        b.iter(|| {
            for (a, t) in pairs {
                black_box(edit_distance(black_box(a), black_box(t)));
            }
        })
    });
    group.bench_function("fuzzy_score", |b| {
        b.iter(|| {
            for (a, t) in pairs {
                black_box(fuzzy_score(black_box(a), black_box(t)));
            }
        })
    });

    group.finish();
}

fn bench_extract_intent(c: &mut Criterion) {
    let engine = SmartSearchEngine::default();
    let categories = generate_categories();

    c.bench_function("extract_intent", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(engine.extract_intent(black_box(query), &categories, Locale::En));
            }
        })
    });
}

fn bench_smart_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("smart_search");
    let categories = generate_categories();
    let sequential = SmartSearchEngine::new(EngineConfig::default().with_parallel_threshold(usize::MAX));
    let parallel = SmartSearchEngine::new(EngineConfig::default().with_parallel_threshold(1));

    for size in [100, 1_000, 10_000] {
        let records = generate_directory(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &records, |b, records| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(sequential.smart_search(query, records, &categories, Locale::En, None));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &records, |b, records| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(parallel.smart_search(query, records, &categories, Locale::En, None));
                }
            })
        });
    }

    group.finish();
}

// Group all benchmarks
criterion_group!(
    benches,
    bench_text_analysis,
    bench_fuzzy,
    bench_extract_intent,
    bench_smart_search
);

criterion_main!(benches);

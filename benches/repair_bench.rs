use criterion::{Criterion, black_box, criterion_group, criterion_main};
use notemend::keyword::normalize_keyword;
use notemend::lexicon::Lexicon;
use notemend::repair::TextRepairer;
use notemend::util::levenshtein_distance;

const WORDS: &[&str] = &[
    "the", "graph", "is", "a", "pair", "of", "vertices", "and", "edges", "every", "tree",
    "bipartite", "random", "field", "markov", "model", "network", "learning", "data", "set",
    "dataset", "information", "extraction", "ontology", "matching", "schema",
];

fn generate_notes(count: usize) -> Vec<String> {
    let damaged = [
        "the graph is apair of vertices and edges",
        "every tree is bi-partite",
        "markov random fields(MRFs) model the data-set",
        "ontology matching,e.g.schema matching",
        "information extraction from networklearning",
    ];
    (0..count)
        .map(|i| damaged[i % damaged.len()].to_string())
        .collect()
}

fn bench_repair(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(WORDS);
    let repairer = TextRepairer::new(&lexicon);
    let notes = generate_notes(100);

    c.bench_function("repair_100_notes", |b| {
        b.iter(|| {
            for note in &notes {
                black_box(repairer.analyze(black_box(note)));
            }
        })
    });
}

fn bench_keyword(c: &mut Criterion) {
    let keywords = [
        "Markov Random Fields (MRFs)",
        "object identification (Lim et al. 1993)",
        "[Local similarity] Adamic-Adar",
        "Ontology-based information extraction(OBIE)",
    ];

    c.bench_function("normalize_keyword", |b| {
        b.iter(|| {
            for keyword in keywords {
                black_box(normalize_keyword(black_box(keyword)));
            }
        })
    });
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    for (name, a, b) in [
        ("short", "mrfs", "mrf"),
        ("medium", "information extraction", "informationextraction"),
    ] {
        group.bench_function(name, |bench| {
            bench.iter(|| black_box(levenshtein_distance(black_box(a), black_box(b))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_repair, bench_keyword, bench_levenshtein);
criterion_main!(benches);

use notemend::keyword::{KeywordConfig, KeywordNormalizer, normalize_keyword};
use notemend::names::{normalize_name, normalize_title};
use notemend::note_key::{KeyFilter, key_of, strip_key};
use notemend::util::{levenshtein_distance, normalized_distance};

#[test]
fn test_reference_removed_without_abbreviation() {
    let normalized = normalize_keyword("object identification (Lim et al. 1993)");

    assert_eq!(normalized.term, "object identification");
    assert!(normalized.abbreviations.is_empty());
    assert!(normalized.specifications.is_empty());
}

#[test]
fn test_abbreviation_pair() {
    let (term, abbreviations, _) = normalize_keyword("Markov Random Fields (MRFs)").into_parts();

    assert_eq!(term, "Markov Random Fields");
    assert_eq!(
        abbreviations,
        vec![("Markov Random Fields".to_string(), "MRFs".to_string())]
    );
}

#[test]
fn test_strict_threshold_rejects_plural_abbreviation() {
    let strict = KeywordNormalizer::new(KeywordConfig {
        max_abbreviation_distance: 0.0,
    });

    let exact = strict.normalize("Markov Random Fields (MRF)");
    assert_eq!(exact.term, "Markov Random Fields");
    assert_eq!(exact.abbreviations.len(), 1);

    let plural = strict.normalize("Markov Random Fields (MRFs)");
    assert_eq!(plural.term, "Markov Random Fields (MRFs)");
    assert!(plural.abbreviations.is_empty());
}

#[test]
fn test_titles_and_names() {
    assert_eq!(normalize_title("  deep residual learning "), "Deep Residual Learning");
    assert_eq!(normalize_name(" jos\u{e9} garc\u{ed}a "), "Jose Garcia");
}

#[test]
fn test_edit_distance_properties() {
    for (a, b) in [("kitten", "sitting"), ("", "abc"), ("flaw", "lawn"), ("caf\u{e9}", "cafe")] {
        assert_eq!(levenshtein_distance(a, a), 0);
        assert_eq!(levenshtein_distance(a, ""), a.chars().count());
        assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        assert!((0.0..=1.0).contains(&normalized_distance(a, b)));
    }
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
}

#[test]
fn test_note_keys_select_and_strip() {
    let notes = [
        "<def> a graph is a pair </def>",
        "<Thm>every tree is bipartite</thm>",
        "plain note",
    ];

    assert_eq!(key_of(notes[1]), "thm");
    assert_eq!(strip_key(notes[1]), "every tree is bipartite");
    assert_eq!(strip_key(notes[2]), "plain note");

    let filter = KeyFilter::new(["DEF", "none"]);
    let selected: Vec<&str> = notes.iter().copied().filter(|n| filter.accepts(n)).collect();
    assert_eq!(selected, vec![notes[0], notes[2]]);
}

//! Integration tests for the rapid_gist analysis engine.

use rapid_gist::{
    extract_keywords, summarize, Analyzer, KeywordExtractor, LocalAnalyzer, SentenceDeduper,
    Sentence, Summarizer, SummaryConfig, Tokenizer,
};

const RENEWABLES_TEXT: &str = "Solar panels convert sunlight into electricity, and their \
    prices keep falling every year. Wind turbines harvest coastal gusts along exposed \
    ridgelines. Hydroelectric dams store seasonal rainfall behind concrete walls, releasing \
    water through turbines during peak demand. Solar panels convert sunlight into \
    electricity, and their prices keep falling each year. Geothermal plants tap volcanic \
    heat far below the surface. Grid operators juggle these variable sources with battery \
    storage, demand forecasting, and flexible pricing. Battery storage costs have dropped \
    sharply, making overnight supply practical. Rural cooperatives increasingly own their \
    generation assets outright.";

#[test]
fn summarize_is_deterministic() {
    for k in 1..=4 {
        let first = summarize(RENEWABLES_TEXT, k);
        let second = summarize(RENEWABLES_TEXT, k);
        assert_eq!(first, second, "k={k}");
    }
}

#[test]
fn extract_keywords_is_deterministic() {
    for top_n in 1..=6 {
        let first = extract_keywords(RENEWABLES_TEXT, top_n);
        let second = extract_keywords(RENEWABLES_TEXT, top_n);
        assert_eq!(first, second, "top_n={top_n}");
    }
}

#[test]
fn summary_length_is_bounded() {
    for k in 1..=10 {
        assert!(summarize(RENEWABLES_TEXT, k).len() <= k);
    }
}

#[test]
fn keyword_length_is_bounded() {
    for top_n in 1..=12 {
        assert!(extract_keywords(RENEWABLES_TEXT, top_n).len() <= top_n);
    }
}

#[test]
fn summary_preserves_source_order() {
    let summary = summarize(RENEWABLES_TEXT, 3);
    let mut last_pos = 0;
    for sentence in &summary {
        let pos = RENEWABLES_TEXT
            .find(sentence.as_str())
            .expect("summary sentence must come verbatim from the source");
        assert!(pos >= last_pos, "sentences out of source order");
        last_pos = pos;
    }
}

#[test]
fn short_input_passes_through_unmodified() {
    let text = "Glaciers retreat in summer. Farmers irrigate terraced fields.";
    let summary = summarize(text, 5);
    assert_eq!(
        summary,
        vec!["Glaciers retreat in summer", "Farmers irrigate terraced fields"]
    );
}

#[test]
fn empty_input_degrades_gracefully() {
    assert!(summarize("", 3).is_empty());
    assert!(summarize("   \n\t  ", 3).is_empty());
    assert!(extract_keywords("", 5).is_empty());
}

#[test]
fn dedupe_is_idempotent() {
    let tokenizer = Tokenizer::new();
    let deduper = SentenceDeduper::new(&tokenizer, 0.78);
    let input: Vec<Sentence> = [
        "Solar panels convert sunlight into electricity",
        "Solar panels convert sunlight into electric power",
        "Wind turbines spin through coastal storms",
        "Wind turbines spin through coastal storms often",
    ]
    .iter()
    .enumerate()
    .map(|(i, t)| Sentence::new(*t, i))
    .collect();

    let once = deduper.dedupe(&input);
    let twice = deduper.dedupe(&once);
    assert_eq!(once, twice);
}

#[test]
fn near_identical_sentences_collapse() {
    // Two near-identical solar sentences appear in the corpus; at most one
    // survives into any summary
    let summary = summarize(RENEWABLES_TEXT, 4);
    let solar_count = summary
        .iter()
        .filter(|s| s.contains("Solar panels convert sunlight"))
        .count();
    assert!(solar_count <= 1);
}

#[test]
fn two_topic_scenario_keeps_both_topics() {
    let text = "The cat sat on the mat. The cat sat on the mat quietly. \
        A dog ran fast through the big green park today.";
    let summary = summarize(text, 2);

    assert_eq!(summary.len(), 2);
    // The dog sentence contributes new vocabulary, so it must be present
    assert!(summary.iter().any(|s| s.contains("dog ran fast")));
    // The two near-identical cat sentences collapse to one
    let cat_count = summary.iter().filter(|s| s.contains("cat sat")).count();
    assert_eq!(cat_count, 1);
}

#[test]
fn short_words_only_yields_no_keywords() {
    // No token reaches the four-character minimum
    let keywords = extract_keywords("The cat sat on a big red mat by my toy box.", 5);
    assert!(keywords.is_empty());
}

#[test]
fn repeated_phrase_subsumes_constituents() {
    let keywords = extract_keywords(
        "machine learning machine learning algorithms machine learning",
        3,
    );

    assert_eq!(keywords[0], "machine learning");
    assert!(keywords.contains(&"algorithms".to_string()));
    assert!(!keywords.contains(&"machine".to_string()));
    assert!(!keywords.contains(&"learning".to_string()));
}

#[test]
fn phrase_constituents_never_appear_standalone() {
    let keywords = extract_keywords(RENEWABLES_TEXT, 10);
    let phrases: Vec<&String> = keywords.iter().filter(|k| k.contains(' ')).collect();

    for phrase in phrases {
        for word in phrase.split(' ') {
            assert!(
                !keywords.iter().any(|k| k == word),
                "{word} appears standalone alongside phrase {phrase}"
            );
        }
    }
}

#[test]
fn local_analyzer_combines_both_outputs() {
    let analyzer = LocalAnalyzer::new();
    let analysis = analyzer.analyze(RENEWABLES_TEXT, 3, 8).unwrap();

    assert!(!analysis.summary.is_empty());
    assert!(analysis.summary.len() <= 3);
    assert!(!analysis.keywords.is_empty());
    assert!(analysis.keywords.len() <= 8);
}

#[test]
fn local_analyzer_rejects_zero_limits() {
    let analyzer = LocalAnalyzer::new();
    assert!(analyzer.analyze(RENEWABLES_TEXT, 0, 5).is_err());
    assert!(analyzer.analyze(RENEWABLES_TEXT, 3, 0).is_err());
}

#[test]
fn custom_config_thresholds_apply() {
    // With an aggressive summary dedupe threshold the summary may shrink
    // below k, but it never grows past it
    let summarizer = Summarizer::with_config(
        SummaryConfig::default()
            .with_summary_dedupe_threshold(0.2)
            .with_lambda(0.9),
    );
    let summary = summarizer.summarize(RENEWABLES_TEXT, 4);
    assert!(summary.len() <= 4);
    assert!(!summary.is_empty());
}

#[test]
fn keyword_extractor_with_custom_tokenizer() {
    let extractor = KeywordExtractor::new()
        .with_tokenizer(Tokenizer::with_stopwords(rapid_gist::StopwordFilter::empty()));
    // With no stopword filtering, function words become candidates too
    let keywords = extractor.extract("through the looking glass through the mirror", 5);
    assert!(keywords.iter().any(|k| k.contains("through")));
}

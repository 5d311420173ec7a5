//! Library API integration tests
use precis_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_summarize_api() {
    let text = read_fixture("article.txt");
    let summary = summarize(&text);

    assert!(!summary.is_empty());
    assert!(summary.len() < text.len());
    assert!(summary.contains("In conclusion"));
    assert!(!summary.contains("Lisbon"));
}

#[test]
fn test_summary_length_follows_document_size() {
    let text = read_fixture("article.txt");
    let n = count_sentences(&text);
    assert_eq!(n, 14);

    let summary = Summarizer::new().summarize_detailed(&text);
    let expected = 3usize.max(5usize.min((n as f64 * 0.3).floor() as usize));
    assert_eq!(summary.selected_count(), expected);
    assert_eq!(count_sentences(&summary.summary), expected);
}

#[test]
fn test_summary_preserves_document_order() {
    let text = read_fixture("article.txt");
    let summary = Summarizer::new().summarize_detailed(&text);

    let positions: Vec<usize> = summary
        .selected
        .iter()
        .map(|s| text.find(&s.text).expect("selected sentence should come from input"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);

    let joined = summary
        .selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(summary.summary, joined);
}

#[test]
fn test_short_fixture_unchanged() {
    let text = read_fixture("short.txt");
    assert_eq!(summarize(&text), text);
}

#[test]
fn test_determinism() {
    let text = read_fixture("article.txt");
    let first = summarize(&text);
    for _ in 0..5 {
        assert_eq!(summarize(&text), first);
    }
}

#[test]
fn test_summarizer_builder() {
    let text = read_fixture("article.txt");
    let config = SummaryConfig::builder().min_sentences(2).max_sentences(2).build();
    let summary = Summarizer::with_config(config).summarize_detailed(&text);
    assert_eq!(summary.selected_count(), 2);
}

#[test]
fn test_default_config_matches_summarize() {
    let text = read_fixture("article.txt");
    assert_eq!(summarize_with_config(&text, &SummaryConfig::default()), summarize(&text));
}

#[test]
fn test_conclusion_boost_changes_selection() {
    let boosted = "Pears ripen in autumn. \
        Farmers water the apple trees. \
        In conclusion, orchards grow pears. \
        Orchards produce apples every autumn. \
        Autumn rain helps orchards.";
    let plain = boosted.replace("In conclusion, orchards", "Honestly, orchards");

    let boosted_summary = summarize(boosted);
    let plain_summary = summarize(&plain);

    assert!(boosted_summary.contains("In conclusion, orchards grow pears."));
    assert!(!plain_summary.contains("Honestly, orchards grow pears."));
    assert!(plain_summary.contains("Pears ripen in autumn."));
}

#[test]
fn test_similarity_properties() {
    let sentences = split_sentences(&read_fixture("article.txt"));
    for a in &sentences {
        for b in &sentences {
            let ab = similarity(a, b);
            assert_eq!(ab, similarity(b, a));
            assert!(ab >= 0.0 && ab <= 1.0 + 1e-12);
        }
    }
}

#[test]
fn test_summary_json_contract() {
    let json = Summarizer::new()
        .summarize_detailed(&read_fixture("article.txt"))
        .to_json()
        .unwrap();
    assert!(json.is_object());
    assert!(json.get("summary").is_some());
    assert_eq!(json["short_circuited"], false);
}

#[test]
fn test_edge_case_empty() {
    assert_eq!(summarize(""), "");
}

#[test]
fn test_edge_case_unicode() {
    let text = "Ça marche très bien. Über alles gut! 東京は大きい都市です。 Ελληνικά κείμενα εδώ. Добрый день всем. Emoji 🚀 rockets fly.";
    let summary = summarize(text);
    assert!(!summary.is_empty());
}

#[cfg(feature = "html")]
#[test]
fn test_html_fixture() {
    let html = read_fixture("article.html");
    assert!(looks_like_html(&html));

    let text = html_to_text(&html);
    assert!(!text.contains("Home"));
    assert!(!text.contains("font-family"));
    assert_eq!(count_sentences(&text), 10);

    let summary = summarize(&text);
    assert!(summary.contains("In conclusion"));
}

#[test]
fn test_read_file_api() {
    let text = read_file(&get_fixture_path("short.txt")).expect("fixture should exist");
    assert!(text.contains("Extractive"));
    assert!(matches!(read_file("missing.txt"), Err(PrecisError::FileNotFound(_))));
}

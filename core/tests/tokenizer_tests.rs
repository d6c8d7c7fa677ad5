use search_core::tokenizer::extract_keywords;
use search_core::Stopwords;

#[test]
fn it_lowercases_and_dedups() {
    let words = extract_keywords("Running Runners RUN! running, RUN.", &Stopwords::english());
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["run", "runners", "running"]);
}

#[test]
fn it_filters_stopwords() {
    let words = extract_keywords("The quick brown fox and the lazy dog", &Stopwords::english());
    assert!(!words.contains("the"));
    assert!(!words.contains("and"));
    assert!(words.contains("fox"));
}

#[test]
fn it_keeps_digits_and_unicode_letters() {
    let words = extract_keywords("Café 128GB SSD – naïve", &Stopwords::empty());
    for w in ["café", "128gb", "ssd", "naïve"] {
        assert!(words.contains(w), "missing {w}");
    }
}

#[test]
fn it_keeps_hyphenated_product_words_whole() {
    let words = extract_keywords("Organic cotton t-shirt with Wi-Fi tag", &Stopwords::english());
    assert!(words.contains("t-shirt"));
    assert!(words.contains("wi-fi"));
    assert!(!words.contains("shirt"));
}

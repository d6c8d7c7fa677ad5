use search_core::{search, InvertedIndex, MatchPolicy, Record, SearchConfig, Searcher, Stopwords};

fn shoes() -> (Vec<Record>, Stopwords) {
    let sw = Stopwords::from_words(["the", "a", "of"]);
    let recs = vec![
        Record::new(0, "Red Running Shoe", "A shoe for running", "Acme"),
        Record::new(1, "Blue Shoe", "shoe for walking", "Acme"),
    ];
    (recs, sw)
}

#[test]
fn running_shoe_example() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    assert_eq!(search("running shoe", &idx, &sw), vec![(0, 2), (1, 1)]);
}

#[test]
fn plural_query_matches_singular_keyword() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    assert_eq!(search("Shoes", &idx, &sw), vec![(0, 1), (1, 1)]);
}

#[test]
fn stopword_only_query_is_empty() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    assert!(search("the of a", &idx, &sw).is_empty());
}

#[test]
fn no_similar_keyword_is_empty() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    assert!(search("television", &idx, &sw).is_empty());
}

#[test]
fn every_record_keyword_is_indexed() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    for kw in ["red", "running", "shoe", "for", "acme"] {
        assert!(idx.get(kw).is_some_and(|ids| ids.contains(&0)), "{kw} -> 0");
    }
    for kw in ["blue", "shoe", "walking", "acme"] {
        assert!(idx.get(kw).is_some_and(|ids| ids.contains(&1)), "{kw} -> 1");
    }
}

#[test]
fn higher_threshold_narrows_matches() {
    let (recs, sw) = shoes();
    let idx = InvertedIndex::build(&recs, &sw);
    let strict = SearchConfig { threshold: 0.9, policy: MatchPolicy::FirstMatch };
    assert!(Searcher::with_config(&idx, &sw, strict).search("shoes").is_empty());
    assert_eq!(Searcher::with_config(&idx, &sw, strict).search("shoe").len(), 2);
}

#[test]
fn records_with_missing_fields_still_searchable() {
    let sw = Stopwords::english();
    let recs = vec![
        Record { id: 0, title: Some("Leather Wallet".into()), ..Record::default() },
        Record { id: 1, description: Some("slim wallet".into()), ..Record::default() },
        Record { id: 2, ..Record::default() },
    ];
    let idx = InvertedIndex::build(&recs, &sw);
    assert_eq!(search("wallets", &idx, &sw), vec![(0, 1), (1, 1)]);
}

use crate::config::{MatchPolicy, SearchConfig};
use crate::fuzzy::{ratio_chars, ratio_upper_bound};
use crate::index::InvertedIndex;
use crate::record::RecordId;
use crate::stopwords::Stopwords;
use crate::tokenizer::extract_keywords;
use std::collections::HashMap;
use std::time::Instant;

/// Ranked `(record id, count)` pairs: count descending, then id ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    ranked: Vec<(RecordId, u32)>,
}

impl MatchResult {
    fn from_counts(counts: HashMap<RecordId, u32>) -> Self {
        let mut ranked: Vec<(RecordId, u32)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Self { ranked }
    }

    pub fn ranked(&self) -> &[(RecordId, u32)] { &self.ranked }

    /// The `n` best-ranked entries.
    pub fn top(&self, n: usize) -> &[(RecordId, u32)] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn count(&self, id: RecordId) -> Option<u32> {
        self.ranked.iter().find(|(r, _)| *r == id).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize { self.ranked.len() }

    pub fn is_empty(&self) -> bool { self.ranked.is_empty() }

    pub fn into_vec(self) -> Vec<(RecordId, u32)> { self.ranked }
}

/// Query engine over an index built beforehand.
pub struct Searcher<'a> {
    index: &'a InvertedIndex,
    stopwords: &'a Stopwords,
    config: SearchConfig,
    // index keywords as chars, in the index's key order
    keys: Vec<(&'a str, Vec<char>)>,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a InvertedIndex, stopwords: &'a Stopwords) -> Self {
        Self::with_config(index, stopwords, SearchConfig::default())
    }

    pub fn with_config(
        index: &'a InvertedIndex,
        stopwords: &'a Stopwords,
        config: SearchConfig,
    ) -> Self {
        let keys = index.keywords().map(|k| (k, k.chars().collect())).collect();
        Self { index, stopwords, config, keys }
    }

    /// Index keywords credited for one query keyword, in key order.
    fn matching_keys<'s>(&'s self, keyword: &'s str) -> impl Iterator<Item = &'a str> + 's {
        let query: Vec<char> = keyword.chars().collect();
        let threshold = self.config.threshold;
        let hits = self.keys.iter().filter(move |(_, chars)| {
            ratio_upper_bound(query.len(), chars.len()) > threshold
                && ratio_chars(&query, chars) > threshold
        });
        let limit = match self.config.policy {
            MatchPolicy::FirstMatch => 1,
            MatchPolicy::AllMatches => usize::MAX,
        };
        hits.take(limit).map(|(k, _)| *k)
    }

    pub fn search(&self, query: &str) -> MatchResult {
        let start = Instant::now();
        let keywords = extract_keywords(query, self.stopwords);
        let mut counts: HashMap<RecordId, u32> = HashMap::new();
        for keyword in &keywords {
            for key in self.matching_keys(keyword) {
                tracing::trace!(query_keyword = %keyword, index_keyword = key, "fuzzy match");
                if let Some(ids) = self.index.get(key) {
                    for id in ids {
                        *counts.entry(*id).or_insert(0) += 1;
                    }
                }
            }
        }
        let result = MatchResult::from_counts(counts);
        tracing::debug!(
            query,
            num_keywords = keywords.len(),
            total_hits = result.len(),
            elapsed = ?start.elapsed(),
            "search done"
        );
        result
    }
}

/// Search with the default configuration.
pub fn search(query: &str, index: &InvertedIndex, stopwords: &Stopwords) -> Vec<(RecordId, u32)> {
    Searcher::new(index, stopwords).search(query).into_vec()
}

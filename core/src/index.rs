use crate::record::{Record, RecordId};
use crate::stopwords::Stopwords;
use crate::tokenizer::extract_keywords;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

pub type Postings = BTreeSet<RecordId>;

/// Keyword -> ids of the records containing it. Built once, read-only afterwards.
///
/// Keys are kept sorted so that every scan over them is reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Postings>,
    num_records: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index every record's description, title and merchant.
    ///
    /// Description and title are tokenized and stopword-filtered. The merchant is
    /// taken whole (trimmed, lowercased) and never filtered. Missing fields add nothing.
    pub fn build<'a, I>(records: I, stopwords: &Stopwords) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let start = Instant::now();
        let mut index = Self::new();
        tracing::info!("indexing products");
        for record in records {
            index.insert_record(record, stopwords);
        }
        tracing::info!(
            num_records = index.num_records,
            num_keywords = index.postings.len(),
            elapsed = ?start.elapsed(),
            "indexing products done"
        );
        index
    }

    fn insert_record(&mut self, record: &Record, stopwords: &Stopwords) {
        self.num_records += 1;
        let text_fields = [record.description.as_deref(), record.title.as_deref()];
        for text in text_fields.into_iter().flatten() {
            for keyword in extract_keywords(text, stopwords) {
                self.add(keyword, record.id);
            }
        }
        if let Some(merchant) = record.merchant.as_deref() {
            let merchant = merchant.trim().to_lowercase();
            if !merchant.is_empty() {
                self.add(merchant, record.id);
            }
        }
    }

    fn add(&mut self, keyword: String, id: RecordId) {
        self.postings.entry(keyword).or_default().insert(id);
    }

    pub fn get(&self, keyword: &str) -> Option<&Postings> {
        self.postings.get(keyword)
    }

    /// Keywords in ascending order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.postings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn num_records(&self) -> usize { self.num_records }
}

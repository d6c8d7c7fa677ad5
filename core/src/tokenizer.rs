use crate::stopwords::Stopwords;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // Runs of letters/digits; inner apostrophes and hyphens stay part of the word
    // (don't, men's, t-shirt).
    static ref RE: Regex =
        Regex::new(r"(?u)[\p{L}\p{N}]+(?:['-][\p{L}\p{N}]+)*").expect("valid regex");
}

/// Split text into lowercase words, preserving order and duplicates. No stopword filtering.
pub fn words(text: &str) -> Vec<String> {
    let normalized = text.replace('\u{2019}', "'").to_lowercase();
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

/// Extract the keyword set of a text: lowercase words minus stopwords, deduplicated.
pub fn extract_keywords(text: &str, stopwords: &Stopwords) -> BTreeSet<String> {
    words(text)
        .into_iter()
        .filter(|w| !stopwords.contains(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let sw = Stopwords::from_words(["a", "for"]);
        let t = extract_keywords("A shoe, for RUNNING! Shoe.", &sw);
        assert_eq!(t.into_iter().collect::<Vec<_>>(), vec!["running", "shoe"]);
    }

    #[test]
    fn keeps_inner_apostrophes() {
        assert_eq!(words("Men’s boots 'classic'"), vec!["men's", "boots", "classic"]);
    }

    #[test]
    fn keeps_inner_hyphens() {
        assert_eq!(
            words("Cotton T-Shirt, Wi-Fi - ready--now"),
            vec!["cotton", "t-shirt", "wi-fi", "ready", "now"]
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(extract_keywords("   \t\n", &Stopwords::english()).is_empty());
        assert!(extract_keywords("", &Stopwords::english()).is_empty());
        assert!(extract_keywords("-- !! ..", &Stopwords::english()).is_empty());
    }
}

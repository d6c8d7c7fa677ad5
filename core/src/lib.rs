pub mod config;
pub mod fuzzy;
pub mod index;
pub mod record;
pub mod search;
pub mod stopwords;
pub mod tokenizer;

pub use config::{MatchPolicy, SearchConfig};
pub use index::InvertedIndex;
pub use record::{Record, RecordId};
pub use search::{search, MatchResult, Searcher};
pub use stopwords::Stopwords;

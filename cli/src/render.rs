use anyhow::Result;
use search_core::{MatchResult, Record, RecordId};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub record_id: RecordId,
    pub count: u32,
    pub title: &'a str,
    pub merchant: Option<&'a str>,
}

fn lookup(records: &[Record], id: RecordId) -> Option<&Record> {
    records.get(id as usize).filter(|r| r.id == id)
}

pub fn hits<'a>(result: &MatchResult, records: &'a [Record], top: usize) -> Vec<SearchHit<'a>> {
    result
        .top(top)
        .iter()
        .filter_map(|&(id, count)| {
            let r = lookup(records, id)?;
            Some(SearchHit {
                record_id: id,
                count,
                title: r.title_or_placeholder(),
                merchant: r.merchant.as_deref(),
            })
        })
        .collect()
}

/// Print the titles of the top `top` records.
pub fn render_plain<W: Write>(
    out: &mut W,
    query: &str,
    result: &MatchResult,
    records: &[Record],
    top: usize,
) -> Result<()> {
    writeln!(out, "Search result for query: {query}")?;
    for hit in hits(result, records, top) {
        writeln!(out, "{}", hit.title)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(
    out: &mut W,
    query: &str,
    result: &MatchResult,
    records: &[Record],
    top: usize,
    took: Duration,
) -> Result<()> {
    let response = SearchResponse {
        query,
        took_s: took.as_secs_f64(),
        total_hits: result.len(),
        results: hits(result, records, top),
    };
    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

use crate::render::{render_json, render_plain, OutputFormat};
use anyhow::Result;
use search_core::{Record, Searcher};
use std::io::{BufRead, Write};
use std::time::Instant;

pub const QUERY_PROMPT: &str = "Please enter the search query text:";
pub const CONTINUE_PROMPT: &str = "Do you want to continue?(y/n)";

/// An interactive search session over a loaded catalog.
pub struct Session<'a> {
    searcher: Searcher<'a>,
    records: &'a [Record],
    top: usize,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(
        searcher: Searcher<'a>,
        records: &'a [Record],
        top: usize,
        format: OutputFormat,
    ) -> Self {
        Self { searcher, records, top, format }
    }

    pub fn run_query<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        let start = Instant::now();
        let result = self.searcher.search(query);
        match self.format {
            OutputFormat::Plain => render_plain(out, query, &result, self.records, self.top),
            OutputFormat::Json => {
                render_json(out, query, &result, self.records, self.top, start.elapsed())
            }
        }
    }

    /// Prompt for queries until the user declines to continue or input ends.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        loop {
            let Some(query) = prompt(&mut input, out, QUERY_PROMPT)? else { break };
            self.run_query(query.trim(), out)?;
            match prompt(&mut input, out, CONTINUE_PROMPT)? {
                Some(answer) if !answer.contains('n') => continue,
                _ => break,
            }
        }
        Ok(())
    }
}

/// `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
